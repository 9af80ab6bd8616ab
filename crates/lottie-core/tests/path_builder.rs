use lottie_core::{build_path, CurveVertex, PathOp, Point, ShapeData};

fn next_up(v: f32) -> f32 {
    if v == 0.0 {
        f32::from_bits(1)
    } else if v > 0.0 {
        f32::from_bits(v.to_bits() + 1)
    } else {
        f32::from_bits(v.to_bits() - 1)
    }
}

fn ops(shape: &ShapeData) -> Vec<PathOp> {
    let mut sink = Vec::new();
    build_path(shape, &mut sink);
    sink
}

#[test]
fn test_empty_open_shape_is_single_move() {
    let shape = ShapeData::new(Point::new(3.0, 4.0), vec![], false);
    assert_eq!(ops(&shape), vec![PathOp::MoveTo(Point::new(3.0, 4.0))]);
}

#[test]
fn test_empty_closed_shape() {
    let shape = ShapeData::new(Point::new(3.0, 4.0), vec![], true);
    assert_eq!(
        ops(&shape),
        vec![PathOp::MoveTo(Point::new(3.0, 4.0)), PathOp::Close]
    );
}

#[test]
fn test_closed_shape_ends_with_close() {
    let curves = vec![
        CurveVertex::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)),
        CurveVertex::new(Point::new(5.0, 6.0), Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
    ];
    let result = ops(&ShapeData::new(Point::ZERO, curves, true));
    assert_eq!(result.len(), 4);
    assert_eq!(result.last(), Some(&PathOp::Close));
    assert_eq!(
        result.iter().filter(|op| matches!(op, PathOp::MoveTo(_))).count(),
        1
    );
}

#[test]
fn test_degenerate_curve_becomes_line() {
    let start = Point::new(10.0, 20.0);
    let end = Point::new(30.5, -7.25);
    let shape = ShapeData::new(start, vec![CurveVertex::new(start, end, end)], false);
    assert_eq!(
        ops(&shape),
        vec![PathOp::MoveTo(start), PathOp::LineTo(end)]
    );
}

#[test]
fn test_one_ulp_off_first_control_point_stays_cubic() {
    let start = Point::new(10.0, 20.0);
    let end = Point::new(30.5, -7.25);
    let cp1 = Point::new(next_up(start.x), start.y);
    let shape = ShapeData::new(start, vec![CurveVertex::new(cp1, end, end)], false);
    assert_eq!(
        ops(&shape)[1],
        PathOp::CubicTo(cp1, end, end)
    );
}

#[test]
fn test_one_ulp_off_second_control_point_stays_cubic() {
    let start = Point::new(0.0, 0.0);
    let end = Point::new(-1.5, 8.0);
    let cp2 = Point::new(end.x, next_up(end.y));
    let shape = ShapeData::new(start, vec![CurveVertex::new(start, cp2, end)], false);
    assert_eq!(
        ops(&shape)[1],
        PathOp::CubicTo(start, cp2, end)
    );
}

#[test]
fn test_current_point_follows_previous_vertex() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    let c = Point::new(10.0, 10.0);
    let curves = vec![
        CurveVertex::new(Point::new(5.0, -5.0), b, b),
        // Starts on the previous vertex, not the initial point.
        CurveVertex::new(b, c, c),
        // Anchored at the initial point instead of `c`, so it is a real curve.
        CurveVertex::new(a, a, a),
    ];
    assert_eq!(
        ops(&ShapeData::new(a, curves, false)),
        vec![
            PathOp::MoveTo(a),
            PathOp::CubicTo(Point::new(5.0, -5.0), b, b),
            PathOp::LineTo(c),
            PathOp::CubicTo(a, a, a),
        ]
    );
}

#[test]
fn test_rebuild_is_idempotent() {
    let curves = vec![
        CurveVertex::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)),
        CurveVertex::new(Point::new(3.0, 3.0), Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
    ];
    let shape = ShapeData::new(Point::ZERO, curves, true);

    let mut sink = Vec::new();
    build_path(&shape, &mut sink);
    let first = sink.clone();
    build_path(&shape, &mut sink);
    assert_eq!(first, sink);
}

#[test]
fn test_bezier_keyframe_to_path() {
    let data: lottie_data::model::BezierPath = serde_json::from_value(serde_json::json!({
        "c": true,
        "v": [[0, 0], [100, 0], [100, 100]],
        "i": [[0, 0], [0, 0], [0, 0]],
        "o": [[0, 0], [0, 0], [0, 0]]
    }))
    .unwrap();
    let shape = ShapeData::from_bezier(&data);

    assert_eq!(
        ops(&shape),
        vec![
            PathOp::MoveTo(Point::new(0.0, 0.0)),
            PathOp::LineTo(Point::new(100.0, 0.0)),
            PathOp::LineTo(Point::new(100.0, 100.0)),
            PathOp::LineTo(Point::new(0.0, 0.0)),
            PathOp::Close,
        ]
    );
}
