use glam::Vec2;
use kurbo::{BezPath, Point};
use lottie_data::model::ShapeData;

/// Receiver for path drawing operations.
///
/// Implementors are stateful accumulators; [`build_path`] only ever writes to them.
pub trait PathSink {
    fn reset(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32);
    fn close(&mut self);
}

/// A single recorded drawing operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

impl PathSink for Vec<PathOp> {
    fn reset(&mut self) {
        self.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathOp::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathOp::LineTo(Vec2::new(x, y)));
    }

    fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.push(PathOp::CubicTo(
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            Vec2::new(x, y),
        ));
    }

    fn close(&mut self) {
        self.push(PathOp::Close);
    }
}

impl PathSink for BezPath {
    fn reset(&mut self) {
        *self = BezPath::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        BezPath::move_to(self, Point::new(x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        BezPath::line_to(self, Point::new(x as f64, y as f64));
    }

    fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.curve_to(
            Point::new(x1 as f64, y1 as f64),
            Point::new(x2 as f64, y2 as f64),
            Point::new(x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.close_path();
    }
}

/// Replays `shape` into `sink`.
///
/// The sink is reset first, then receives exactly one move to the initial point.
/// A curve whose first control point sits on the current point and whose second
/// control point sits on its vertex is emitted as a line. The comparison is exact:
/// a control point off by a single ulp still produces a cubic.
pub fn build_path<P: PathSink + ?Sized>(shape: &ShapeData, sink: &mut P) {
    tracing::trace!(curves = shape.curves.len(), closed = shape.closed, "building path");

    sink.reset();
    let initial = shape.initial_point;
    sink.move_to(initial.x, initial.y);

    let mut current = initial;
    for curve in &shape.curves {
        let cp1 = curve.control_point1;
        let cp2 = curve.control_point2;
        let vertex = curve.vertex;

        if cp1 == current && cp2 == vertex {
            sink.line_to(vertex.x, vertex.y);
        } else {
            sink.cubic_to(cp1.x, cp1.y, cp2.x, cp2.y, vertex.x, vertex.y);
        }

        current = vertex;
    }

    if shape.closed {
        sink.close();
    }
}

/// Builds `shape` into a fresh [`BezPath`].
pub fn to_bez_path(shape: &ShapeData) -> BezPath {
    let mut path = BezPath::new();
    build_path(shape, &mut path);
    path
}
