use serde::{Deserialize, Serialize};

/// A 2D coordinate. Equality is exact, component by component.
pub type Point = glam::Vec2;

/// Raw `[x, y]` pair as it appears in Lottie JSON.
pub type Vec2 = [f32; 2];

/// One cubic segment: two control points and the anchor it ends on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct CurveVertex {
    pub control_point1: Point,
    pub control_point2: Point,
    pub vertex: Point,
}

impl CurveVertex {
    pub fn new(control_point1: Point, control_point2: Point, vertex: Point) -> Self {
        Self {
            control_point1,
            control_point2,
            vertex,
        }
    }
}

/// A fully evaluated shape outline for a single frame.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ShapeData {
    pub initial_point: Point,
    #[serde(default)]
    pub curves: Vec<CurveVertex>,
    #[serde(default)]
    pub closed: bool,
}

impl ShapeData {
    pub fn new(initial_point: Point, curves: Vec<CurveVertex>, closed: bool) -> Self {
        Self {
            initial_point,
            curves,
            closed,
        }
    }

    /// Converts the vertex/tangent form used by Lottie path keyframes.
    ///
    /// Tangents are relative to their vertex. Missing tangents count as zero.
    /// A closed path gets one extra curve back to the first vertex.
    pub fn from_bezier(path: &BezierPath) -> Self {
        let Some(first) = path.v.first() else {
            return Self::new(Point::ZERO, Vec::new(), path.c);
        };

        let point = |i: usize| Point::from_array(path.v[i]);
        let out_tangent = |i: usize| path.o.get(i).copied().map_or(Point::ZERO, Point::from_array);
        let in_tangent = |i: usize| path.i.get(i).copied().map_or(Point::ZERO, Point::from_array);

        let len = path.v.len();
        let mut curves = Vec::with_capacity(if path.c { len } else { len - 1 });
        for i in 1..len {
            curves.push(CurveVertex::new(
                point(i - 1) + out_tangent(i - 1),
                point(i) + in_tangent(i),
                point(i),
            ));
        }

        if path.c {
            let last = len - 1;
            curves.push(CurveVertex::new(
                point(last) + out_tangent(last),
                point(0) + in_tangent(0),
                point(0),
            ));
        }

        Self::new(Point::from_array(*first), curves, path.c)
    }
}

impl From<&BezierPath> for ShapeData {
    fn from(path: &BezierPath) -> Self {
        Self::from_bezier(path)
    }
}

/// Path keyframe value: vertices with in/out tangents.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BezierPath {
    #[serde(default)]
    pub c: bool,
    #[serde(default)]
    pub i: Vec<Vec2>,
    #[serde(default)]
    pub o: Vec<Vec2>,
    #[serde(default)]
    pub v: Vec<Vec2>,
}
