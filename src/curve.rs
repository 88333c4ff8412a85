use crate::math::{cubic_bezier_point, CubicBezier3d, Point3d, Vector3d};
use crate::{ControlPoint, ControlPointId, ControlPointSet};

/// The parameter step used to approximate a curve's direction, by default.
pub const DIRECTION_EPSILON: f64 = 0.01;

/// A single cubic bezier segment of a spline.
///
/// The segment does not own its control points; it refers to them by ID in
/// the owning spline's arena, which lets neighbouring segments share anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubicBezierCurve {
    anchor0: ControlPointId,
    control0: ControlPointId,
    control1: ControlPointId,
    anchor1: ControlPointId,
}

impl CubicBezierCurve {
    /// Creates a curve from four existing control points.
    pub fn new(
        anchor0: ControlPointId,
        control0: ControlPointId,
        control1: ControlPointId,
        anchor1: ControlPointId,
    ) -> Self {
        Self {
            anchor0,
            control0,
            control1,
            anchor1,
        }
    }

    /// Inserts the default S-shaped starting segment into `points`.
    pub(crate) fn seed(points: &mut ControlPointSet) -> Self {
        Self::insert(
            points,
            [
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(3.0, 0.0, 0.0),
                Point3d::new(3.0, 0.0, 5.0),
                Point3d::new(0.0, 0.0, 5.0),
            ],
        )
    }

    /// Inserts a starting segment centred on `origin` into `points`.
    pub(crate) fn seed_at(points: &mut ControlPointSet, origin: Point3d) -> Self {
        Self::insert(
            points,
            [
                origin + Vector3d::new(-8.0, 0.0, -10.0),
                origin + Vector3d::new(0.0, 0.0, -10.0),
                origin + Vector3d::new(0.0, 0.0, 10.0),
                origin + Vector3d::new(8.0, 0.0, 10.0),
            ],
        )
    }

    fn insert(points: &mut ControlPointSet, positions: [Point3d; 4]) -> Self {
        let [a0, c0, c1, a1] = positions.map(|p| points.insert(ControlPoint::new(p)));
        Self::new(a0, c0, c1, a1)
    }

    /// The anchor at the start of the curve.
    pub fn anchor0(&self) -> ControlPointId {
        self.anchor0
    }

    /// The handle attached to the start anchor.
    pub fn control0(&self) -> ControlPointId {
        self.control0
    }

    /// The handle attached to the end anchor.
    pub fn control1(&self) -> ControlPointId {
        self.control1
    }

    /// The anchor at the end of the curve.
    pub fn anchor1(&self) -> ControlPointId {
        self.anchor1
    }

    /// The IDs of all four control points, in curve order.
    pub fn point_ids(&self) -> [ControlPointId; 4] {
        [self.anchor0, self.control0, self.control1, self.anchor1]
    }

    /// Looks up the current positions of the control points.
    pub fn resolve(&self, points: &ControlPointSet) -> CubicBezier3d {
        CubicBezier3d::new(&self.point_ids().map(|id| points[id].position))
    }

    /// Samples the curve at local parameter `t`.
    pub fn position(&self, points: &ControlPointSet, t: f64) -> Point3d {
        let [a, b, c, d] = *self.resolve(points).points();
        cubic_bezier_point(a, b, c, d, t)
    }

    /// Approximates the direction of travel at `t`, using [DIRECTION_EPSILON].
    pub fn direction(&self, points: &ControlPointSet, t: f64) -> Vector3d {
        self.direction_with_step(points, t, DIRECTION_EPSILON)
    }

    /// Approximates the direction of travel at `t` by a backward difference.
    ///
    /// The result is not normalised. `t - step` is not clamped, so near the
    /// start of the curve the sample extrapolates past the first anchor.
    pub fn direction_with_step(&self, points: &ControlPointSet, t: f64, step: f64) -> Vector3d {
        self.position(points, t) - self.position(points, t - step)
    }
}
