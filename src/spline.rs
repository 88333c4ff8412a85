use itertools::Itertools;
use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::curve::DIRECTION_EPSILON;
use crate::math::{
    polyline_length, try_normalize, uniform_points_along_curve, CubicBezier3d, Point3d, Vector3d,
};
use crate::util::Interval;
use crate::{
    ControlPoint, ControlPointId, ControlPointSet, CubicBezierCurve, SplineError, SplineResult,
};

/// The base distance between the points of a newly added curve.
const EXTENSION_STEP: f64 = 4.0;

/// The default number of samples per curve when building a polyline.
const STEPS_PER_CURVE: usize = 100;

/// The maximum number of samples per curve when building a polyline.
const MAX_STEPS_PER_CURVE: usize = 200;

/// A single curve has this many control points and cannot be reduced further.
const MIN_CONTROL_POINTS: usize = 4;

/// The domain of the global curve parameter.
const UNIT_INTERVAL: Interval<f64> = Interval::new(0.0, 1.0);

/// Tunable parameters of a spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineSettings {
    /// The parameter step used to approximate the direction of travel.
    pub direction_epsilon: f64,
    /// The base distance between the points of a newly added curve.
    pub extension_step: f64,
    /// The number of samples taken per curve by [Spline::polyline], from 1 to 200.
    pub steps_per_curve: usize,
}

impl Default for SplineSettings {
    fn default() -> Self {
        Self {
            direction_epsilon: DIRECTION_EPSILON,
            extension_step: EXTENSION_STEP,
            steps_per_curve: STEPS_PER_CURVE,
        }
    }
}

/// A chain of cubic bezier curves.
///
/// Consecutive curves share the anchor between them: the end anchor of one
/// curve has the same [ControlPointId] as the start anchor of the next.
#[derive(Debug)]
pub struct Spline {
    /// Every control point referenced by the curves.
    points: ControlPointSet,
    /// The curves, ordered from the start of the spline to the end.
    curves: Vec<CubicBezierCurve>,
    /// The distinct control points in traversal order, rebuilt on every edit.
    control_points: Vec<ControlPointId>,
    /// Tunable parameters.
    settings: SplineSettings,
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

impl Spline {
    /// Creates a spline made of a single default curve.
    pub fn new() -> Self {
        Self::with_settings(SplineSettings::default())
    }

    /// Creates a spline made of a single curve around `origin`.
    pub fn at(origin: Point3d) -> Self {
        let mut points = ControlPointSet::new();
        let curve = CubicBezierCurve::seed_at(&mut points, origin);
        Self::from_seed(points, curve, SplineSettings::default())
    }

    /// Creates a spline made of a single default curve, with custom settings.
    pub fn with_settings(settings: SplineSettings) -> Self {
        let mut points = ControlPointSet::new();
        let curve = CubicBezierCurve::seed(&mut points);
        Self::from_seed(points, curve, settings)
    }

    fn from_seed(
        points: ControlPointSet,
        curve: CubicBezierCurve,
        settings: SplineSettings,
    ) -> Self {
        let mut spline = Self {
            points,
            curves: vec![curve],
            control_points: vec![],
            settings,
        };
        spline.rebuild_control_points();
        spline
    }

    /// Gets the spline's settings.
    pub fn settings(&self) -> &SplineSettings {
        &self.settings
    }

    /// Replaces the spline's settings.
    pub fn set_settings(&mut self, settings: SplineSettings) {
        self.settings = settings;
    }

    /// The curves, ordered from the start of the spline to the end.
    pub fn curves(&self) -> &[CubicBezierCurve] {
        &self.curves
    }

    /// The number of curves in the spline; always at least one.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// The distinct control points in traversal order.
    ///
    /// Each curve contributes its two handles and end anchor after the
    /// first anchor of the spline, so anchors sit at every third index.
    pub fn control_points(&self) -> &[ControlPointId] {
        &self.control_points
    }

    /// Iterates over the anchors, from the start of the spline to the end.
    pub fn anchors(&self) -> impl Iterator<Item = ControlPointId> + '_ {
        self.control_points.iter().step_by(3).copied()
    }

    /// The arena of control points, for evaluating individual curves.
    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    /// Gets a control point.
    pub fn control_point(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.points.get(id)
    }

    /// Gets a mutable reference to a control point, to edit its transform.
    pub fn control_point_mut(&mut self, id: ControlPointId) -> Option<&mut ControlPoint> {
        self.points.get_mut(id)
    }

    /// Gets the current geometry of the curve at `index`.
    pub fn segment(&self, index: usize) -> Option<CubicBezier3d> {
        self.curves.get(index).map(|curve| curve.resolve(&self.points))
    }

    /// Appends a curve after the end of the spline.
    ///
    /// The new curve starts at the current end anchor and continues in a
    /// straight line along the spline's direction of travel.
    pub fn add_curve_front(&mut self) {
        let last = self.curves[self.curves.len() - 1];
        let dir = self.extension_direction(&last, 1.0);
        let origin = self.points[last.anchor1()].position;
        let step = self.settings.extension_step;

        let [control0, control1, anchor1] = [1.0, 2.0, 3.0]
            .map(|k| self.points.insert(ControlPoint::new(origin + dir * (step * k))));
        self.curves.push(CubicBezierCurve::new(last.anchor1(), control0, control1, anchor1));

        self.rebuild_control_points();
        debug!("Added curve to end of spline, now {} curves", self.curves.len());
    }

    /// Prepends a curve before the start of the spline.
    ///
    /// The new curve ends at the current start anchor and approaches it in
    /// a straight line along the spline's direction of travel.
    pub fn add_curve_back(&mut self) {
        let first = self.curves[0];
        let dir = self.extension_direction(&first, 0.0);
        let origin = self.points[first.anchor0()].position;
        let step = self.settings.extension_step;

        let [anchor0, control0, control1] = [3.0, 2.0, 1.0]
            .map(|k| self.points.insert(ControlPoint::new(origin - dir * (step * k))));
        let curve = CubicBezierCurve::new(anchor0, control0, control1, first.anchor0());
        self.curves.insert(0, curve);

        self.rebuild_control_points();
        debug!("Added curve to start of spline, now {} curves", self.curves.len());
    }

    /// Deletes an anchor, returning whether the spline changed.
    ///
    /// Deleting an interior anchor merges the two curves on either side of
    /// it, keeping the outer anchors and handles. Deleting the first or last
    /// anchor drops the curve that ends there. Nothing happens if the spline
    /// has a single curve, or if `anchor` is not one of its anchors.
    pub fn delete_anchor(&mut self, anchor: ControlPointId) -> bool {
        if self.control_points.len() <= MIN_CONTROL_POINTS {
            trace!("Cannot delete anchor of a single curve spline");
            return false;
        }
        let flat_idx = match self.flat_index(anchor) {
            Some(idx) if idx % 3 == 0 => idx,
            Some(_) => {
                trace!("Cannot delete {:?}, it is a handle", anchor);
                return false;
            }
            None => {
                trace!("Cannot delete {:?}, it is not part of the spline", anchor);
                return false;
            }
        };

        let idx = flat_idx / 3;
        if idx == 0 {
            let removed = self.curves.remove(0);
            self.remove_points(&[removed.anchor0(), removed.control0(), removed.control1()]);
        } else if idx == self.curves.len() {
            let removed = self.curves.remove(idx - 1);
            self.remove_points(&[removed.control0(), removed.control1(), removed.anchor1()]);
        } else {
            let left = self.curves[idx - 1];
            let right = self.curves[idx];
            let merged = CubicBezierCurve::new(
                left.anchor0(),
                left.control0(),
                right.control1(),
                right.anchor1(),
            );
            self.curves[idx - 1] = merged;
            self.curves.remove(idx);
            self.remove_points(&[left.control1(), anchor, right.control0()]);
        }

        self.rebuild_control_points();
        debug!("Deleted anchor {}, now {} curves", idx, self.curves.len());
        true
    }

    /// Finds the curve containing the global parameter `t`, and the local
    /// parameter along that curve.
    pub fn locate(&self, t: f64) -> SplineResult<(usize, f64)> {
        if !UNIT_INTERVAL.contains(t) {
            return Err(SplineError::ParameterOutOfRange { t });
        }
        let count = self.curves.len() as f64;
        // `t == 1` would otherwise land one past the last curve
        let idx = usize::min((t * count).floor() as usize, self.curves.len() - 1);
        // Inverse lerp of `t` over `[idx / count, (idx + 1) / count]`
        let local_t = t * count - idx as f64;
        Ok((idx, local_t))
    }

    /// Samples the spline at global parameter `t` in `[0, 1]`.
    pub fn position(&self, t: f64) -> SplineResult<Point3d> {
        let (idx, local_t) = self.locate(t)?;
        Ok(self.curves[idx].position(&self.points, local_t))
    }

    /// Approximates the spline's direction of travel at global parameter `t` in `[0, 1]`.
    ///
    /// The result is not normalised.
    pub fn direction(&self, t: f64) -> SplineResult<Vector3d> {
        let (idx, local_t) = self.locate(t)?;
        let step = self.settings.direction_epsilon;
        Ok(self.curves[idx].direction_with_step(&self.points, local_t, step))
    }

    /// Gets the control points either side of `point` in traversal order.
    ///
    /// An anchor's neighbours are its handles, so moving them together with
    /// the anchor keeps the shape of the curve around it. Returns `None` if
    /// the point is not part of the spline.
    pub fn anchor_control_points(
        &self,
        point: ControlPointId,
    ) -> Option<SmallVec<[ControlPointId; 2]>> {
        let idx = self.flat_index(point)?;
        let mut neighbours = SmallVec::new();
        if idx > 0 {
            neighbours.push(self.control_points[idx - 1]);
        }
        if let Some(next) = self.control_points.get(idx + 1) {
            neighbours.push(*next);
        }
        Some(neighbours)
    }

    /// Samples the whole spline as a sequence of points.
    ///
    /// Every curve is sampled at `steps_per_curve` uniform steps of its local
    /// parameter; shared anchors appear once.
    pub fn polyline(&self) -> Vec<Point3d> {
        let steps = self.settings.steps_per_curve.clamp(1, MAX_STEPS_PER_CURVE);
        let mut polyline = Vec::with_capacity(self.curves.len() * steps + 1);
        polyline.push(self.points[self.curves[0].anchor0()].position);
        for curve in &self.curves {
            let segment = curve.resolve(&self.points);
            polyline.extend(uniform_points_along_curve(&segment, steps).into_iter().skip(1));
        }
        polyline
    }

    /// Approximates the length of the spline from its polyline.
    pub fn approximate_length(&self) -> f64 {
        polyline_length(&self.polyline())
    }

    fn flat_index(&self, id: ControlPointId) -> Option<usize> {
        self.control_points.iter().position(|p| *p == id)
    }

    /// The unit direction in which to extend the spline from a terminal curve.
    fn extension_direction(&self, curve: &CubicBezierCurve, t: f64) -> Vector3d {
        let tangent = curve.direction_with_step(&self.points, t, self.settings.direction_epsilon);
        try_normalize(tangent).unwrap_or_else(|| {
            warn!("Curve has no direction at t = {}, extending along its chord", t);
            let chord =
                self.points[curve.anchor1()].position - self.points[curve.anchor0()].position;
            try_normalize(chord).unwrap_or_else(Vector3d::unit_z)
        })
    }

    fn remove_points(&mut self, ids: &[ControlPointId]) {
        for id in ids {
            self.points.remove(*id);
        }
    }

    fn rebuild_control_points(&mut self) {
        debug_assert!(self
            .curves
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.anchor1() == b.anchor0()));

        self.control_points.clear();
        self.control_points.push(self.curves[0].anchor0());
        for curve in &self.curves {
            self.control_points
                .extend([curve.control0(), curve.control1(), curve.anchor1()]);
        }
    }
}
