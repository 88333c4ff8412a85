use cgmath::prelude::*;
use itertools::Itertools;
use crate::util::Interval;
use super::Point3d;

/// A parametric curve in 3D space.
pub trait ParametricCurve3d {
    /// Samples the parametric curve.
    fn sample(&self, t: f64) -> Point3d;

    /// Returns the minimum and maximum t-values that define the bounds of the curve.
    fn bounds(&self) -> Interval<f64>;
}

/// Samples `steps + 1` points at uniform parameter steps across the curve's bounds.
pub fn uniform_points_along_curve(curve: &impl ParametricCurve3d, steps: usize) -> Vec<Point3d> {
    let steps = steps.max(1);
    let bounds = curve.bounds();
    let range = Interval::new(0.0, steps as f64);
    (0..=steps)
        .map(|i| bounds.lerp(range.inv_lerp(i as f64)))
        .map(|t| curve.sample(t))
        .collect()
}

/// The total length of the line segments joining consecutive points.
pub fn polyline_length(points: &[Point3d]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.distance(*b))
        .sum()
}
