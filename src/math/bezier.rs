use cgmath::prelude::*;
use crate::util::Interval;
use super::Point3d;
use super::curve::ParametricCurve3d;

/// Evaluates the cubic bezier basis over four points.
///
/// `t` is not checked against `[0, 1]`; values outside that range
/// extrapolate along the same polynomial.
pub fn cubic_bezier_point(a: Point3d, b: Point3d, c: Point3d, d: Point3d, t: f64) -> Point3d {
    let t1 = 1.0 - t;
    Point3d::from_vec(t1 * t1 * t1 * a.to_vec()
        + 3.0 * t * t1 * t1 * b.to_vec()
        + 3.0 * t * t * t1 * c.to_vec()
        + t * t * t * d.to_vec())
}

/// A cubic bezier curve with its control points resolved to positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier3d {
    points: [Point3d; 4]
}

impl CubicBezier3d {
    pub const fn new(points: &[Point3d; 4]) -> Self {
        Self { points: *points }
    }

    /// The four control points, anchors first and last.
    pub fn points(&self) -> &[Point3d; 4] {
        &self.points
    }
}

impl ParametricCurve3d for CubicBezier3d {
    fn sample(&self, t: f64) -> Point3d {
        let [a, b, c, d] = self.points;
        cubic_bezier_point(a, b, c, d, t)
    }

    fn bounds(&self) -> Interval<f64> {
        Interval { min: 0.0, max: 1.0 }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn random_point(rng: &mut impl Rng) -> Point3d {
        Point3d::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
        )
    }

    #[test]
    fn basis_coefficients() {
        let o = Point3d::new(0.0, 0.0, 0.0);
        let p = cubic_bezier_point(o, o, o, Point3d::new(8.0, 0.0, 0.0), 0.5);
        assert_approx_eq!(p.x, 1.0);
        assert_approx_eq!(p.y, 0.0);
        assert_approx_eq!(p.z, 0.0);

        let p = cubic_bezier_point(o, Point3d::new(0.0, 8.0, 0.0), o, o, 0.5);
        assert_approx_eq!(p.y, 3.0);
        let p = cubic_bezier_point(o, o, Point3d::new(0.0, 0.0, 8.0), o, 0.5);
        assert_approx_eq!(p.z, 3.0);
    }

    #[test]
    fn endpoints_are_anchors() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Four points walk into a curve...");
        for _i in 0..100 {
            let [a, b, c, d] = [(); 4].map(|_| random_point(&mut rng));
            assert_eq!(cubic_bezier_point(a, b, c, d, 0.0), a);
            assert_eq!(cubic_bezier_point(a, b, c, d, 1.0), d);
        }
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let curve = CubicBezier3d::new(&[
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
            Point3d::new(3.0, 0.0, 0.0),
        ]);
        let p = curve.sample(-0.5);
        assert_approx_eq!(p.x, -1.5);
        let p = curve.sample(2.0);
        assert_approx_eq!(p.x, 6.0);
    }

    #[test]
    fn sample_matches_basis() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Four points walk into a curve...");
        let points = [(); 4].map(|_| random_point(&mut rng));
        let curve = CubicBezier3d::new(&points);
        let [a, b, c, d] = points;
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_eq!(curve.sample(t), cubic_bezier_point(a, b, c, d, t));
        }
        assert_eq!(curve.bounds(), Interval::new(0.0, 1.0));
    }
}
