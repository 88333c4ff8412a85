//! Tests that apply sequences of edits to a spline.

use assert_approx_eq::assert_approx_eq;
use bezier_spline::{cgmath::prelude::*, math::Point3d, Spline};
use rand::{Rng, SeedableRng};

fn assert_points_eq(a: Point3d, b: Point3d) {
    assert_approx_eq!(a.distance(b), 0.0, 1e-6);
}

/// Checks the structural invariants that every edit must preserve.
fn check_spline(spline: &Spline) {
    let curves = spline.curves();
    assert!(!curves.is_empty());
    for pair in curves.windows(2) {
        assert_eq!(pair[0].anchor1(), pair[1].anchor0());
    }

    let flat = spline.control_points();
    assert_eq!(flat.len(), 3 * curves.len() + 1);
    assert_eq!(spline.points().len(), flat.len());
    assert_eq!(flat[0], curves[0].anchor0());
    for (i, curve) in curves.iter().enumerate() {
        assert_eq!(&flat[3 * i..3 * i + 4], &curve.point_ids()[..]);
    }

    let points = spline.points();
    assert_points_eq(spline.position(0.0).unwrap(), curves[0].position(points, 0.0));
    assert_points_eq(spline.position(1.0).unwrap(), curves[curves.len() - 1].position(points, 1.0));
}

/// Test that random edits keep the spline well formed.
#[test]
fn random_edits_preserve_structure() {
    let mut rng = rand::rngs::StdRng::from_seed(*b"Anchors away, handles at the rea");
    let mut spline = Spline::new();
    for _i in 0..500 {
        match rng.gen_range(0..3) {
            0 => spline.add_curve_front(),
            1 => spline.add_curve_back(),
            _ => {
                let anchors = spline.anchors().collect::<Vec<_>>();
                let anchor = anchors[rng.gen_range(0..anchors.len())];
                let count = spline.curve_count();
                let deleted = spline.delete_anchor(anchor);
                assert_eq!(deleted, count > 1);
                if deleted {
                    assert_eq!(spline.curve_count(), count - 1);
                }
            }
        }
        check_spline(&spline);
    }
}

/// Test that every global parameter maps onto an existing curve.
#[test]
fn global_parameter_covers_every_curve() {
    let mut rng = rand::rngs::StdRng::from_seed(*b"Anchors away, handles at the rea");
    let mut spline = Spline::new();
    for count in 1..=7 {
        for _ in 0..200 {
            let t = rng.gen_range(0.0..=1.0);
            let (idx, local_t) = spline.locate(t).unwrap();
            assert!(idx < count);
            assert!((0.0..=1.0).contains(&local_t));
        }
        let (idx, _) = spline.locate(1.0).unwrap();
        assert_eq!(idx, count - 1);
        spline.add_curve_front();
    }
}

/// Test that the spline is continuous across shared anchors.
#[test]
fn position_is_continuous_across_anchors() {
    let mut spline = Spline::at(Point3d::new(5.0, 0.0, 5.0));
    spline.add_curve_front();
    spline.add_curve_back();
    spline.add_curve_front();
    let count = spline.curve_count() as f64;
    for i in 1..spline.curve_count() {
        let t = i as f64 / count;
        let before = spline.position(t - 1e-9).unwrap();
        let after = spline.position(t).unwrap();
        assert_points_eq(before, after);
    }
}

/// Test that moving an anchor together with its handles keeps
/// the neighbouring curves attached.
#[test]
fn dragging_an_anchor_with_its_handles() {
    let mut spline = Spline::new();
    spline.add_curve_front();
    let anchor = spline.curves()[1].anchor0();
    let delta = bezier_spline::math::Vector3d::new(0.0, 3.0, 0.0);

    let neighbours = spline.anchor_control_points(anchor).unwrap();
    assert_eq!(neighbours.len(), 2);
    spline.control_point_mut(anchor).unwrap().translate(delta);
    for id in neighbours {
        spline.control_point_mut(id).unwrap().translate(delta);
    }

    let joint = spline.position(0.5).unwrap();
    assert_points_eq(joint, Point3d::new(0.0, 3.0, 5.0));
    check_spline(&spline);
}
