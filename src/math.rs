//! Mathematical structs and functions.

use cgmath::{Point3, Quaternion, Vector3};
pub use bezier::{cubic_bezier_point, CubicBezier3d};
pub use curve::{polyline_length, uniform_points_along_curve, ParametricCurve3d};
pub use util::*;

mod bezier;
mod curve;
mod util;

/// A 3D point
pub type Point3d = Point3<f64>;

/// A 3D vector
pub type Vector3d = Vector3<f64>;

/// A 3D rotation, stored as a unit quaternion
pub type Rotation3d = Quaternion<f64>;
