use super::{Rotation3d, Vector3d};
use cgmath::prelude::*;

/// Vectors shorter than this are treated as having no direction.
const MIN_DIRECTION_MAGNITUDE: f64 = 1e-12;

/// Normalises a vector, or returns `None` if it is too short to have a direction.
pub fn try_normalize(vec: Vector3d) -> Option<Vector3d> {
    let mag = vec.magnitude();
    if mag.is_finite() && mag > MIN_DIRECTION_MAGNITUDE {
        Some(vec / mag)
    } else {
        None
    }
}

/// The rotation that turns the positive z-axis to face along `dir`.
///
/// Returns the identity rotation if `dir` has no direction.
pub fn rotation_facing(dir: Vector3d) -> Rotation3d {
    match try_normalize(dir) {
        Some(dir) => Rotation3d::from_arc(Vector3d::unit_z(), dir, None),
        None => Rotation3d::new(1.0, 0.0, 0.0, 0.0),
    }
}
