pub use cgmath;
pub use control_point::{ControlPoint, ControlPointId, ControlPointSet};
pub use curve::CubicBezierCurve;
pub use error::{SplineError, SplineResult};
pub use spline::{Spline, SplineSettings};
pub use util::Interval;
pub use walker::{Pose, SplineWalker};

mod control_point;
mod curve;
mod error;
pub mod math;
mod spline;
mod util;
mod walker;
