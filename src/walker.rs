use crate::math::{rotation_facing, Point3d, Rotation3d};
use crate::{Spline, SplineResult};

/// The position and optional facing of something following a spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// The position on the spline.
    pub position: Point3d,
    /// The rotation that turns the positive z-axis to face along the spline.
    pub rotation: Option<Rotation3d>,
}

/// Follows a spline by a progress value in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplineWalker {
    /// How far along the spline the walker is, from 0 to 1.
    pub progress: f64,
    /// Whether [SplineWalker::pose] also computes a facing rotation.
    pub include_rotation: bool,
}

impl SplineWalker {
    /// Creates a walker at the start of a spline.
    pub fn new(include_rotation: bool) -> Self {
        Self {
            progress: 0.0,
            include_rotation,
        }
    }

    /// Moves the walker by `amount`, which may be negative.
    ///
    /// Passing the end of the spline wraps back to the start, and passing
    /// the start wraps to the end, so the progress always stays in `[0, 1]`.
    pub fn advance(&mut self, amount: f64) {
        self.progress += amount;
        if self.progress > 1.0 {
            self.progress = 0.0;
        } else if self.progress < 0.0 {
            self.progress = 1.0;
        }
    }

    /// Samples the spline at the walker's progress.
    pub fn pose(&self, spline: &Spline) -> SplineResult<Pose> {
        let position = spline.position(self.progress)?;
        let rotation = if self.include_rotation {
            Some(rotation_facing(spline.direction(self.progress)?))
        } else {
            None
        };
        Ok(Pose { position, rotation })
    }
}
