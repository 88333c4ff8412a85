use thiserror::Error;

/// Errors reported by spline queries.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SplineError {
    /// A global curve parameter fell outside `[0, 1]`.
    #[error("curve parameter {t} is outside the range [0, 1]")]
    ParameterOutOfRange { t: f64 },
}

pub type SplineResult<T> = std::result::Result<T, SplineError>;
