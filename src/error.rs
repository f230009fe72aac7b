use thiserror::Error;

/// Top-level error type for the planecurve crate.
#[derive(Debug, Error)]
pub enum PlaneCurveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to curve construction.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("radius must be non-negative, got {radius}")]
    NegativeRadius { radius: f64 },

    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`PlaneCurveError`].
pub type Result<T> = std::result::Result<T, PlaneCurveError>;
