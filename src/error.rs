use thiserror::Error;

/// Top-level error type for curve reconstruction.
#[derive(Debug, Error)]
pub enum CurveStitchError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

impl CurveStitchError {
    /// Returns the coordinates of the offending location for topology errors.
    #[must_use]
    pub fn offending_point(&self) -> Option<&[f64]> {
        match self {
            Self::Topology(err) => Some(err.point()),
            Self::Input(_) => None,
        }
    }
}

/// Errors raised while validating the segment input, before any traversal.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("points must have at least one dimension")]
    ZeroDimension,

    #[error("segment {segment} has a {found}-dimensional point, expected {expected}")]
    DimensionMismatch {
        segment: usize,
        expected: usize,
        found: usize,
    },

    #[error("{len} values cannot be shaped into segments of two {dims}-dimensional points")]
    RaggedShape { len: usize, dims: usize },

    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// Errors caused by a location shared by more than two segment endpoints.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("{point:?} is found in two distinct curves")]
    ConsumedTwice { point: Vec<f64> },

    #[error("{point:?} is shared by {count} segment endpoints")]
    SharedLocation { point: Vec<f64>, count: usize },
}

impl TopologyError {
    /// Coordinates of the location that violated the two-endpoint limit.
    #[must_use]
    pub fn point(&self) -> &[f64] {
        match self {
            Self::ConsumedTwice { point } | Self::SharedLocation { point, .. } => point,
        }
    }
}

/// Convenience type alias for results using [`CurveStitchError`].
pub type Result<T> = std::result::Result<T, CurveStitchError>;
