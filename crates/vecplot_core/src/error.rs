use thiserror::Error;

/// Failure modes shared by every renderer and by arrow autoscaling.
///
/// Renderers validate their inputs before touching the canvas, so an `Err`
/// always means nothing was drawn and no palette entry was consumed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("only 2D and 3D vectors are supported (got {len} components)")]
    UnsupportedDimension { len: usize },

    #[error("component {index} cannot be converted to a floating-point value")]
    NonNumericComponent { index: usize },

    #[error("component {index} is not finite")]
    NonFiniteComponent { index: usize },

    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("degenerate input: {what} must be nonzero")]
    DegenerateInput { what: &'static str },

    #[error("mixing 2D and 3D arrows on the same axes is not supported")]
    MixedArrowDimensions,

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type PlotResult<T> = Result<T, PlotError>;
