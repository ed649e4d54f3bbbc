use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum InterpolationError {
    #[error("input has {input} breakpoints but output has {output} values")]
    LengthMismatch { input: usize, output: usize },
    #[error("at least two breakpoints are required, got {0}")]
    TooFewPoints(usize),
    #[error("breakpoint {0} is not finite")]
    NonFinite(usize),
    #[error("breakpoint {0} is smaller than the one before it")]
    NotAscending(usize),
}

/// Reasons [`crate::CarouselOptions::validate`] rejects a configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("carousel has no items")]
    Empty,
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidSize { field: &'static str, value: f32 },
    #[error("{field} must lie within 0..=1 (got {value})")]
    InvalidFactor { field: &'static str, value: f32 },
    #[error("initial index {index} is out of range for {len} items")]
    InitialIndexOutOfRange { index: usize, len: usize },
}
