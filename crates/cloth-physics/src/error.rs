use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, ClothError>;

/// Configuration errors detected when cloth state or the containment box is built.
///
/// Nothing past construction can fail: containment, correction and the frame scan are total
/// over floating-point input.
#[derive(Debug, Error)]
pub enum ClothError {
    /// A box axis with `min > max` (or a NaN bound).
    #[error("invalid bounds on {axis} axis: min {min} > max {max}")]
    InvalidBounds { axis: char, min: f32, max: f32 },

    /// Grid dimensions that cannot produce evenly spaced vertices.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Any other rejected parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
