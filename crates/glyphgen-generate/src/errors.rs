use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The requested length was not an integer-valued number.
    #[error("length must be an integer, got {0}")]
    LengthType(String),
    /// The requested length was a negative integer.
    #[error("length must be non-negative, got {0}")]
    LengthRange(i64),
    /// An include group demands characters but exclusions emptied its pool.
    #[error("include group {index} requires {min} characters but none remain after exclusions")]
    EmptyGroup { index: usize, min: usize },
    /// Positions remain to fill but every candidate character is excluded.
    #[error("no characters available to fill {remaining} remaining positions")]
    EmptyPool { remaining: usize },
}
