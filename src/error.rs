use std::error::Error as StdError;
use thiserror::Error;

/// Errors returned by the filter and its building blocks.
#[derive(Debug, Error)]
pub enum BloomError {
    #[error("invalid false positive probability: {p} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveProbability { p: f64 },

    #[error("expected number of inserted elements must be greater than 0")]
    InvalidExpectedElements,

    #[error("bit array of {bits} bits is too large for this platform")]
    BitArrayTooLarge { bits: f64 },

    #[error("input word cannot be absent")]
    InvalidInput,

    #[error("bit index {index} is out of range for a bit array of {len} bits")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Hash(#[from] HashError),
}

impl BloomError {
    /// True for the errors that reject a filter configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BloomError::InvalidFalsePositiveProbability { .. }
                | BloomError::InvalidExpectedElements
                | BloomError::BitArrayTooLarge { .. }
        )
    }
}

/// Failure of the underlying 128-bit hash primitive.
#[derive(Debug, Error)]
#[error("an error occurred while calculating the {algorithm} hash")]
pub struct HashError {
    algorithm: &'static str,
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl HashError {
    pub fn new<E>(algorithm: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self {
            algorithm,
            source: source.into(),
        }
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }
}
