//! Error type for the normalisation pipeline.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Error, Debug)]
pub enum NormalizeError {
    /// A token shaped like `MM/DD/YY` that is not a real calendar date.
    #[error("invalid date {token:?}: not a valid month/day/year")]
    InvalidDate { token: String },

    /// A caller-supplied abbreviation failed to compile.
    #[error("abbreviation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl NormalizeError {
    /// The offending date token, if this is a date error.
    pub fn date_token(&self) -> Option<&str> {
        match self {
            NormalizeError::InvalidDate { token } => Some(token),
            NormalizeError::Pattern(_) => None,
        }
    }
}
