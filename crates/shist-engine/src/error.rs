use thiserror::Error;

/// Result type for shist-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid user input for selection or rendering, detected before any history is read
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid date: {0} (expected YYYY-MM-DD, YYYY-MM-DD HH:MM, or UNIX seconds)")]
    InvalidDate(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid date format: {0}")]
    InvalidDateLayout(String),
}
