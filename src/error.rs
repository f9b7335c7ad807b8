//! Error types for bindu.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Bindu error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error (open for read/write failed, short write, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parameter passed to an operation
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed coordinate field while loading a CSV file
    #[error("Line {line}: invalid coordinate '{value}'")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// The coordinate field that failed to parse
        value: String,
    },
}
