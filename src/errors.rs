use thiserror::Error;

/// Errors that can occur while extracting transactions from statement text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read page text from disk
    #[error("Failed to read page text: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was called without page text, content or a file path
    #[error("Pages, content or filepath is required")]
    MissingContentAndFilepath,

    // ── Typed-conversion errors ─────────────────────────────────────────────

    /// A date token matched the grammar shape but is not a real calendar date
    #[error("Invalid transaction date: {0}")]
    DateInvalidFormat(String),

    /// An amount token could not be converted to a decimal value
    #[error("Invalid transaction amount: {0}")]
    AmountInvalidFormat(String),
}

/// Convenient alias for Result with our main error type
pub type ExtractResult<T> = Result<T, ExtractError>;
