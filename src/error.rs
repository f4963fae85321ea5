use thiserror::Error;

/// Error types that can occur when talking to the budget backend.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Transport-level failures (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Backend answered with a non-success status
    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
    /// Invalid request parameters or client configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Retry policy that can never make an attempt
    #[error("Invalid retry policy: {0}")]
    InvalidPolicy(String),
    /// History lookups are keyed by email
    #[error("Please enter your email to view history.")]
    MissingEmail,
}

/// Converts reqwest HTTP errors into BudgetErrors
impl From<reqwest::Error> for BudgetError {
    fn from(err: reqwest::Error) -> Self {
        BudgetError::HttpError(err.to_string())
    }
}
