use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Carries the service's own error message when one was sent.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("no refresh token available")]
    NoRefreshToken,
}
