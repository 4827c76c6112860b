use snaplink_core::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("no free short code found after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },
    #[error("allocation deadline exceeded after {attempts} attempts")]
    DeadlineExceeded { attempts: u32 },
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ShortenerError {
    /// Returns `true` if the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ShortenerError::InvalidUrl(_))
    }
}
