use reqwest::StatusCode;
use thiserror::Error;

/// Client-side failure taxonomy. Every command catches these at the top
/// level, prints them, and exits non-zero; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Server replied with status {0}")]
    Remote(StatusCode),

    #[error("SHA1 mismatch\n  Expected: {expected}\n  Got:      {actual}")]
    IntegrityMismatch { expected: String, actual: String },

    #[error("Refusing unsafe filename from server: {0:?}")]
    UnsafeFilename(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("File I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to hash downloaded file: {0}")]
    Hash(anyhow::Error),
}
