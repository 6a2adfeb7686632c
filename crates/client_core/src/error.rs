use reqwest::StatusCode;
use thiserror::Error;

use crate::timeout::TimeoutError;

/// Failures surfaced by [`crate::PdfToolsClient`] operations and the timeout
/// guard wrapping them.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service rejected the request ({status}): {detail}")]
    Api { status: StatusCode, detail: String },
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
