use serde::{Deserialize, Serialize};

/// Manifest returned by `/split-pages` when no archive filename was supplied:
/// one identifier per generated page file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitPagesResponse {
    pub message: String,
    pub files: Vec<String>,
}

/// Error payload shape the processing service uses for non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
