//! UI/backend events and error modeling for the desktop controller.

use client_core::ClientError;

pub enum UiEvent {
    WorkerReady,
    Finished(OperationOutcome),
    Failed(UiError),
}

pub enum OperationOutcome {
    Merged {
        bytes: Vec<u8>,
        filename: String,
    },
    /// Split-pages answered with a manifest: identifiers of the generated
    /// page files, rendered in the form instead of triggering a save.
    PageManifest {
        files: Vec<String>,
    },
    PageArchive {
        bytes: Vec<u8>,
        filename: String,
    },
    RangeExtracted {
        bytes: Vec<u8>,
        filename: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Timeout,
    Transport,
    Api,
    Io,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationContext {
    WorkerStartup,
    Merge,
    SplitPages,
    SplitRange,
}

/// User-facing failure text for an operation that reached the service and
/// came back with a transport or API error. Timeouts carry their own
/// operation-specific message instead.
pub(crate) fn failure_text(context: OperationContext) -> &'static str {
    match context {
        OperationContext::Merge => "Failed to merge PDFs. Please try again.",
        OperationContext::SplitPages => "Failed to split the PDF into pages. Please try again.",
        OperationContext::SplitRange => {
            "Failed to split PDF. Please check your page range and try again."
        }
        OperationContext::WorkerStartup => "Backend worker failure. Restart the application.",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: OperationContext,
    message: String,
}

impl UiError {
    pub fn new(
        context: OperationContext,
        category: UiErrorCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_client_error(context: OperationContext, err: &ClientError) -> Self {
        match err {
            ClientError::Timeout(timeout) => {
                Self::new(context, UiErrorCategory::Timeout, timeout.message.clone())
            }
            ClientError::Transport(_) => {
                Self::new(context, UiErrorCategory::Transport, failure_text(context))
            }
            ClientError::Api { .. } => Self::new(context, UiErrorCategory::Api, failure_text(context)),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> OperationContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::TimeoutError;

    #[test]
    fn timeout_errors_keep_their_operation_specific_message() {
        let err = ClientError::from(TimeoutError {
            message: "Merging PDFs timed out. Please try again.".to_string(),
        });
        let ui_err = UiError::from_client_error(OperationContext::Merge, &err);

        assert_eq!(ui_err.category(), UiErrorCategory::Timeout);
        assert_eq!(ui_err.context(), OperationContext::Merge);
        assert_eq!(ui_err.message(), "Merging PDFs timed out. Please try again.");
    }

    #[test]
    fn failure_text_is_distinct_per_operation() {
        let texts = [
            failure_text(OperationContext::Merge),
            failure_text(OperationContext::SplitPages),
            failure_text(OperationContext::SplitRange),
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }
}
