//! Typed client for the remote PDF processing service.
//!
//! Three operations, each a multipart POST: merge several PDFs into one,
//! split a PDF into one file per page, and extract an inclusive page range.
//! The client performs no retries and no response validation beyond status
//! and content type; callers bound waiting time with [`with_timeout`].

use reqwest::{
    header,
    multipart::{Form, Part},
    Client, Response,
};
use shared::{
    domain::{PageRange, PdfUpload},
    protocol::{ApiErrorBody, SplitPagesResponse},
};
use tracing::debug;

pub mod error;
pub mod timeout;

pub use error::ClientError;
pub use timeout::{
    with_min_loading_time, with_timeout, TimeoutError, TimeoutOptions, DEFAULT_TIMEOUT,
};

/// Result of a split-pages request. The service bundles the pages into an
/// archive exactly when an archive filename was supplied; otherwise it
/// answers with a manifest naming the generated page files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    Manifest(SplitPagesResponse),
    Archive(Vec<u8>),
}

pub struct PdfToolsClient {
    http: Client,
    base_url: String,
}

impl PdfToolsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Merges `files` (in the given order) into a single PDF and returns its
    /// bytes.
    pub async fn merge(
        &self,
        files: Vec<PdfUpload>,
        password: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Vec<u8>, ClientError> {
        debug!(files = files.len(), "merge: submitting request");
        let mut form = Form::new();
        for file in files {
            form = form.part("files", pdf_part(file)?);
        }
        form = attach_text(form, "password", password);
        form = attach_text(form, "filename", filename);

        let response = self
            .http
            .post(format!("{}/merge", self.base_url))
            .multipart(form)
            .send()
            .await?;
        let response = read_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Splits `file` into one PDF per page. Supplying `archive_filename`
    /// asks the service to bundle the pages into a ZIP archive instead of
    /// answering with a manifest.
    pub async fn split_pages(
        &self,
        file: PdfUpload,
        password: Option<&str>,
        archive_filename: Option<&str>,
    ) -> Result<SplitOutcome, ClientError> {
        debug!(
            archive = archive_filename.is_some(),
            "split-pages: submitting request"
        );
        let mut form = Form::new().part("file", pdf_part(file)?);
        form = attach_text(form, "password", password);
        form = attach_text(form, "filename", archive_filename);

        let response = self
            .http
            .post(format!("{}/split-pages", self.base_url))
            .multipart(form)
            .send()
            .await?;
        let response = read_success(response).await?;

        if is_json(&response) {
            Ok(SplitOutcome::Manifest(response.json().await?))
        } else {
            Ok(SplitOutcome::Archive(response.bytes().await?.to_vec()))
        }
    }

    /// Extracts the inclusive, 1-based page `range` from `file` and returns
    /// the resulting PDF bytes.
    pub async fn split_range(
        &self,
        file: PdfUpload,
        range: PageRange,
        password: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Vec<u8>, ClientError> {
        debug!(
            start_page = range.start(),
            end_page = range.end(),
            "split-range: submitting request"
        );
        let mut form = Form::new()
            .part("file", pdf_part(file)?)
            .text("start_page", range.start().to_string())
            .text("end_page", range.end().to_string());
        form = attach_text(form, "password", password);
        form = attach_text(form, "filename", filename);

        let response = self
            .http
            .post(format!("{}/split-range", self.base_url))
            .multipart(form)
            .send()
            .await?;
        let response = read_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

fn pdf_part(file: PdfUpload) -> Result<Part, ClientError> {
    Ok(Part::bytes(file.bytes)
        .file_name(file.filename)
        .mime_str("application/pdf")?)
}

fn attach_text(form: Form, name: &'static str, value: Option<&str>) -> Form {
    match value {
        Some(value) => form.text(name, value.to_string()),
        None => form,
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

/// Passes successful responses through; on any other status reads the body
/// and surfaces the service's `detail` message when one is present.
async fn read_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|body| body.detail)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                status.to_string()
            } else {
                body
            }
        });
    Err(ClientError::Api { status, detail })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
