//! Per-operation form state and local validation.
//!
//! Validation runs entirely client-side; a `BackendCommand` is only built
//! when it passes, so invalid input never reaches the network path. Inputs
//! are left intact on failure so the user can correct and resubmit.

use std::path::{Path, PathBuf};

use shared::domain::PageRange;

use crate::backend_bridge::commands::BackendCommand;

pub const MERGE_DEFAULT_FILENAME: &str = "merged.pdf";
pub const SPLIT_RANGE_DEFAULT_FILENAME: &str = "split.pdf";
pub const SPLIT_PAGES_DEFAULT_ARCHIVE: &str = "split_pages.zip";

/// Advisory client-side filter; the service still decides what it accepts.
pub fn looks_like_pdf(path: &Path) -> bool {
    mime_guess::from_path(path)
        .iter()
        .any(|mime| mime == mime_guess::mime::APPLICATION_PDF)
}

/// Trims the name, falls back to `default_name` when empty, and appends
/// `extension` (dot-less, case-insensitive check) when it is missing.
pub fn resolve_output_filename(input: &str, extension: &str, default_name: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default_name.to_string();
    }
    let suffix = format!(".{extension}");
    if trimmed.to_ascii_lowercase().ends_with(&suffix) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{suffix}")
    }
}

fn optional(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

pub struct MergeForm {
    pub files: Vec<PathBuf>,
    pub password: String,
    pub filename: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl Default for MergeForm {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            password: String::new(),
            filename: MERGE_DEFAULT_FILENAME.to_string(),
            busy: false,
            error: None,
        }
    }
}

impl MergeForm {
    /// Appends picked files, keeping only those that look like PDFs.
    pub fn add_files(&mut self, picked: impl IntoIterator<Item = PathBuf>) {
        for path in picked {
            if looks_like_pdf(&path) {
                self.files.push(path);
            }
        }
        self.error = None;
    }

    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn validate(&self) -> Result<BackendCommand, String> {
        if self.files.len() < 2 {
            return Err("Please select at least 2 PDF files to merge".to_string());
        }
        Ok(BackendCommand::Merge {
            files: self.files.clone(),
            password: optional(&self.password),
            output_filename: resolve_output_filename(&self.filename, "pdf", MERGE_DEFAULT_FILENAME),
        })
    }

    pub fn reset_after_success(&mut self) {
        *self = Self::default();
    }
}

pub struct SplitPagesForm {
    pub file: Option<PathBuf>,
    pub password: String,
    /// When set, the service bundles the page files into a ZIP archive and
    /// the response is a download instead of a manifest.
    pub bundle_archive: bool,
    pub archive_filename: String,
    pub busy: bool,
    pub error: Option<String>,
    /// Manifest from the last successful split; shown until the user
    /// navigates to another tool.
    pub result_files: Option<Vec<String>>,
}

impl Default for SplitPagesForm {
    fn default() -> Self {
        Self {
            file: None,
            password: String::new(),
            bundle_archive: false,
            archive_filename: SPLIT_PAGES_DEFAULT_ARCHIVE.to_string(),
            busy: false,
            error: None,
            result_files: None,
        }
    }
}

impl SplitPagesForm {
    pub fn set_file(&mut self, path: PathBuf) {
        if looks_like_pdf(&path) {
            self.file = Some(path);
            self.error = None;
            self.result_files = None;
        } else {
            self.error = Some("Please select a valid PDF file".to_string());
        }
    }

    pub fn remove_file(&mut self) {
        self.file = None;
        self.result_files = None;
    }

    pub fn validate(&self) -> Result<BackendCommand, String> {
        let file = self
            .file
            .clone()
            .ok_or_else(|| "Please select a PDF file".to_string())?;
        let archive_filename = self.bundle_archive.then(|| {
            resolve_output_filename(&self.archive_filename, "zip", SPLIT_PAGES_DEFAULT_ARCHIVE)
        });
        Ok(BackendCommand::SplitPages {
            file,
            password: optional(&self.password),
            archive_filename,
        })
    }

    pub fn reset_after_success(&mut self) {
        *self = Self::default();
    }
}

pub struct SplitRangeForm {
    pub file: Option<PathBuf>,
    pub start_page: String,
    pub end_page: String,
    pub password: String,
    pub filename: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl Default for SplitRangeForm {
    fn default() -> Self {
        Self {
            file: None,
            start_page: String::new(),
            end_page: String::new(),
            password: String::new(),
            filename: SPLIT_RANGE_DEFAULT_FILENAME.to_string(),
            busy: false,
            error: None,
        }
    }
}

impl SplitRangeForm {
    pub fn set_file(&mut self, path: PathBuf) {
        if looks_like_pdf(&path) {
            self.file = Some(path);
            self.error = None;
        } else {
            self.error = Some("Please select a valid PDF file".to_string());
        }
    }

    pub fn remove_file(&mut self) {
        self.file = None;
    }

    pub fn validate(&self) -> Result<BackendCommand, String> {
        let file = self
            .file
            .clone()
            .ok_or_else(|| "Please select a PDF file".to_string())?;

        let start: i64 = self
            .start_page
            .trim()
            .parse()
            .map_err(|_| "Please enter valid page numbers".to_string())?;
        let end: i64 = self
            .end_page
            .trim()
            .parse()
            .map_err(|_| "Please enter valid page numbers".to_string())?;
        if start < 1 {
            return Err("Start page must be at least 1".to_string());
        }
        if end < start {
            return Err("End page must be greater than or equal to start page".to_string());
        }
        let start = u32::try_from(start).map_err(|_| "Please enter valid page numbers".to_string())?;
        let end = u32::try_from(end).map_err(|_| "Please enter valid page numbers".to_string())?;
        let range = PageRange::new(start, end).map_err(|err| err.to_string())?;

        Ok(BackendCommand::SplitRange {
            file,
            range,
            password: optional(&self.password),
            output_filename: resolve_output_filename(
                &self.filename,
                "pdf",
                SPLIT_RANGE_DEFAULT_FILENAME,
            ),
        })
    }

    pub fn reset_after_success(&mut self) {
        *self = Self::default();
    }
}
