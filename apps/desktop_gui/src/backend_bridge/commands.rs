//! Backend commands queued from UI to the backend worker.

use std::path::PathBuf;

use shared::domain::PageRange;

#[derive(Debug)]
pub enum BackendCommand {
    Merge {
        /// Selected files, in selection order.
        files: Vec<PathBuf>,
        password: Option<String>,
        output_filename: String,
    },
    SplitPages {
        file: PathBuf,
        password: Option<String>,
        /// `Some` asks the service to bundle the pages into a ZIP archive;
        /// `None` requests a manifest of the generated page files.
        archive_filename: Option<String>,
    },
    SplitRange {
        file: PathBuf,
        range: PageRange,
        password: Option<String>,
        output_filename: String,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Merge { .. } => "merge",
            BackendCommand::SplitPages { .. } => "split_pages",
            BackendCommand::SplitRange { .. } => "split_range",
        }
    }
}
