//! Worker thread owning the tokio runtime and the PDF service client.
//!
//! Commands arrive on a crossbeam channel and are handled one at a time;
//! each remote call is bounded by an operation-specific deadline and floored
//! by a minimum loading time so indicators do not flicker.

use std::{path::Path, thread, time::Duration};

use client_core::{
    with_min_loading_time, with_timeout, PdfToolsClient, SplitOutcome, TimeoutOptions,
};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::PdfUpload;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{
    OperationContext, OperationOutcome, UiError, UiErrorCategory, UiEvent,
};

/// Floor applied to every remote call so loading indicators do not flicker.
const MIN_LOADING_TIME: Duration = Duration::from_millis(400);

pub const MERGE_TIMEOUT_MESSAGE: &str = "Merging PDFs timed out. Please try again.";
pub const SPLIT_PAGES_TIMEOUT_MESSAGE: &str =
    "Splitting the PDF into pages timed out. Please try again.";
pub const SPLIT_RANGE_TIMEOUT_MESSAGE: &str =
    "Extracting the page range timed out. Please try again.";

#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub server_url: String,
    pub merge_timeout: Duration,
    pub split_pages_timeout: Duration,
    pub split_range_timeout: Duration,
}

pub fn launch(config: WorkerConfig, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Failed(UiError::new(
                    OperationContext::WorkerStartup,
                    UiErrorCategory::Unknown,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = PdfToolsClient::new(config.server_url.clone());
            tracing::info!(server_url = %config.server_url, "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend: handling command");
                let event = handle_command(&client, &config, cmd).await;
                let _ = ui_tx.try_send(event);
            }
            tracing::info!("command queue disconnected; backend worker shutting down");
        });
    });
}

async fn handle_command(
    client: &PdfToolsClient,
    config: &WorkerConfig,
    cmd: BackendCommand,
) -> UiEvent {
    match cmd {
        BackendCommand::Merge {
            files,
            password,
            output_filename,
        } => {
            let mut uploads = Vec::with_capacity(files.len());
            for path in &files {
                match load_pdf(path).await {
                    Ok(upload) => uploads.push(upload),
                    Err(event) => return fail_io(OperationContext::Merge, event),
                }
            }

            let options = TimeoutOptions::after(config.merge_timeout)
                .message(MERGE_TIMEOUT_MESSAGE)
                .on_timeout(|| tracing::warn!("merge request exceeded its deadline"));
            let operation =
                client.merge(uploads, password.as_deref(), Some(output_filename.as_str()));
            match with_min_loading_time(with_timeout(operation, options), MIN_LOADING_TIME).await {
                Ok(bytes) => UiEvent::Finished(OperationOutcome::Merged {
                    bytes,
                    filename: output_filename,
                }),
                Err(err) => {
                    tracing::error!("merge failed: {err}");
                    UiEvent::Failed(UiError::from_client_error(OperationContext::Merge, &err))
                }
            }
        }
        BackendCommand::SplitPages {
            file,
            password,
            archive_filename,
        } => {
            let upload = match load_pdf(&file).await {
                Ok(upload) => upload,
                Err(event) => return fail_io(OperationContext::SplitPages, event),
            };

            let options = TimeoutOptions::after(config.split_pages_timeout)
                .message(SPLIT_PAGES_TIMEOUT_MESSAGE)
                .on_timeout(|| tracing::warn!("split-pages request exceeded its deadline"));
            let operation =
                client.split_pages(upload, password.as_deref(), archive_filename.as_deref());
            match with_min_loading_time(with_timeout(operation, options), MIN_LOADING_TIME).await {
                Ok(SplitOutcome::Manifest(manifest)) => {
                    UiEvent::Finished(OperationOutcome::PageManifest {
                        files: manifest.files,
                    })
                }
                Ok(SplitOutcome::Archive(bytes)) => {
                    UiEvent::Finished(OperationOutcome::PageArchive {
                        bytes,
                        filename: archive_filename
                            .unwrap_or_else(|| "split_pages.zip".to_string()),
                    })
                }
                Err(err) => {
                    tracing::error!("split-pages failed: {err}");
                    UiEvent::Failed(UiError::from_client_error(
                        OperationContext::SplitPages,
                        &err,
                    ))
                }
            }
        }
        BackendCommand::SplitRange {
            file,
            range,
            password,
            output_filename,
        } => {
            let upload = match load_pdf(&file).await {
                Ok(upload) => upload,
                Err(event) => return fail_io(OperationContext::SplitRange, event),
            };

            let options = TimeoutOptions::after(config.split_range_timeout)
                .message(SPLIT_RANGE_TIMEOUT_MESSAGE)
                .on_timeout(|| tracing::warn!("split-range request exceeded its deadline"));
            let operation = client.split_range(
                upload,
                range,
                password.as_deref(),
                Some(output_filename.as_str()),
            );
            match with_min_loading_time(with_timeout(operation, options), MIN_LOADING_TIME).await {
                Ok(bytes) => UiEvent::Finished(OperationOutcome::RangeExtracted {
                    bytes,
                    filename: output_filename,
                }),
                Err(err) => {
                    tracing::error!("split-range failed: {err}");
                    UiEvent::Failed(UiError::from_client_error(
                        OperationContext::SplitRange,
                        &err,
                    ))
                }
            }
        }
    }
}

async fn load_pdf(path: &Path) -> Result<PdfUpload, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| format!("Could not read {}: {err}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file.pdf".to_string());
    Ok(PdfUpload::new(filename, bytes))
}

fn fail_io(context: OperationContext, message: String) -> UiEvent {
    tracing::error!("{message}");
    UiEvent::Failed(UiError::new(context, UiErrorCategory::Io, message))
}
