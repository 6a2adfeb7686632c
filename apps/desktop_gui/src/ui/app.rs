//! App shell: tool tabs, the three upload forms, save dialogs, and toasts.

use std::path::Path;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{OperationContext, OperationOutcome, UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::forms::{MergeForm, SplitPagesForm, SplitRangeForm};
use crate::ui::toasts::ToastCenter;

const ERROR_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(218, 54, 51);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolTab {
    Merge,
    SplitPages,
    SplitRange,
}

pub struct PdfToolsApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    active_tab: ToolTab,
    merge: MergeForm,
    split_pages: SplitPagesForm,
    split_range: SplitRangeForm,
    toasts: ToastCenter,
    status: String,
    worker_ready: bool,
}

impl PdfToolsApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            active_tab: ToolTab::Merge,
            merge: MergeForm::default(),
            split_pages: SplitPagesForm::default(),
            split_range: SplitRangeForm::default(),
            toasts: ToastCenter::new(),
            status: "Starting backend worker...".to_string(),
            worker_ready: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.worker_ready = true;
                    self.status = "Ready".to_string();
                }
                UiEvent::Finished(outcome) => self.handle_outcome(outcome),
                UiEvent::Failed(err) => self.handle_failure(err),
            }
        }
    }

    fn handle_outcome(&mut self, outcome: OperationOutcome) {
        match outcome {
            OperationOutcome::Merged { bytes, filename } => {
                self.merge.busy = false;
                if self.save_payload(&bytes, &filename) {
                    self.toasts.success(format!("Merged PDF saved as {filename}"));
                    self.merge.reset_after_success();
                    self.status = "Merge complete".to_string();
                }
            }
            OperationOutcome::PageManifest { files } => {
                self.split_pages.busy = false;
                self.toasts
                    .success(format!("Split into {} pages", files.len()));
                self.status = format!("Split produced {} files", files.len());
                // The manifest stays visible until the user navigates away;
                // the form is not reset in this mode.
                self.split_pages.result_files = Some(files);
            }
            OperationOutcome::PageArchive { bytes, filename } => {
                self.split_pages.busy = false;
                if self.save_payload(&bytes, &filename) {
                    self.toasts
                        .success(format!("Page archive saved as {filename}"));
                    self.split_pages.reset_after_success();
                    self.status = "Split complete".to_string();
                }
            }
            OperationOutcome::RangeExtracted { bytes, filename } => {
                self.split_range.busy = false;
                if self.save_payload(&bytes, &filename) {
                    self.toasts
                        .success(format!("Extracted pages saved as {filename}"));
                    self.split_range.reset_after_success();
                    self.status = "Extraction complete".to_string();
                }
            }
        }
    }

    /// Prompts for a destination and writes the payload. The byte buffer is
    /// dropped on every exit path; nothing is retained after the write.
    fn save_payload(&mut self, bytes: &[u8], suggested_name: &str) -> bool {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(suggested_name)
            .save_file()
        else {
            self.toasts.info("Save cancelled; the result was discarded");
            return false;
        };
        match std::fs::write(&path, bytes) {
            Ok(()) => true,
            Err(err) => {
                let message = format!("Could not write {}: {err}", path.display());
                tracing::error!("{message}");
                self.toasts.error(message);
                false
            }
        }
    }

    fn handle_failure(&mut self, err: UiError) {
        tracing::warn!(
            context = ?err.context(),
            category = ?err.category(),
            "operation failed: {}",
            err.message()
        );
        let message = err.message().to_string();
        match err.context() {
            OperationContext::Merge => {
                self.merge.busy = false;
                self.merge.error = Some(message.clone());
            }
            OperationContext::SplitPages => {
                self.split_pages.busy = false;
                self.split_pages.error = Some(message.clone());
            }
            OperationContext::SplitRange => {
                self.split_range.busy = false;
                self.split_range.error = Some(message.clone());
            }
            OperationContext::WorkerStartup => {
                self.worker_ready = false;
                self.status = message.clone();
            }
        }
        self.toasts.error(message);
    }

    fn submit(&mut self, tab: ToolTab) {
        let validated = match tab {
            ToolTab::Merge => self.merge.validate(),
            ToolTab::SplitPages => self.split_pages.validate(),
            ToolTab::SplitRange => self.split_range.validate(),
        };
        match validated {
            Ok(cmd) => {
                if dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
                    match tab {
                        ToolTab::Merge => {
                            self.merge.busy = true;
                            self.merge.error = None;
                        }
                        ToolTab::SplitPages => {
                            self.split_pages.busy = true;
                            self.split_pages.error = None;
                        }
                        ToolTab::SplitRange => {
                            self.split_range.busy = true;
                            self.split_range.error = None;
                        }
                    }
                }
            }
            Err(message) => {
                self.toasts.error(message.clone());
                match tab {
                    ToolTab::Merge => self.merge.error = Some(message),
                    ToolTab::SplitPages => self.split_pages.error = Some(message),
                    ToolTab::SplitRange => self.split_range.error = Some(message),
                }
            }
        }
    }

    fn select_tab(&mut self, tab: ToolTab) {
        if self.active_tab != tab {
            // Navigating away retires a displayed split-pages manifest.
            self.split_pages.result_files = None;
            self.active_tab = tab;
        }
    }

    fn show_merge_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Merge PDF files");
        ui.label("Combine multiple PDF files into a single document");
        ui.add_space(8.0);

        if ui
            .add_enabled(!self.merge.busy, egui::Button::new("Add PDF files..."))
            .clicked()
        {
            if let Some(picked) = rfd::FileDialog::new()
                .add_filter("PDF documents", &["pdf"])
                .pick_files()
            {
                let picked_count = picked.len();
                let before = self.merge.files.len();
                self.merge.add_files(picked);
                if self.merge.files.len() - before < picked_count {
                    self.toasts.warning("Skipped files that are not PDFs");
                }
            }
        }

        if !self.merge.files.is_empty() {
            ui.add_space(4.0);
            ui.label(format!("Selected files ({})", self.merge.files.len()));
            let mut removed = None;
            for (index, path) in self.merge.files.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(display_name(path));
                    if ui.small_button("✕").clicked() {
                        removed = Some(index);
                    }
                });
            }
            if let Some(index) = removed {
                self.merge.remove_file(index);
            }
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Password (optional)");
            ui.add(egui::TextEdit::singleline(&mut self.merge.password).password(true));
        });
        ui.horizontal(|ui| {
            ui.label("Output filename");
            ui.text_edit_singleline(&mut self.merge.filename);
        });

        if let Some(error) = &self.merge.error {
            ui.colored_label(ERROR_TEXT_COLOR, error);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let can_submit = self.worker_ready && !self.merge.busy;
            if ui
                .add_enabled(can_submit, egui::Button::new("Merge & save"))
                .clicked()
            {
                self.submit(ToolTab::Merge);
            }
            if self.merge.busy {
                ui.spinner();
                ui.label("Merging PDFs...");
            }
        });
    }

    fn show_split_pages_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Split PDF into pages");
        ui.label("Produce one PDF file per page of the document");
        ui.add_space(8.0);

        self.show_single_file_picker(ui, ToolTab::SplitPages);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Password (optional)");
            ui.add(egui::TextEdit::singleline(&mut self.split_pages.password).password(true));
        });
        ui.checkbox(
            &mut self.split_pages.bundle_archive,
            "Bundle pages into a ZIP archive",
        );
        ui.add_enabled_ui(self.split_pages.bundle_archive, |ui| {
            ui.horizontal(|ui| {
                ui.label("Archive filename");
                ui.text_edit_singleline(&mut self.split_pages.archive_filename);
            });
        });

        if let Some(error) = &self.split_pages.error {
            ui.colored_label(ERROR_TEXT_COLOR, error);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let can_submit = self.worker_ready && !self.split_pages.busy;
            if ui
                .add_enabled(can_submit, egui::Button::new("Split PDF"))
                .clicked()
            {
                self.submit(ToolTab::SplitPages);
            }
            if self.split_pages.busy {
                ui.spinner();
                ui.label("Splitting PDF...");
            }
        });

        if let Some(files) = &self.split_pages.result_files {
            ui.separator();
            ui.label(format!("Produced {} files:", files.len()));
            for name in files {
                ui.monospace(name);
            }
        }
    }

    fn show_split_range_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Split PDF by range");
        ui.label("Extract specific pages from a PDF document");
        ui.add_space(8.0);

        self.show_single_file_picker(ui, ToolTab::SplitRange);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Start page");
            ui.add(egui::TextEdit::singleline(&mut self.split_range.start_page).desired_width(60.0));
            ui.label("End page");
            ui.add(egui::TextEdit::singleline(&mut self.split_range.end_page).desired_width(60.0));
        });
        ui.horizontal(|ui| {
            ui.label("Password (optional)");
            ui.add(egui::TextEdit::singleline(&mut self.split_range.password).password(true));
        });
        ui.horizontal(|ui| {
            ui.label("Output filename");
            ui.text_edit_singleline(&mut self.split_range.filename);
        });

        if let Some(error) = &self.split_range.error {
            ui.colored_label(ERROR_TEXT_COLOR, error);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let can_submit = self.worker_ready && !self.split_range.busy;
            if ui
                .add_enabled(can_submit, egui::Button::new("Split & save"))
                .clicked()
            {
                self.submit(ToolTab::SplitRange);
            }
            if self.split_range.busy {
                ui.spinner();
                ui.label("Splitting PDF...");
            }
        });
    }

    fn show_single_file_picker(&mut self, ui: &mut egui::Ui, tab: ToolTab) {
        let (file, busy) = match tab {
            ToolTab::SplitPages => (self.split_pages.file.clone(), self.split_pages.busy),
            ToolTab::SplitRange => (self.split_range.file.clone(), self.split_range.busy),
            ToolTab::Merge => return,
        };

        match file {
            None => {
                if ui
                    .add_enabled(!busy, egui::Button::new("Choose a PDF file..."))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("PDF documents", &["pdf"])
                        .pick_file()
                    {
                        match tab {
                            ToolTab::SplitPages => self.split_pages.set_file(path),
                            ToolTab::SplitRange => self.split_range.set_file(path),
                            ToolTab::Merge => {}
                        }
                    }
                }
            }
            Some(path) => {
                ui.horizontal(|ui| {
                    ui.label(display_name(&path));
                    if ui.small_button("✕").clicked() {
                        match tab {
                            ToolTab::SplitPages => self.split_pages.remove_file(),
                            ToolTab::SplitRange => self.split_range.remove_file(),
                            ToolTab::Merge => {}
                        }
                    }
                });
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for PdfToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("tool_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut clicked = None;
                for (tab, label) in [
                    (ToolTab::Merge, "Merge"),
                    (ToolTab::SplitPages, "Split pages"),
                    (ToolTab::SplitRange, "Split range"),
                ] {
                    if ui.selectable_label(self.active_tab == tab, label).clicked() {
                        clicked = Some(tab);
                    }
                }
                if let Some(tab) = clicked {
                    self.select_tab(tab);
                }
            });
        });

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            ToolTab::Merge => self.show_merge_form(ui),
            ToolTab::SplitPages => self.show_split_pages_form(ui),
            ToolTab::SplitRange => self.show_split_range_form(ui),
        });

        self.toasts.show(ctx);

        // Keep polling the event channel even while the user is idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
