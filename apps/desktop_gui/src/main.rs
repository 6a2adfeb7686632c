use std::time::Duration;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use backend_bridge::runtime::{self, WorkerConfig};
use controller::events::UiEvent;
use ui::PdfToolsApp;

/// Desktop client for the PDF tools processing service.
#[derive(Parser)]
#[command(name = "pdf-tools-desktop")]
struct Args {
    /// Base URL of the PDF processing service.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: String,
    /// Merge request deadline, in seconds.
    #[arg(long, default_value_t = 30)]
    merge_timeout_secs: u64,
    /// Split-pages request deadline, in seconds.
    #[arg(long, default_value_t = 30)]
    split_pages_timeout_secs: u64,
    /// Split-range request deadline, in seconds.
    #[arg(long, default_value_t = 30)]
    split_range_timeout_secs: u64,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    runtime::launch(
        WorkerConfig {
            server_url: args.server_url,
            merge_timeout: Duration::from_secs(args.merge_timeout_secs),
            split_pages_timeout: Duration::from_secs(args.split_pages_timeout_secs),
            split_range_timeout: Duration::from_secs(args.split_range_timeout_secs),
        },
        cmd_rx,
        ui_tx,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PDF Tools")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PDF Tools",
        options,
        Box::new(|_cc| Ok(Box::new(PdfToolsApp::new(cmd_tx, ui_rx)))),
    )
}
