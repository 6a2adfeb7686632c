//! UI layer for the desktop app: app shell, form state, and toasts.

pub mod app;
pub mod forms;
pub mod toasts;

pub use app::PdfToolsApp;
