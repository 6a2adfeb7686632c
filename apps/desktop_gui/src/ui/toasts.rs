//! Transient, auto-expiring notifications rendered as a stack above the app.
//!
//! Insertion order is display order, each toast owns its own expiry
//! deadline, and ids are never reused within a session. The collection is
//! unbounded; every toast leaves on its own, either by deadline or by the
//! dismiss button.

use std::time::{Duration, Instant};

use eframe::egui;

// Per-kind time-to-live. Errors linger longest so users can read them.
const SUCCESS_TTL: Duration = Duration::from_secs(3);
const INFO_TTL: Duration = Duration::from_secs(3);
const WARNING_TTL: Duration = Duration::from_secs(4);
const ERROR_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    fn ttl(self) -> Duration {
        match self {
            ToastKind::Success => SUCCESS_TTL,
            ToastKind::Error => ERROR_TTL,
            ToastKind::Info => INFO_TTL,
            ToastKind::Warning => WARNING_TTL,
        }
    }

    fn accent(self) -> egui::Color32 {
        match self {
            ToastKind::Success => egui::Color32::from_rgb(46, 160, 67),
            ToastKind::Error => egui::Color32::from_rgb(218, 54, 51),
            ToastKind::Info => egui::Color32::from_rgb(47, 129, 247),
            ToastKind::Warning => egui::Color32::from_rgb(210, 153, 34),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
    expires_at: Instant,
}

#[derive(Default)]
pub struct ToastCenter {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push_at(ToastKind::Success, text.into(), Instant::now())
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push_at(ToastKind::Error, text.into(), Instant::now())
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.push_at(ToastKind::Info, text.into(), Instant::now())
    }

    pub fn warning(&mut self, text: impl Into<String>) -> u64 {
        self.push_at(ToastKind::Warning, text.into(), Instant::now())
    }

    fn push_at(&mut self, kind: ToastKind, text: String, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            text,
            expires_at: now + kind.ttl(),
        });
        id
    }

    /// Removes the toast with `id` if it is still visible. Idempotent: a
    /// second call for the same id is a no-op, so a manual dismissal racing
    /// the expiry deadline cannot double-remove.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    fn prune_expired_at(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune_expired_at(Instant::now());
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(toast.kind.accent(), &toast.text);
                            if ui.small_button("✕").clicked() {
                                dismissed = Some(toast.id);
                            }
                        });
                    });
                    ui.add_space(4.0);
                }
            });
        if let Some(id) = dismissed {
            self.dismiss(id);
        }

        // Wake up again in time to retire the next expiring toast.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitted_toast_is_visible_until_its_deadline() {
        let t0 = Instant::now();
        let mut center = ToastCenter::new();
        center.push_at(ToastKind::Success, "Merged PDF saved".to_string(), t0);

        assert_eq!(center.visible().len(), 1);
        assert_eq!(center.visible()[0].text, "Merged PDF saved");

        center.prune_expired_at(t0 + Duration::from_secs(2));
        assert_eq!(center.visible().len(), 1);

        center.prune_expired_at(t0 + Duration::from_millis(3100));
        assert!(center.visible().is_empty());
    }

    #[test]
    fn error_toasts_outlive_success_toasts() {
        let t0 = Instant::now();
        let mut center = ToastCenter::new();
        center.push_at(ToastKind::Success, "done".to_string(), t0);
        center.push_at(ToastKind::Error, "failed".to_string(), t0);

        center.prune_expired_at(t0 + Duration::from_secs(4));
        assert_eq!(center.visible().len(), 1);
        assert_eq!(center.visible()[0].kind, ToastKind::Error);

        center.prune_expired_at(t0 + Duration::from_secs(6));
        assert!(center.visible().is_empty());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut center = ToastCenter::new();
        let id = center.info("heads up");

        center.dismiss(id);
        assert!(center.visible().is_empty());
        // Second dismissal of the same id must be a harmless no-op.
        center.dismiss(id);
        assert!(center.visible().is_empty());
    }

    #[test]
    fn removal_preserves_insertion_order() {
        let mut center = ToastCenter::new();
        center.success("first");
        let middle = center.warning("second");
        center.success("third");

        center.dismiss(middle);

        let texts: Vec<&str> = center
            .visible()
            .iter()
            .map(|toast| toast.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "third"]);
    }

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut center = ToastCenter::new();
        let first = center.success("one");
        center.dismiss(first);
        let second = center.success("two");

        assert_ne!(first, second);
        assert!(second > first);
    }
}
