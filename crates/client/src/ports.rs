//! Ports to the host environment.

use shopfront_views::RenderedView;

/// Owner of the view's document subtree.
///
/// Single writer: only the controller holding this sink renders into it,
/// and every render fully replaces the previous content.
pub trait ViewSink: Send {
    fn apply(&mut self, view: &RenderedView);
}

/// User-facing notifications.
///
/// `success`, `error`, and `confirm` are transient toasts; `fatal` is the
/// blocking notification reserved for configuration failures and is shown
/// at most once per flow.
pub trait Notifier: Send {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
    /// Prompt preceding a destructive mutation.
    fn confirm(&mut self, message: &str);
    fn fatal(&mut self, message: &str);
}
