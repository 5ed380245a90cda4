//! Debounce primitive for free-text search.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces rapid triggers into a single deferred action.
///
/// Invariant: at most one timer is pending per debouncer; arming again
/// aborts the previous timer, so only the last action within the window
/// runs.
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Default window for search-as-you-type.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Arm (or re-arm) the timer. Must be called from within a tokio
    /// runtime.
    pub fn schedule<F, Fut>(&mut self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        self.cancel();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            action().await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
