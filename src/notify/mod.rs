//! Notification seam.
//!
//! Forms report submission outcomes through a [`Notifier`] instead of
//! rendering toasts themselves; the host decides how messages reach the
//! user.

/// Sink for user-facing success and error messages.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that routes messages into the tracing pipeline, for hosts
/// without their own toast surface.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
