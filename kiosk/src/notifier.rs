//! Transient user notifications.

/// Sink for the lightweight one-line notification emitted after a
/// successful commit. Cosmetics live behind this boundary.
pub trait Notifier {
    fn notify(&self, message: &str);
}
