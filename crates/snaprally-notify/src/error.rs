//! Error types for notification delivery.

/// Errors that can occur when handing a notification to the host
/// platform.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The user declined (or previously revoked) notification
    /// permission. Not a failure to retry — ask again only from a
    /// settings screen.
    #[error("notification permission denied")]
    PermissionDenied,

    /// The platform accepted the request but delivery failed.
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}
