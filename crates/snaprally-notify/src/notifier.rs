//! Delivery hook for handing notifications to the host platform.
//!
//! Snaprally doesn't show notifications itself — that's the embedding
//! application's job (OS notification center, a web banner, a test
//! recorder). This crate defines the [`Notifier`] trait: ask for
//! permission once, then deliver composed [`Notification`]s. The core
//! calls it at the right moments; the host decides what "deliver"
//! means.

use std::future::Future;

use crate::{Notification, NotifyError};

/// Delivers notifications on behalf of the game core.
///
/// # Trait bounds
///
/// - `Send + Sync` → the notifier is shared across async tasks.
/// - `'static` → it owns its data and lives as long as the client.
///
/// # Example
///
/// ```rust
/// use snaprally_notify::{Notification, Notifier, NotifyError};
///
/// /// Collects notifications instead of showing them — handy in tests.
/// #[derive(Default)]
/// struct Recorder(std::sync::Mutex<Vec<Notification>>);
///
/// impl Notifier for Recorder {
///     async fn request_permission(&self) -> Result<bool, NotifyError> {
///         Ok(true)
///     }
///
///     async fn deliver(&self, n: &Notification) -> Result<(), NotifyError> {
///         self.0.lock().unwrap().push(n.clone());
///         Ok(())
///     }
/// }
/// ```
pub trait Notifier: Send + Sync + 'static {
    /// Asks the platform for permission to notify.
    ///
    /// Returns `Ok(false)` when the user declined — that's an answer,
    /// not an error. Callers should check once at startup and skip
    /// delivery thereafter when denied.
    fn request_permission(
        &self,
    ) -> impl Future<Output = Result<bool, NotifyError>> + Send;

    /// Shows one notification.
    ///
    /// # Errors
    /// Returns [`NotifyError`] when the platform rejects or drops the
    /// request. Core code logs delivery failures and moves on — a lost
    /// notification never interrupts the game.
    fn deliver(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// A [`Notifier`] that grants permission and silently drops everything.
///
/// The default for tests and headless embeddings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    async fn request_permission(&self) -> Result<bool, NotifyError> {
        Ok(true)
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::debug!(
            kind = ?notification.kind,
            title = %notification.title,
            "notification dropped (noop notifier)"
        );
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
