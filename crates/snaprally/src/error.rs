//! Unified error type for the Snaprally client core.

use snaprally_notify::NotifyError;
use snaprally_store::StoreError;

/// Top-level error that wraps the sub-crate errors.
///
/// When using the `snaprally` meta-crate, you deal with this single
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum RallyError {
    /// A storage-level error (read, write, remove, backend down).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A notification-delivery error (permission, platform drop).
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
