#![forbid(unsafe_code)]

//! Work the manager postpones until the host's next tick.
//!
//! Mobile WebKit sometimes re-focuses an element in the covered layer
//! right after a modal opens (autofocus restoration racing the open). The
//! fix is to assert the parent's focus suppression once more *after* the
//! platform has had its turn. The manager cannot sleep, so it queues the
//! fix; the host calls [`ModalManager::pump`] from a zero-delay timer or
//! its next animation frame.
//!
//! [`ModalManager::pump`]: crate::ModalManager::pump

use scrim_core::ModalId;

/// A queued fix-up, applied on the next [`pump`](crate::ModalManager::pump).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredFix {
    /// Hide the parent layer's focus again; the platform may have undone
    /// the hide that ran when its child opened.
    ReassertHide {
        /// The covered layer to re-blind. Skipped if closed by pump time.
        parent: ModalId,
    },
}
