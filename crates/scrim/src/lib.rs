#![forbid(unsafe_code)]

//! Scrim: nested modals with native-feeling back navigation.
//!
//! This crate is the facade: it re-exports the pieces most applications
//! need and bundles the common ones into a [`prelude`]. The work happens
//! in the member crates:
//!
//! - `scrim-core` owns the modal stack and its types.
//! - `scrim-backend` defines the `HistoryBackend` and `FocusScope`
//!   capability traits.
//! - `scrim-runtime` sequences every mutation through `ModalManager`
//!   (feature `runtime`, on by default).
//! - `scrim-gesture` recognizes the left-edge back swipe (feature
//!   `gesture`, on by default).
//! - `scrim-web` adapts the whole thing to DOM commands and events
//!   (feature `web`), re-exported here as [`web`].
//!
//! # Quick start
//!
//! ```ignore
//! use scrim::prelude::*;
//!
//! let mut manager = ModalManager::new(history, focus);
//! manager.push(ModalRequest::new("settings", settings_root))?;
//! manager.push(
//!     ModalRequest::new("confirm", confirm_root)
//!         .child_of("settings")
//!         .on_close(|| cleanup()),
//! )?;
//!
//! // Hardware back landed on level 1: close down to it.
//! manager.handle_back_navigation(HistoryLevel::new(1));
//! assert_eq!(manager.depth(), 1);
//! ```

pub use scrim_backend::{FocusAction, FocusScope, HistoryBackend, clear_all};
pub use scrim_core::{
    CloseHook, HistoryLevel, ModalEntry, ModalId, ModalRequest, ModalStack, PushError,
};

#[cfg(feature = "gesture")]
pub use scrim_gesture::{SwipeBack, SwipeBackConfig, SwipeBackDetector, TouchPoint};

#[cfg(feature = "runtime")]
pub use scrim_runtime::{DeferredFix, ModalManager, SyncPhase};

/// The DOM adapter, when the `web` feature is enabled.
#[cfg(feature = "web")]
pub use scrim_web as web;

/// Everything an application module typically imports.
pub mod prelude {
    pub use scrim_backend::{FocusScope, HistoryBackend};
    pub use scrim_core::{HistoryLevel, ModalId, ModalRequest, PushError};

    #[cfg(feature = "gesture")]
    pub use scrim_gesture::{SwipeBackConfig, SwipeBackDetector};

    #[cfg(feature = "runtime")]
    pub use scrim_runtime::ModalManager;

    #[cfg(feature = "web")]
    pub use scrim_web::{DomCommand, DomEvent, WebSession};
}
