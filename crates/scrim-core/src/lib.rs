#![forbid(unsafe_code)]

//! Core types for Scrim: the modal stack and everything it is made of.
//!
//! This crate is deliberately platform-free. It knows nothing about the DOM,
//! browser history, or timers; it owns the one piece of state every other
//! Scrim crate derives from: the ordered stack of open modal layers.
//!
//! Higher layers build on this:
//!
//! - `scrim-backend` defines the capability traits (`HistoryBackend`,
//!   `FocusScope`) whose implementations consume stack state.
//! - `scrim-runtime` wraps [`ModalStack`] in a `ModalManager` that sequences
//!   stack mutations with history writes and focus isolation.
//! - `scrim-web` maps the whole thing onto DOM commands for a wasm host.
//!
//! # Invariants
//!
//! - Ids are unique among open entries; a push with a duplicate id is
//!   rejected, never clobbered.
//! - A child is always above its parent: parents must be open at push time,
//!   so stack order is a valid topological order of the parent forest.
//! - The history level for a stack of depth `n` is exactly `n`.

pub mod entry;
pub mod error;
pub mod id;
pub mod level;
pub mod stack;

pub use entry::{CloseHook, ModalEntry, ModalRequest};
pub use error::PushError;
pub use id::ModalId;
pub use level::HistoryLevel;
pub use stack::ModalStack;
