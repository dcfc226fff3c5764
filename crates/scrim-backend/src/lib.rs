#![forbid(unsafe_code)]

//! Capability traits separating modal policy from platform mechanism.
//!
//! `scrim-runtime` is written entirely against these traits. Production
//! wires in `scrim-web`'s command-emitting implementations; tests wire in
//! `scrim-harness`'s in-memory fakes and assert on their recorded state.
//! Neither side can reach around the manager: the traits expose only the
//! operations the runtime actually sequences.

pub mod focus;
pub mod history;

pub use focus::{FocusAction, FocusScope, clear_all};
pub use history::HistoryBackend;
