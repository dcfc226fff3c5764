#![forbid(unsafe_code)]

//! DOM adapter for Scrim, host-driven and deterministic.
//!
//! Nothing in this crate touches the DOM. The host shell (wasm-bindgen
//! glue, or a test) owns the browser; this crate owns the policy. Data
//! flows in two one-way streams:
//!
//! - **Events in**: the host forwards platform happenings as [`DomEvent`]
//!   values (popstate, touches, focus changes) to
//!   [`WebSession::handle_event`].
//! - **Commands out**: every state change the page needs is emitted as a
//!   [`DomCommand`] (push a history entry, add a class, schedule a blur
//!   check). The host drains and executes them verbatim.
//!
//! Keeping the boundary this strict means the whole modal lifecycle runs
//! identically under a real browser and under `cargo test`, byte for byte
//! on the command stream. The `input-parser` feature adds a JSON codec for
//! both streams so non-Rust hosts can speak them over a string channel.

pub mod command;
pub mod event;
pub mod focus;
pub mod fragment;
pub mod history;
#[cfg(feature = "input-parser")]
pub mod input;
pub mod session;
pub mod styles;

pub use command::{CommandSink, DomCommand, DomNodeKey};
pub use event::DomEvent;
pub use focus::DomFocusScope;
pub use history::DomHistory;
pub use session::WebSession;
