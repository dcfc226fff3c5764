#![forbid(unsafe_code)]

//! The Scrim runtime: one manager that sequences everything.
//!
//! [`ModalManager`] is the only component allowed to mutate the modal
//! stack. Everything observable follows from the order it does things in:
//! focus is blinded before a layer opens, history gets exactly one entry
//! per open, closes cascade through descendants before reconciling history
//! once, and platform back events unwind the stack without writing history
//! at all.
//!
//! The manager is generic over the two capability traits from
//! `scrim-backend`, so the same sequencing runs under a DOM host
//! (`scrim-web`) and under in-memory fakes (`scrim-harness`) with no code
//! path differences.

pub mod defer;
pub mod manager;
pub mod reconcile;

pub use defer::DeferredFix;
pub use manager::ModalManager;
pub use reconcile::SyncPhase;
