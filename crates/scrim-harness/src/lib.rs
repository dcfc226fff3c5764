#![forbid(unsafe_code)]

//! Test harness for Scrim: in-memory backends and op generators.
//!
//! Everything here exists so modal flows can be exercised without a
//! browser and asserted precisely:
//!
//! - [`MemoryHistory`] models a real session history as an entry list
//!   with a cursor, including the awkward parts (replace leaves the
//!   entry count alone, back leaves stale forward entries behind).
//! - [`MemoryFocusScope`] records blind/restore state per root.
//! - [`CloseProbe`] hands out close hooks that log their firing order.
//! - [`ops`] generates random operation sequences for property tests and
//!   fuzzing.

pub mod focus;
pub mod history;
pub mod ops;
pub mod probe;

pub use focus::{MemoryFocusScope, MemoryRoot};
pub use history::MemoryHistory;
pub use ops::{
    MemoryManager, ModalOp, apply_op, apply_ops, memory_manager, modal_id, ops_strategy, root_for,
};
pub use probe::CloseProbe;
