#![forbid(unsafe_code)]

//! A small operation vocabulary for randomized runs.
//!
//! Property tests and fuzz targets both want the same thing: throw an
//! arbitrary sequence of pushes, closes, and back events at a manager and
//! check that the invariants held. [`ModalOp`] is that sequence's
//! alphabet, [`apply_op`] its interpreter. Ids are drawn from a tiny
//! `u8` space on purpose, so duplicate pushes, unknown parents, and
//! close-reopen cycles come up constantly instead of almost never.

use proptest::prelude::*;

use scrim_core::{ModalId, ModalRequest};
use scrim_runtime::ModalManager;

use crate::focus::{MemoryFocusScope, MemoryRoot};
use crate::history::MemoryHistory;
use crate::probe::CloseProbe;

/// Manager wired to the in-memory backends.
pub type MemoryManager = ModalManager<MemoryHistory, MemoryFocusScope>;

/// Fresh manager over [`MemoryHistory`] and [`MemoryFocusScope`].
pub fn memory_manager() -> MemoryManager {
    ModalManager::new(MemoryHistory::new(), MemoryFocusScope::new())
}

/// Id used for the numbered layer `n`.
pub fn modal_id(n: u8) -> ModalId {
    ModalId::from(format!("m{n}"))
}

/// Content root used for the numbered layer `n`.
pub fn root_for(n: u8) -> MemoryRoot {
    MemoryRoot::new(format!("r{n}"))
}

/// One step of a randomized run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOp {
    /// Open layer `id`, optionally as a child of layer `parent`.
    /// Rejections (duplicate id, unknown parent) are expected and ignored.
    Push { id: u8, parent: Option<u8> },
    /// Explicitly close layer `id`, cascading over its descendants.
    Close { id: u8 },
    /// Close the topmost layer.
    Pop,
    /// Close everything.
    Clear,
    /// The user presses hardware back: move the history cursor, then
    /// deliver the landing level as a back event. Does nothing when the
    /// cursor is already on the first entry.
    Back,
    /// Deliver the current history level again without moving the
    /// cursor, the way WebKit sometimes double-fires `popstate`.
    DuplicateBack,
    /// Apply queued deferred focus fixes.
    Pump,
}

/// Run one op against the manager. Push hooks come from `probe` so the
/// caller can audit teardown afterwards.
pub fn apply_op(manager: &mut MemoryManager, probe: &CloseProbe, op: &ModalOp) {
    match *op {
        ModalOp::Push { id, parent } => {
            let modal = modal_id(id);
            let mut request =
                ModalRequest::new(modal.clone(), root_for(id)).on_close(probe.hook(modal));
            if let Some(p) = parent {
                request = request.child_of(modal_id(p));
            }
            let _ = manager.push(request);
        }
        ModalOp::Close { id } => {
            manager.close(&modal_id(id));
        }
        ModalOp::Pop => {
            manager.pop();
        }
        ModalOp::Clear => {
            manager.clear();
        }
        ModalOp::Back => {
            if let Some(landed) = manager.history_mut().user_back() {
                manager.handle_back_navigation(landed);
            }
        }
        ModalOp::DuplicateBack => {
            let level = manager.history_level();
            manager.handle_back_navigation(level);
        }
        ModalOp::Pump => {
            manager.pump();
        }
    }
}

/// Run a whole sequence. See [`apply_op`].
pub fn apply_ops(manager: &mut MemoryManager, probe: &CloseProbe, ops: &[ModalOp]) {
    for op in ops {
        apply_op(manager, probe, op);
    }
}

fn op_strategy() -> impl Strategy<Value = ModalOp> {
    prop_oneof![
        4 => (0u8..6, proptest::option::of(0u8..6))
            .prop_map(|(id, parent)| ModalOp::Push { id, parent }),
        2 => (0u8..6).prop_map(|id| ModalOp::Close { id }),
        1 => Just(ModalOp::Pop),
        1 => Just(ModalOp::Clear),
        2 => Just(ModalOp::Back),
        1 => Just(ModalOp::DuplicateBack),
        1 => Just(ModalOp::Pump),
    ]
}

/// Sequences of up to `max_ops` operations, weighted toward pushes and
/// back events.
pub fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ModalOp>> {
    proptest::collection::vec(op_strategy(), 0..=max_ops)
}
