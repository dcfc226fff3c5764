#![forbid(unsafe_code)]

//! Close-hook instrumentation.
//!
//! Hooks are `FnOnce` and vanish into the runtime when a request is
//! built, so there is nothing left to inspect after the fact. The probe
//! closes over a shared log instead: mint one hook per request, then
//! read the log back to see which layers tore down, in what order, and
//! how many times.

use std::cell::RefCell;
use std::rc::Rc;

use scrim_core::ModalId;

/// Shared recorder for close-hook firings.
///
/// Clones share the same log, so a single probe can cover every layer
/// in a scenario.
#[derive(Debug, Clone, Default)]
pub struct CloseProbe {
    log: Rc<RefCell<Vec<ModalId>>>,
}

impl CloseProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A close hook that records `id` when it runs.
    pub fn hook(&self, id: impl Into<ModalId>) -> impl FnOnce() + 'static {
        let log = Rc::clone(&self.log);
        let id = id.into();
        move || log.borrow_mut().push(id)
    }

    /// Every firing so far, in run order.
    pub fn closed(&self) -> Vec<ModalId> {
        self.log.borrow().clone()
    }

    /// Total firings.
    pub fn count(&self) -> usize {
        self.log.borrow().len()
    }

    /// Firings recorded under `id`.
    pub fn count_for(&self, id: &str) -> usize {
        self.log.borrow().iter().filter(|m| m.as_str() == id).count()
    }
}
