#![forbid(unsafe_code)]

//! The modal stack: single source of truth for what is open.
//!
//! Entries are kept bottom-to-top in a `Vec`. All structure everyone else
//! relies on (history level, focus targets, cascade-close order) is derived
//! from this one sequence, so the stack validates on the way in instead of
//! repairing on the way out.
//!
//! # Invariants
//!
//! - Ids are unique among open entries.
//! - A parent named at push time is open at push time, so every entry's
//!   parent sits at a *lower* index. Stack order is therefore a valid
//!   close order when walked top-down.
//! - `level()` always equals `from_depth(depth())`.
//!
//! # Failure Modes
//!
//! - `push` with a duplicate id or unknown parent returns `Err` and drops
//!   the request without side effects.
//! - `pop` / `remove` / `get` on an empty stack or unknown id return `None`.
//! - Removing a parent does *not* remove its children here; cascade policy
//!   lives in the runtime, which uses [`ModalStack::descendants_of`] to
//!   close deepest-first before touching the parent.
//!
//! # Example
//!
//! ```ignore
//! let mut stack: ModalStack<NodeHandle> = ModalStack::new();
//! stack.push(ModalRequest::new("sheet", sheet_root))?;
//! stack.push(ModalRequest::new("confirm", confirm_root).child_of("sheet"))?;
//!
//! assert_eq!(stack.depth(), 2);
//! assert_eq!(stack.top().unwrap().id().as_str(), "confirm");
//!
//! let mut closed = stack.remove(&"confirm".into()).unwrap();
//! if let Some(hook) = closed.take_close_hook() {
//!     hook();
//! }
//! ```

use crate::entry::{ModalEntry, ModalRequest};
use crate::error::PushError;
use crate::id::ModalId;
use crate::level::HistoryLevel;

/// Ordered collection of open modal layers, bottom to top.
pub struct ModalStack<R> {
    entries: Vec<ModalEntry<R>>,
}

impl<R> ModalStack<R> {
    /// An empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of open layers.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether no layers are open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The history level matching the current depth.
    #[inline]
    pub fn level(&self) -> HistoryLevel {
        HistoryLevel::from_depth(self.entries.len())
    }

    /// Whether a layer with this id is open.
    pub fn contains(&self, id: &ModalId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    /// Topmost (most recently opened) layer.
    #[inline]
    pub fn top(&self) -> Option<&ModalEntry<R>> {
        self.entries.last()
    }

    /// Entry by id.
    pub fn get(&self, id: &ModalId) -> Option<&ModalEntry<R>> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Index of an entry, bottom = 0.
    pub fn position(&self, id: &ModalId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Iterate layers bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &ModalEntry<R>> {
        self.entries.iter()
    }

    /// Validate and open a layer on top of the stack.
    ///
    /// On rejection the request is dropped; its close hook never runs.
    pub fn push(&mut self, request: ModalRequest<R>) -> Result<(), PushError> {
        if self.contains(request.id()) {
            return Err(PushError::DuplicateId(request.id().clone()));
        }
        if let Some(parent) = request.parent()
            && !self.contains(parent)
        {
            return Err(PushError::UnknownParent {
                id: request.id().clone(),
                parent: parent.clone(),
            });
        }
        self.entries.push(request.into_entry());
        Ok(())
    }

    /// Remove and return the topmost layer.
    pub fn pop(&mut self) -> Option<ModalEntry<R>> {
        self.entries.pop()
    }

    /// Remove a layer from any position, preserving the order of the rest.
    pub fn remove(&mut self, id: &ModalId) -> Option<ModalEntry<R>> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx))
    }

    /// Ids of all open descendants of `id`, transitively, bottom to top.
    ///
    /// Because parents always sit below their children, one forward pass
    /// collects the whole subtree. Reverse the result for a safe
    /// deepest-first close order.
    pub fn descendants_of(&self, id: &ModalId) -> Vec<ModalId> {
        let mut found: Vec<ModalId> = Vec::new();
        for entry in &self.entries {
            if let Some(parent) = entry.parent()
                && (parent == id || found.contains(parent))
            {
                found.push(entry.id().clone());
            }
        }
        found
    }
}

impl<R> Default for ModalStack<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for ModalStack<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
