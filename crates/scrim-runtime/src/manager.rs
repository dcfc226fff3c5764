#![forbid(unsafe_code)]

//! The modal manager: every stack mutation goes through here.
//!
//! One push does, in order: blur the active element, blind the layer(s)
//! underneath, append the entry, write one history entry, queue a deferred
//! re-blind of the parent. One close does: close descendants deepest-first,
//! run each close hook once, restore each closed layer's parent focus,
//! reconcile history with a single replace. A platform back event unwinds
//! top-down to the event's level with no history writes at all.
//!
//! # Invariants
//!
//! - After any `push`, `close`, `clear`, or `pop` returns, the recorded
//!   history level equals the stack depth.
//! - Exactly one `push_level` per accepted push; at most one
//!   `replace_level` per explicit close/clear; zero history writes on the
//!   back-navigation path.
//! - Close hooks run at most once per entry, after the entry is off the
//!   stack, in deepest-first order within a cascade.
//! - No child outlives its parent.
//!
//! # Failure Modes
//!
//! - `close` on an unknown id returns `false` and writes nothing.
//! - A back event naming a level deeper than the stack unwinds nothing;
//!   stack and history stay apart until the next explicit operation
//!   reconciles them.
//! - A close hook that panics aborts the rest of its cascade; the entries
//!   already closed stay closed. Hooks are expected not to panic.
//!
//! # Example
//!
//! ```ignore
//! let mut manager = ModalManager::new(DomHistory::new(sink.clone()), DomFocusScope::new(sink));
//!
//! manager.push(ModalRequest::new("sheet", sheet_root))?;
//! manager.push(ModalRequest::new("confirm", confirm_root).child_of("sheet"))?;
//!
//! // Hardware back: the platform moved history, catch the stack up.
//! manager.handle_back_navigation(HistoryLevel::new(1));
//! assert_eq!(manager.depth(), 1);
//! ```

use scrim_backend::{FocusScope, HistoryBackend, clear_all};
use scrim_core::{HistoryLevel, ModalEntry, ModalId, ModalRequest, ModalStack, PushError};

use crate::defer::DeferredFix;
use crate::reconcile::SyncPhase;

/// Sequences modal stack mutations with history writes and focus changes.
///
/// Owns the stack outright; callers get read access via
/// [`stack`](ModalManager::stack) but can only mutate through the
/// operations here, which is what keeps the invariants above structural.
pub struct ModalManager<H: HistoryBackend, F: FocusScope> {
    stack: ModalStack<F::Handle>,
    history: H,
    focus: F,
    phase: SyncPhase,
    deferred: Vec<DeferredFix>,
    suppressed_back_events: u64,
}

impl<H: HistoryBackend, F: FocusScope> ModalManager<H, F> {
    /// Manager over the given backends, starting with an empty stack.
    pub fn new(history: H, focus: F) -> Self {
        Self {
            stack: ModalStack::new(),
            history,
            focus,
            phase: SyncPhase::Idle,
            deferred: Vec::new(),
            suppressed_back_events: 0,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Number of open layers.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Whether no layers are open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether a layer with this id is open.
    pub fn contains(&self, id: &ModalId) -> bool {
        self.stack.contains(id)
    }

    /// The topmost layer, if any.
    pub fn current(&self) -> Option<&ModalEntry<F::Handle>> {
        self.stack.top()
    }

    /// Read-only view of the stack.
    #[inline]
    pub fn stack(&self) -> &ModalStack<F::Handle> {
        &self.stack
    }

    /// Level recorded on the current history entry.
    pub fn history_level(&self) -> HistoryLevel {
        self.history.level()
    }

    /// Whether a back event is currently being serviced.
    pub fn is_unwinding(&self) -> bool {
        self.phase.is_unwinding()
    }

    /// Back events dropped because they arrived mid-unwind.
    pub fn suppressed_back_events(&self) -> u64 {
        self.suppressed_back_events
    }

    /// Queued deferred fixes not yet pumped.
    pub fn pending_fixes(&self) -> usize {
        self.deferred.len()
    }

    /// The history backend. Platform adapters use this for bookkeeping
    /// (recording externally-moved levels); the stack stays manager-only.
    #[inline]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the history backend. See [`history`](Self::history).
    #[inline]
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// The focus scope.
    #[inline]
    pub fn focus(&self) -> &F {
        &self.focus
    }

    /// Mutable access to the focus scope, for platform bookkeeping such as
    /// registering content roots. See [`history`](Self::history).
    #[inline]
    pub fn focus_mut(&mut self) -> &mut F {
        &mut self.focus
    }

    // ------------------------------------------------------------------
    // Application-driven operations
    // ------------------------------------------------------------------

    /// Open a layer on top of the stack.
    ///
    /// Validates first, so a rejected push has no side effects: no focus
    /// change, no history write, and the request's close hook never runs.
    pub fn push(&mut self, request: ModalRequest<F::Handle>) -> Result<(), PushError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("ModalManager::push", id = %request.id()).entered();

        if self.stack.contains(request.id()) {
            return Err(PushError::DuplicateId(request.id().clone()));
        }
        let parent = request.parent().cloned();
        if let Some(p) = &parent
            && !self.stack.contains(p)
        {
            return Err(PushError::UnknownParent {
                id: request.id().clone(),
                parent: p.clone(),
            });
        }

        match &parent {
            Some(p) => {
                self.focus.blur_active();
                if let Some(entry) = self.stack.get(p) {
                    self.focus.hide(entry.root());
                }
            }
            None => clear_all(&mut self.focus, self.stack.iter().map(|e| e.root())),
        }

        self.stack.push(request)?;
        self.history.push_level(self.stack.level());

        if let Some(p) = parent {
            self.deferred.push(DeferredFix::ReassertHide { parent: p });
        }
        Ok(())
    }

    /// Close a layer and every open descendant of it, deepest first.
    ///
    /// Returns `false` (and does nothing) if the id is not open. History is
    /// reconciled with at most one replace after the whole cascade.
    pub fn close(&mut self, id: &ModalId) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("ModalManager::close", id = %id).entered();

        if !self.stack.contains(id) {
            return false;
        }

        let mut order = self.stack.descendants_of(id);
        order.reverse();
        order.push(id.clone());
        for doomed in &order {
            self.close_entry(doomed);
        }

        self.reconcile();
        true
    }

    /// Close the topmost layer, cascading as [`close`](Self::close) does.
    ///
    /// Returns `false` on an empty stack.
    pub fn pop(&mut self) -> bool {
        let Some(top) = self.stack.top().map(|e| e.id().clone()) else {
            return false;
        };
        self.close(&top)
    }

    /// Close every open layer, top-down. Returns how many closed.
    ///
    /// Hooks run per layer as usual; history is reconciled exactly once at
    /// the end, back to the root level.
    pub fn clear(&mut self) -> usize {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("ModalManager::clear", depth = self.stack.depth()).entered();

        let mut closed = 0usize;
        while let Some(top) = self.stack.top().map(|e| e.id().clone()) {
            if self.close_entry(&top) {
                closed += 1;
            }
        }
        self.reconcile();
        closed
    }

    // ------------------------------------------------------------------
    // Platform-driven operations
    // ------------------------------------------------------------------

    /// Service a platform back event that landed on `target`.
    ///
    /// Closes layers top-down until depth matches the target. Runs entirely
    /// in the `Unwinding` phase: hooks and focus restores fire per layer,
    /// history is never written. A back event arriving while another is
    /// being serviced is counted and dropped.
    ///
    /// Foreign history states carry no level and should be delivered as
    /// [`HistoryLevel::ROOT`]. A target deeper than the stack unwinds
    /// nothing.
    pub fn handle_back_navigation(&mut self, target: HistoryLevel) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "ModalManager::handle_back_navigation",
            target = target.get(),
            depth = self.stack.depth()
        )
        .entered();

        if !self.phase.begin_unwind(target) {
            self.suppressed_back_events += 1;
            #[cfg(feature = "tracing")]
            tracing::debug!(target = target.get(), "back event suppressed mid-unwind");
            return;
        }

        while self.stack.depth() > target.depth() {
            let Some(top) = self.stack.top().map(|e| e.id().clone()) else {
                break;
            };
            self.close_entry(&top);
        }

        self.phase.finish_unwind();
    }

    /// Apply queued deferred fixes. Returns how many actually applied.
    ///
    /// Hosts call this from a zero-delay timer or the next animation frame
    /// after operations that may queue fixes. Fixes whose layer has since
    /// closed are dropped silently.
    pub fn pump(&mut self) -> usize {
        let pending = std::mem::take(&mut self.deferred);
        let mut applied = 0usize;
        for fix in pending {
            match fix {
                DeferredFix::ReassertHide { parent } => {
                    if let Some(entry) = self.stack.get(&parent) {
                        self.focus.hide(entry.root());
                        applied += 1;
                    }
                }
            }
        }
        applied
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Close one entry without touching history: remove from the stack,
    /// run the hook, restore the parent's focus if the parent is open.
    ///
    /// The hook runs *after* removal, so even a hook that somehow observes
    /// the manager sees the post-close stack, and a second close of the
    /// same id finds neither entry nor hook.
    fn close_entry(&mut self, id: &ModalId) -> bool {
        let Some(mut entry) = self.stack.remove(id) else {
            return false;
        };
        let parent = entry.parent().cloned();

        if let Some(hook) = entry.take_close_hook() {
            hook();
        }

        if let Some(parent) = parent
            && let Some(above) = self.stack.get(&parent)
        {
            self.focus.restore(above.root());
        }
        true
    }

    /// Bring the recorded history level back to the stack depth with a
    /// single replace. No-op when they already agree (including the case
    /// where a back navigation just moved history for us).
    fn reconcile(&mut self) {
        let target = self.stack.level();
        if self.history.level() != target {
            self.history.replace_level(target);
        }
    }
}
