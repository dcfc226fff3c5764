#![forbid(unsafe_code)]

//! Stack entries and the requests that create them.
//!
//! A [`ModalRequest`] is what callers hand to the runtime: id, content root,
//! optional parent, optional close hook. The stack turns an accepted request
//! into a [`ModalEntry`], stamping the open time.
//!
//! # Close hooks
//!
//! The close hook is the caller's teardown: detach DOM nodes, cancel
//! subscriptions, release a wake lock. Two rules, both enforced by
//! construction rather than by convention:
//!
//! - **At most once.** The hook is an `FnOnce` stored in an `Option`;
//!   [`ModalEntry::take_close_hook`] moves it out, so a second close of the
//!   same id finds nothing to run.
//! - **Never during push.** Rejected pushes drop the request without running
//!   the hook; a layer that never opened has nothing to tear down.
//!
//! Hooks run after their entry has left the stack, so a hook observing the
//! manager sees the post-close world. Hooks must not panic; an unwinding
//! hook aborts the remainder of whatever cascade it was part of.

use web_time::Instant;

use crate::id::ModalId;

/// Teardown callback run when an entry is closed.
pub type CloseHook = Box<dyn FnOnce()>;

/// A request to open a modal layer.
///
/// Built with short chained setters, in the order callers think about them:
///
/// ```ignore
/// let req = ModalRequest::new("confirm-delete", root)
///     .child_of("settings")
///     .on_close(|| tidy_up());
/// manager.push(req)?;
/// ```
pub struct ModalRequest<R> {
    id: ModalId,
    root: R,
    parent: Option<ModalId>,
    on_close: Option<CloseHook>,
}

impl<R> ModalRequest<R> {
    /// Request a new top-level layer with the given id and content root.
    pub fn new(id: impl Into<ModalId>, root: R) -> Self {
        Self {
            id: id.into(),
            root,
            parent: None,
            on_close: None,
        }
    }

    /// Open as a child of an already-open layer.
    #[must_use]
    pub fn child_of(mut self, parent: impl Into<ModalId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Run `hook` when this layer closes (at most once, never during push).
    #[must_use]
    pub fn on_close(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    /// Id this request will open under.
    #[inline]
    pub fn id(&self) -> &ModalId {
        &self.id
    }

    /// Declared parent, if any.
    #[inline]
    pub fn parent(&self) -> Option<&ModalId> {
        self.parent.as_ref()
    }

    /// Convert into a live entry, stamping the open time.
    pub(crate) fn into_entry(self) -> ModalEntry<R> {
        ModalEntry {
            id: self.id,
            root: self.root,
            parent: self.parent,
            on_close: self.on_close,
            opened_at: Instant::now(),
        }
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for ModalRequest<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalRequest")
            .field("id", &self.id)
            .field("root", &self.root)
            .field("parent", &self.parent)
            .field("has_close_hook", &self.on_close.is_some())
            .finish()
    }
}

/// One open modal layer.
///
/// Entries are created by [`crate::ModalStack::push`] and only ever removed
/// through the stack, which keeps the parent-before-child ordering intact.
pub struct ModalEntry<R> {
    id: ModalId,
    root: R,
    parent: Option<ModalId>,
    on_close: Option<CloseHook>,
    opened_at: Instant,
}

impl<R> ModalEntry<R> {
    /// The entry's id.
    #[inline]
    pub fn id(&self) -> &ModalId {
        &self.id
    }

    /// Content root handle, as understood by the active `FocusScope`.
    #[inline]
    pub fn root(&self) -> &R {
        &self.root
    }

    /// Parent layer, if this entry was opened as a child.
    #[inline]
    pub fn parent(&self) -> Option<&ModalId> {
        self.parent.as_ref()
    }

    /// Instant the layer was opened.
    #[inline]
    pub fn opened_at(&self) -> Instant {
        self.opened_at
    }

    /// Whether the close hook is still pending.
    #[inline]
    pub fn has_close_hook(&self) -> bool {
        self.on_close.is_some()
    }

    /// Move the close hook out, leaving `None` behind.
    ///
    /// The caller runs the returned hook after the entry is off the stack.
    /// Taking twice yields `None`, which is what makes double-close safe.
    pub fn take_close_hook(&mut self) -> Option<CloseHook> {
        self.on_close.take()
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for ModalEntry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalEntry")
            .field("id", &self.id)
            .field("root", &self.root)
            .field("parent", &self.parent)
            .field("has_close_hook", &self.on_close.is_some())
            .field("opened_at", &self.opened_at)
            .finish()
    }
}
