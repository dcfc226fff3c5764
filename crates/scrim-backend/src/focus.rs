#![forbid(unsafe_code)]

//! Focus scope: blinding and restoring the layers under a modal.
//!
//! When a modal opens on a touch screen, the layer underneath keeps its
//! focusable elements unless something suppresses them; a stray tap can
//! land in a covered form field and pop the keyboard over the modal. A
//! `FocusScope` owns that suppression for whatever "element" means on its
//! platform.

/// Focus suppression over some platform's notion of an element tree.
///
/// `Handle` identifies one modal's content root; the scope knows (or can
/// discover) the focusable elements inside it. Implementations must make
/// both operations idempotent: the runtime may hide an already-hidden root
/// (deferred re-assertion after an open) and restore an already-restored
/// one, and neither may accumulate state.
pub trait FocusScope {
    /// Identifies one modal's content root.
    type Handle;

    /// Drop focus from whatever element currently holds it.
    fn blur_active(&mut self);

    /// Suppress focus on everything inside `root`.
    ///
    /// Unknown handles are a no-op. Hiding twice must equal hiding once.
    fn hide(&mut self, root: &Self::Handle);

    /// Lift the suppression on everything inside `root`.
    ///
    /// Unknown handles are a no-op. Restoring twice must equal restoring
    /// once; restoring a never-hidden root must change nothing.
    fn restore(&mut self, root: &Self::Handle);
}

/// Blur the active element and hide every given root.
///
/// Used when a modal opens without a declared parent: there is no single
/// layer to blind, so the whole stack goes dark under the newcomer.
pub fn clear_all<'a, F, I>(scope: &mut F, roots: I)
where
    F: FocusScope,
    F::Handle: 'a,
    I: IntoIterator<Item = &'a F::Handle>,
{
    scope.blur_active();
    for root in roots {
        scope.hide(root);
    }
}

/// Direction of a focus change, for callers that carry the operation as
/// data (event logs, replay files) rather than calling the scope directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    /// Suppress focus inside the root.
    Hide,
    /// Lift the suppression.
    Restore,
}

impl FocusAction {
    /// Apply this action to `root` on the given scope.
    pub fn apply<F: FocusScope>(self, scope: &mut F, root: &F::Handle) {
        match self {
            FocusAction::Hide => scope.hide(root),
            FocusAction::Restore => scope.restore(root),
        }
    }
}
