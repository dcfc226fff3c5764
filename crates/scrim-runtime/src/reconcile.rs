#![forbid(unsafe_code)]

//! History reconciliation phases.
//!
//! The manager is always in exactly one of two phases with respect to the
//! browser history. `Idle` is the normal world: operations originate from
//! application code, and the manager writes history to match. `Unwinding`
//! means the *platform* moved history first (hardware back, browser
//! chrome, a recognized swipe) and the manager is catching the stack up;
//! any history write in that phase would echo the navigation back into
//! the history it came from.
//!
//! Making the phase an enum rather than a boolean flag does two things:
//! the unwind target travels with the phase (so diagnostics can say what
//! the manager was unwinding *to*), and re-entry shows up as a failed
//! transition instead of a silently re-entered loop.

use scrim_core::HistoryLevel;

/// Where history writes are currently allowed to originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    /// Application-driven: stack mutations write history.
    #[default]
    Idle,
    /// Platform-driven: unwinding toward `target`, history writes forbidden.
    Unwinding {
        /// Level the in-flight back event named.
        target: HistoryLevel,
    },
}

impl SyncPhase {
    /// Whether the manager is between unwinds.
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, SyncPhase::Idle)
    }

    /// Whether a back event is currently being serviced.
    #[inline]
    pub fn is_unwinding(self) -> bool {
        matches!(self, SyncPhase::Unwinding { .. })
    }

    /// Target of the in-flight unwind, if any.
    pub fn target(self) -> Option<HistoryLevel> {
        match self {
            SyncPhase::Idle => None,
            SyncPhase::Unwinding { target } => Some(target),
        }
    }

    /// Try to enter `Unwinding`. Fails (returning `false` and changing
    /// nothing) if an unwind is already in flight.
    #[must_use]
    pub fn begin_unwind(&mut self, target: HistoryLevel) -> bool {
        match self {
            SyncPhase::Idle => {
                *self = SyncPhase::Unwinding { target };
                true
            }
            SyncPhase::Unwinding { .. } => false,
        }
    }

    /// Return to `Idle`. No-op when already idle.
    pub fn finish_unwind(&mut self) {
        *self = SyncPhase::Idle;
    }
}
