#![forbid(unsafe_code)]

//! History levels: the depth a browser history entry claims the stack had.
//!
//! Every history entry written by Scrim records the stack depth at write
//! time. Level 0 is the root page (no modals); level `n` means `n` layers
//! were open. Back-navigation events carry the level of the entry the
//! browser landed on, and the runtime unwinds the stack down to it.

use std::fmt;

/// Stack depth as recorded in a history entry.
///
/// Levels are ordered, so "unwind until depth <= target" is a plain
/// comparison. Foreign history entries (states Scrim never wrote) have no
/// level and are treated as [`HistoryLevel::ROOT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HistoryLevel(u32);

impl HistoryLevel {
    /// The root page: no modals open.
    pub const ROOT: Self = Self(0);

    /// Level from a raw value.
    #[inline]
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Level corresponding to a stack depth. Saturates on absurd depths.
    #[inline]
    pub fn from_depth(depth: usize) -> Self {
        Self(u32::try_from(depth).unwrap_or(u32::MAX))
    }

    /// Raw level value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The stack depth this level corresponds to.
    #[inline]
    pub const fn depth(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the root page.
    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl Default for HistoryLevel {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Display for HistoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}
