#![forbid(unsafe_code)]

//! An in-memory session history with real browser shape.
//!
//! Browsers do not give you a stack, they give you an entry list and a
//! cursor. Pushing truncates everything after the cursor; replacing
//! rewrites in place without changing the count; going back just moves
//! the cursor, leaving the entries ahead of it intact. Several modal
//! bugs (phantom entries after close, stale levels reachable by back)
//! only reproduce under exactly that shape, so the fake keeps it.

use std::collections::VecDeque;

use scrim_backend::HistoryBackend;
use scrim_core::HistoryLevel;

/// Entry-list [`HistoryBackend`] for tests.
///
/// Entries are `Option<HistoryLevel>`: `None` models a state this
/// backend never wrote (the page's own entry, or a cleared marker),
/// which reads as [`HistoryLevel::ROOT`].
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Vec<Option<HistoryLevel>>,
    index: usize,
    pending_back: VecDeque<HistoryLevel>,
    push_count: u32,
    replace_count: u32,
    back_request_count: u32,
}

impl MemoryHistory {
    /// History with a single foreign entry, cursor on it.
    pub fn new() -> Self {
        Self {
            entries: vec![None],
            index: 0,
            pending_back: VecDeque::new(),
            push_count: 0,
            replace_count: 0,
            back_request_count: 0,
        }
    }

    /// Move the cursor back one entry, as the hardware back button does.
    ///
    /// Returns the level landed on, for the test to deliver as a back
    /// event. `None` when already at the first entry (a real browser
    /// would leave the page).
    pub fn user_back(&mut self) -> Option<HistoryLevel> {
        self.step_back()
    }

    /// Back navigations queued by [`request_back`] and not yet taken.
    ///
    /// [`request_back`]: HistoryBackend::request_back
    pub fn take_pending_back(&mut self) -> Vec<HistoryLevel> {
        self.pending_back.drain(..).collect()
    }

    /// Total entries, including stale ones ahead of the cursor.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Cursor position, 0-based.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Whether back has anywhere to go.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// The whole entry list, oldest first.
    pub fn entry_levels(&self) -> &[Option<HistoryLevel>] {
        &self.entries
    }

    /// Number of `push_level` calls.
    pub fn pushes(&self) -> u32 {
        self.push_count
    }

    /// Number of `replace_level` calls.
    pub fn replaces(&self) -> u32 {
        self.replace_count
    }

    /// Number of `request_back` calls.
    pub fn back_requests(&self) -> u32 {
        self.back_request_count
    }

    fn step_back(&mut self) -> Option<HistoryLevel> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.level())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBackend for MemoryHistory {
    fn level(&self) -> HistoryLevel {
        self.entries[self.index].unwrap_or(HistoryLevel::ROOT)
    }

    fn push_level(&mut self, level: HistoryLevel) {
        // Pushing from mid-history drops the forward branch, like the
        // real History API.
        self.entries.truncate(self.index + 1);
        self.entries.push(Some(level));
        self.index += 1;
        self.push_count += 1;
    }

    fn replace_level(&mut self, level: HistoryLevel) {
        self.entries[self.index] = if level.is_root() { None } else { Some(level) };
        self.replace_count += 1;
    }

    fn request_back(&mut self) {
        self.back_request_count += 1;
        if let Some(landed) = self.step_back() {
            self.pending_back.push_back(landed);
        }
    }
}
