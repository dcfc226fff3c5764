#![forbid(unsafe_code)]

//! An instrumented in-memory focus scope.
//!
//! Where the web scope emits DOM commands, this one keeps a ledger: per
//! root, whether it is currently suppressed and how many times each
//! operation landed on it. Scenario tests assert on the ledger instead
//! of parsing a command stream.

use std::collections::HashMap;
use std::fmt;

use scrim_backend::FocusScope;

/// Names one modal's content root in tests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoryRoot(String);

impl MemoryRoot {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemoryRoot {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for MemoryRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
struct RootState {
    hidden: bool,
    hide_calls: u32,
    restore_calls: u32,
}

/// Ledger-keeping [`FocusScope`] for tests.
///
/// Roots are created on first touch, so every handle the runtime passes
/// is "known". Suppression state is idempotent per the trait contract;
/// the call counters are raw, so a deferred re-hide shows up as a
/// second `hide` on a root that was already dark.
#[derive(Debug, Default)]
pub struct MemoryFocusScope {
    states: HashMap<MemoryRoot, RootState>,
    blur_count: u32,
}

impl MemoryFocusScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `root` is currently suppressed. Untouched roots read as
    /// not hidden.
    pub fn is_hidden(&self, root: &MemoryRoot) -> bool {
        self.states.get(root).is_some_and(|s| s.hidden)
    }

    /// Raw number of `hide` calls that landed on `root`.
    pub fn hide_calls(&self, root: &MemoryRoot) -> u32 {
        self.states.get(root).map_or(0, |s| s.hide_calls)
    }

    /// Raw number of `restore` calls that landed on `root`.
    pub fn restore_calls(&self, root: &MemoryRoot) -> u32 {
        self.states.get(root).map_or(0, |s| s.restore_calls)
    }

    /// Number of `blur_active` calls.
    pub fn blur_count(&self) -> u32 {
        self.blur_count
    }

    /// Every root currently suppressed, sorted for stable assertions.
    pub fn hidden_roots(&self) -> Vec<MemoryRoot> {
        let mut roots: Vec<MemoryRoot> = self
            .states
            .iter()
            .filter(|(_, s)| s.hidden)
            .map(|(root, _)| root.clone())
            .collect();
        roots.sort();
        roots
    }
}

impl FocusScope for MemoryFocusScope {
    type Handle = MemoryRoot;

    fn blur_active(&mut self) {
        self.blur_count += 1;
    }

    fn hide(&mut self, root: &Self::Handle) {
        let state = self.states.entry(root.clone()).or_default();
        state.hidden = true;
        state.hide_calls += 1;
    }

    fn restore(&mut self, root: &Self::Handle) {
        let state = self.states.entry(root.clone()).or_default();
        state.hidden = false;
        state.restore_calls += 1;
    }
}
