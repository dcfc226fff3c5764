#![forbid(unsafe_code)]

//! Commands the session emits for the host to execute.
//!
//! Commands are plain data, ordered, and complete: executing them in
//! sequence against a real DOM reproduces exactly the state the session
//! decided on. The host promises nothing back except that it tried; the
//! session never waits on a command's outcome.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Host-assigned key identifying one DOM node.
///
/// The host decides what a key means (an element id, a `data-*` attribute,
/// an index into its own table); the session only compares and echoes
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "input-parser", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "input-parser", serde(transparent))]
pub struct DomNodeKey(String);

impl DomNodeKey {
    /// Key from anything string-like.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DomNodeKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DomNodeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for DomNodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One instruction to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "input-parser", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "input-parser", serde(tag = "cmd", rename_all = "snake_case"))]
pub enum DomCommand {
    /// Append a `<style>` element with this id and CSS, once per page.
    /// The host skips it if an element with the id already exists.
    InstallStylesheet { id: String, css: String },
    /// `history.pushState({modalLevel: level}, '', url)`.
    PushHistory { level: u32, url: String },
    /// `history.replaceState({modalLevel: level}, '', url)`.
    ReplaceHistory { level: u32, url: String },
    /// Replace the current entry with the page's own path and query,
    /// stripping any modal fragment from the visible URL.
    ClearHistoryMarker,
    /// `history.back()`. The navigation comes back later as a popstate
    /// event; nothing is assumed to have happened yet.
    RequestHistoryBack,
    /// Blur whatever element holds focus, if any.
    BlurActive,
    /// Blur one specific element.
    Blur { node: DomNodeKey },
    /// `classList.add(class)` on the node.
    AddClass { node: DomNodeKey, class: String },
    /// `classList.remove(class)` on the node.
    RemoveClass { node: DomNodeKey, class: String },
    /// Install a passive `touchend` listener on the node that blurs it on
    /// a zero-delay timer. Emitted at most once per node.
    InstallTouchBlurGuard { node: DomNodeKey },
    /// After `delay_ms`, blur the active element if it still sits inside
    /// `root`. Second line of defense against focus restored by the
    /// platform after the synchronous hide.
    ScheduleBlurCheck { root: DomNodeKey, delay_ms: u32 },
}

/// Shared queue the backends write commands into.
///
/// Cloning is cheap and shares the queue, which is how one session hands
/// the same sink to its history backend, its focus scope, and itself.
/// Single-threaded by construction; the wasm main thread is the only
/// place this runs.
#[derive(Clone, Default)]
pub struct CommandSink {
    queue: Rc<RefCell<VecDeque<DomCommand>>>,
}

impl CommandSink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&self, command: DomCommand) {
        self.queue.borrow_mut().push_back(command);
    }

    /// Take every queued command, in emission order.
    pub fn drain(&self) -> Vec<DomCommand> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Commands currently queued.
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl fmt::Debug for CommandSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSink")
            .field("queued", &self.len())
            .finish()
    }
}
