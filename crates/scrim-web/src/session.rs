#![forbid(unsafe_code)]

//! The session a wasm host embeds.
//!
//! One `WebSession` per page. The host's job, in order:
//!
//! 1. Construct the session; execute the drained commands (this installs
//!    the focus stylesheet).
//! 2. On every modal it renders, register the content root and its
//!    focusables before pushing.
//! 3. Forward platform events as they happen; drain and execute commands
//!    after each call into the session.
//! 4. Call [`pump`](WebSession::pump) from a zero-delay timer after any
//!    call that left deferred work (or simply every tick).
//!
//! The session never blocks, never sleeps, and emits commands only as a
//! result of being called, so hosts can treat it as a pure state machine.

use scrim_backend::HistoryBackend;
use scrim_core::{HistoryLevel, ModalId, ModalRequest, PushError};
use scrim_gesture::{SwipeBackConfig, SwipeBackDetector, TouchPoint};
use scrim_runtime::ModalManager;

use crate::command::{CommandSink, DomCommand, DomNodeKey};
use crate::event::DomEvent;
use crate::focus::DomFocusScope;
use crate::history::DomHistory;
use crate::styles::{FOCUS_STYLESHEET, STYLESHEET_ID};

/// Modal management wired to command-emitting DOM backends.
pub struct WebSession {
    manager: ModalManager<DomHistory, DomFocusScope>,
    detector: SwipeBackDetector,
    sink: CommandSink,
}

impl WebSession {
    /// Session with default gesture thresholds, starting at the root
    /// history level.
    pub fn new() -> Self {
        Self::with_config(SwipeBackConfig::new())
    }

    /// Session with custom gesture thresholds.
    pub fn with_config(config: SwipeBackConfig) -> Self {
        Self::build(config, HistoryLevel::ROOT)
    }

    /// Session for a page that reloaded with a modal fragment still in
    /// its URL: history claims `restored` but no layers are open. The
    /// first explicit operation (usually a [`clear`](Self::clear))
    /// reconciles the two.
    pub fn with_restored(config: SwipeBackConfig, restored: HistoryLevel) -> Self {
        Self::build(config, restored)
    }

    fn build(config: SwipeBackConfig, level: HistoryLevel) -> Self {
        let sink = CommandSink::new();
        let history = DomHistory::with_level(sink.clone(), level);
        let focus = DomFocusScope::new(sink.clone());

        sink.push(DomCommand::InstallStylesheet {
            id: STYLESHEET_ID.to_string(),
            css: FOCUS_STYLESHEET.to_string(),
        });

        Self {
            manager: ModalManager::new(history, focus),
            detector: SwipeBackDetector::with_config(config),
            sink,
        }
    }

    // ------------------------------------------------------------------
    // Modal operations
    // ------------------------------------------------------------------

    /// Open a layer. Register its root first or its focus isolation will
    /// be a silent no-op.
    pub fn push(&mut self, request: ModalRequest<DomNodeKey>) -> Result<(), PushError> {
        self.manager.push(request)
    }

    /// Close a layer and its descendants. `false` if not open.
    pub fn close(&mut self, id: &ModalId) -> bool {
        self.manager.close(id)
    }

    /// Close the topmost layer. `false` on an empty stack.
    pub fn pop(&mut self) -> bool {
        self.manager.pop()
    }

    /// Close everything. Returns how many layers closed.
    pub fn clear(&mut self) -> usize {
        self.manager.clear()
    }

    // ------------------------------------------------------------------
    // Host plumbing
    // ------------------------------------------------------------------

    /// Register a modal's content root and the focusables inside it.
    pub fn register_root(&mut self, root: DomNodeKey, focusables: Vec<DomNodeKey>) {
        self.manager.focus_mut().register_root(root, focusables);
    }

    /// Forget a root the host is detaching.
    pub fn unregister_root(&mut self, root: &DomNodeKey) {
        self.manager.focus_mut().unregister_root(root);
    }

    /// Feed one platform event through the session.
    pub fn handle_event(&mut self, event: DomEvent) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("WebSession::handle_event", event = ?event).entered();

        match event {
            DomEvent::PopState { level } => {
                let target = level.map(HistoryLevel::new).unwrap_or(HistoryLevel::ROOT);
                // The platform already moved; record where it landed, then
                // catch the stack up.
                self.manager.history_mut().set_level(target);
                self.manager.handle_back_navigation(target);
            }
            DomEvent::TouchStart { x, y } => {
                self.detector.touch_start(TouchPoint::new(x, y));
            }
            DomEvent::TouchEnd { x, y } => {
                let recognized = self.detector.touch_end(TouchPoint::new(x, y));
                // A swipe with nothing open belongs to the browser.
                if recognized.is_some() && !self.manager.is_empty() {
                    self.manager.history_mut().request_back();
                }
            }
            DomEvent::TouchCancel => {
                self.detector.cancel();
            }
            DomEvent::ActiveElement { node } => {
                self.manager.focus_mut().set_active(node);
            }
        }
    }

    /// Apply deferred focus fixes. Call from a zero-delay timer.
    pub fn pump(&mut self) -> usize {
        self.manager.pump()
    }

    /// Take every queued command, in emission order.
    pub fn drain_commands(&mut self) -> Vec<DomCommand> {
        self.sink.drain()
    }

    /// Commands queued and not yet drained.
    pub fn commands_pending(&self) -> usize {
        self.sink.len()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Number of open layers.
    pub fn depth(&self) -> usize {
        self.manager.depth()
    }

    /// Whether no layers are open.
    pub fn is_empty(&self) -> bool {
        self.manager.is_empty()
    }

    /// The underlying manager, for richer queries.
    pub fn manager(&self) -> &ModalManager<DomHistory, DomFocusScope> {
        &self.manager
    }

    /// The active gesture thresholds.
    pub fn gesture_config(&self) -> &SwipeBackConfig {
        self.detector.config()
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}
