#![forbid(unsafe_code)]

//! Focus scope that emits class and blur commands.
//!
//! The host registers each modal's content root together with the nodes
//! matching [`FOCUSABLE_SELECTOR`] inside it, and keeps the session
//! informed of focus moves via `ActiveElement` events. From there the
//! scope can blind and restore layers purely by emitting commands.
//!
//! [`FOCUSABLE_SELECTOR`]: crate::styles::FOCUSABLE_SELECTOR

use ahash::{AHashMap, AHashSet};
use scrim_backend::FocusScope;

use crate::command::{CommandSink, DomCommand, DomNodeKey};
use crate::styles::{BLUR_CHECK_DELAY_MS, FOCUS_HIDDEN_CLASS, FOCUS_HIDDEN_CONTAINER_CLASS};

/// Command-emitting [`FocusScope`] over host-registered node keys.
#[derive(Debug)]
pub struct DomFocusScope {
    sink: CommandSink,
    roots: AHashMap<DomNodeKey, Vec<DomNodeKey>>,
    active: Option<DomNodeKey>,
    /// Nodes that already carry the touch blur guard. Guards are installed
    /// once and never removed, mirroring how cheap the listener is.
    touch_guarded: AHashSet<DomNodeKey>,
}

impl DomFocusScope {
    /// Scope writing into `sink`, with no roots registered yet.
    pub fn new(sink: CommandSink) -> Self {
        Self {
            sink,
            roots: AHashMap::new(),
            active: None,
            touch_guarded: AHashSet::new(),
        }
    }

    /// Register a content root and the focusable nodes inside it.
    ///
    /// Re-registering a root replaces its node list (the host re-queries
    /// after content changes).
    pub fn register_root(&mut self, root: DomNodeKey, focusables: Vec<DomNodeKey>) {
        self.roots.insert(root, focusables);
    }

    /// Forget a root. Its nodes keep whatever classes they carry; hosts
    /// unregister roots they are about to detach anyway.
    pub fn unregister_root(&mut self, root: &DomNodeKey) {
        self.roots.remove(root);
    }

    /// Whether a root is currently registered.
    pub fn is_registered(&self, root: &DomNodeKey) -> bool {
        self.roots.contains_key(root)
    }

    /// Record where focus sits, from the host's focus events.
    pub fn set_active(&mut self, node: Option<DomNodeKey>) {
        self.active = node;
    }

    /// Node the scope believes holds focus.
    pub fn active(&self) -> Option<&DomNodeKey> {
        self.active.as_ref()
    }
}

impl FocusScope for DomFocusScope {
    type Handle = DomNodeKey;

    fn blur_active(&mut self) {
        // Unconditional: the host's blur on an unfocused page is a no-op,
        // and the scope's picture of focus may lag the platform's.
        self.active = None;
        self.sink.push(DomCommand::BlurActive);
    }

    fn hide(&mut self, root: &DomNodeKey) {
        let Some(focusables) = self.roots.get(root) else {
            return;
        };

        let mut blurred_tracked = false;
        for node in focusables {
            if self.active.as_ref() == Some(node) {
                self.sink.push(DomCommand::Blur { node: node.clone() });
                blurred_tracked = true;
            }
            self.sink.push(DomCommand::AddClass {
                node: node.clone(),
                class: FOCUS_HIDDEN_CLASS.to_string(),
            });
            if !self.touch_guarded.contains(node) {
                self.sink
                    .push(DomCommand::InstallTouchBlurGuard { node: node.clone() });
                self.touch_guarded.insert(node.clone());
            }
        }
        if blurred_tracked {
            self.active = None;
        }

        self.sink.push(DomCommand::AddClass {
            node: root.clone(),
            class: FOCUS_HIDDEN_CONTAINER_CLASS.to_string(),
        });
        self.sink.push(DomCommand::ScheduleBlurCheck {
            root: root.clone(),
            delay_ms: BLUR_CHECK_DELAY_MS,
        });
    }

    fn restore(&mut self, root: &DomNodeKey) {
        let Some(focusables) = self.roots.get(root) else {
            return;
        };

        for node in focusables {
            self.sink.push(DomCommand::RemoveClass {
                node: node.clone(),
                class: FOCUS_HIDDEN_CLASS.to_string(),
            });
        }
        self.sink.push(DomCommand::RemoveClass {
            node: root.clone(),
            class: FOCUS_HIDDEN_CONTAINER_CLASS.to_string(),
        });
    }
}
