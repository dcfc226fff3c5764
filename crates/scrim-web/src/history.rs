#![forbid(unsafe_code)]

//! History backend that emits commands instead of calling the History API.

use scrim_backend::HistoryBackend;
use scrim_core::HistoryLevel;

use crate::command::{CommandSink, DomCommand};
use crate::fragment;

/// Command-emitting [`HistoryBackend`].
///
/// Tracks the level of the current history entry locally. Writes the
/// session initiates update it directly; navigations the *platform*
/// initiates (back button, chrome gestures) are recorded by the session
/// calling [`set_level`](DomHistory::set_level) when the popstate event
/// arrives, before the unwind runs.
#[derive(Debug)]
pub struct DomHistory {
    sink: CommandSink,
    level: HistoryLevel,
}

impl DomHistory {
    /// Backend writing into `sink`, starting at the root level.
    pub fn new(sink: CommandSink) -> Self {
        Self {
            sink,
            level: HistoryLevel::ROOT,
        }
    }

    /// Backend starting at a restored level (page reloaded with a modal
    /// fragment in the URL; see [`fragment::level_from_hash`]).
    pub fn with_level(sink: CommandSink, level: HistoryLevel) -> Self {
        Self { sink, level }
    }

    /// Record a level the platform moved to on its own.
    pub fn set_level(&mut self, level: HistoryLevel) {
        self.level = level;
    }
}

impl HistoryBackend for DomHistory {
    fn level(&self) -> HistoryLevel {
        self.level
    }

    fn push_level(&mut self, level: HistoryLevel) {
        self.level = level;
        self.sink.push(DomCommand::PushHistory {
            level: level.get(),
            url: fragment::fragment_for(level),
        });
    }

    fn replace_level(&mut self, level: HistoryLevel) {
        self.level = level;
        if level.is_root() {
            // Back to the page's own URL: strip the modal marker entirely.
            self.sink.push(DomCommand::ClearHistoryMarker);
        } else {
            self.sink.push(DomCommand::ReplaceHistory {
                level: level.get(),
                url: fragment::fragment_for(level),
            });
        }
    }

    fn request_back(&mut self) {
        // Level changes only when the resulting popstate is delivered.
        self.sink.push(DomCommand::RequestHistoryBack);
    }
}
