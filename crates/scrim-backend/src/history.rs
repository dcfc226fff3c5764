#![forbid(unsafe_code)]

//! History backend: the session history as the runtime sees it.

use scrim_core::HistoryLevel;

/// Session history keyed by modal level.
///
/// The runtime follows a strict write discipline against this trait:
///
/// - [`push_level`](HistoryBackend::push_level) exactly once per accepted
///   modal open, with the new depth.
/// - [`replace_level`](HistoryBackend::replace_level) exactly once per
///   explicit close/clear that leaves the recorded level stale, never more.
/// - No writes at all while unwinding in response to a back event; the
///   platform already moved, writing back would echo.
///
/// Implementations only record or transmit. Deciding *when* to write is the
/// runtime's job; an implementation that second-guesses it (say, collapsing
/// a push into a replace) will desynchronize depth from history.
pub trait HistoryBackend {
    /// Level recorded on the current history entry.
    ///
    /// Foreign entries (never written by this backend) report
    /// [`HistoryLevel::ROOT`].
    fn level(&self) -> HistoryLevel;

    /// Append a new history entry recording `level`.
    fn push_level(&mut self, level: HistoryLevel);

    /// Rewrite the current history entry to record `level`.
    ///
    /// Replacing with [`HistoryLevel::ROOT`] also clears any modal marker
    /// from the visible URL.
    fn replace_level(&mut self, level: HistoryLevel);

    /// Ask the platform to navigate back one entry.
    ///
    /// Asynchronous by nature: the navigation surfaces later as a back
    /// event carrying the level of the entry landed on. Must not touch the
    /// modal stack directly.
    fn request_back(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal recording impl, enough to prove the trait is object-safe
    /// and usable behind `&mut dyn`.
    #[derive(Default)]
    struct Tape {
        level: HistoryLevel,
        log: Vec<String>,
    }

    impl HistoryBackend for Tape {
        fn level(&self) -> HistoryLevel {
            self.level
        }

        fn push_level(&mut self, level: HistoryLevel) {
            self.level = level;
            self.log.push(format!("push {level}"));
        }

        fn replace_level(&mut self, level: HistoryLevel) {
            self.level = level;
            self.log.push(format!("replace {level}"));
        }

        fn request_back(&mut self) {
            self.log.push("back".into());
        }
    }

    #[test]
    fn usable_as_trait_object() {
        let mut tape = Tape::default();
        let backend: &mut dyn HistoryBackend = &mut tape;
        backend.push_level(HistoryLevel::new(1));
        backend.replace_level(HistoryLevel::ROOT);
        backend.request_back();
        assert_eq!(tape.log, ["push level 1", "replace level 0", "back"]);
    }
}
