#![forbid(unsafe_code)]

//! End-to-end command streams for realistic modal flows.
//!
//! Each test drives a `WebSession` the way a host shell would and asserts
//! the exact command sequence the host is told to execute. Streams are
//! deterministic, so full equality is the cheapest strong assertion.

use pretty_assertions::assert_eq;
use scrim_core::{HistoryLevel, ModalRequest};
use scrim_web::styles::{
    BLUR_CHECK_DELAY_MS, FOCUS_HIDDEN_CLASS, FOCUS_HIDDEN_CONTAINER_CLASS,
};
use scrim_web::{DomCommand, DomEvent, DomNodeKey, WebSession};

fn key(s: &str) -> DomNodeKey {
    DomNodeKey::new(s)
}

fn add_class(node: &str, class: &str) -> DomCommand {
    DomCommand::AddClass {
        node: key(node),
        class: class.to_string(),
    }
}

fn remove_class(node: &str, class: &str) -> DomCommand {
    DomCommand::RemoveClass {
        node: key(node),
        class: class.to_string(),
    }
}

/// Session with the stylesheet install already drained away.
fn session() -> WebSession {
    let mut session = WebSession::new();
    session.drain_commands();
    session
}

#[test]
fn first_push_emits_blur_and_one_history_push() {
    let mut s = session();
    s.register_root(key("sheet-root"), vec![key("sheet-btn")]);

    s.push(ModalRequest::new("sheet", key("sheet-root"))).unwrap();
    assert_eq!(
        s.drain_commands(),
        [
            DomCommand::BlurActive,
            DomCommand::PushHistory {
                level: 1,
                url: "#modal-1".into()
            },
        ]
    );
    assert_eq!(s.depth(), 1);
}

#[test]
fn child_push_blinds_the_parent_before_the_history_write() {
    let mut s = session();
    s.register_root(key("sheet-root"), vec![key("sheet-btn")]);
    s.register_root(key("confirm-root"), vec![key("confirm-ok")]);
    s.push(ModalRequest::new("sheet", key("sheet-root"))).unwrap();
    s.drain_commands();

    s.push(ModalRequest::new("confirm", key("confirm-root")).child_of("sheet"))
        .unwrap();
    assert_eq!(
        s.drain_commands(),
        [
            DomCommand::BlurActive,
            add_class("sheet-btn", FOCUS_HIDDEN_CLASS),
            DomCommand::InstallTouchBlurGuard {
                node: key("sheet-btn")
            },
            add_class("sheet-root", FOCUS_HIDDEN_CONTAINER_CLASS),
            DomCommand::ScheduleBlurCheck {
                root: key("sheet-root"),
                delay_ms: BLUR_CHECK_DELAY_MS
            },
            DomCommand::PushHistory {
                level: 2,
                url: "#modal-2".into()
            },
        ]
    );

    // The deferred re-hide fires on the next pump, minus the guard that
    // is already installed.
    assert_eq!(s.pump(), 1);
    assert_eq!(
        s.drain_commands(),
        [
            add_class("sheet-btn", FOCUS_HIDDEN_CLASS),
            add_class("sheet-root", FOCUS_HIDDEN_CONTAINER_CLASS),
            DomCommand::ScheduleBlurCheck {
                root: key("sheet-root"),
                delay_ms: BLUR_CHECK_DELAY_MS
            },
        ]
    );
}

#[test]
fn closing_the_child_restores_the_parent_and_replaces_history() {
    let mut s = session();
    s.register_root(key("sheet-root"), vec![key("sheet-btn")]);
    s.register_root(key("confirm-root"), vec![key("confirm-ok")]);
    s.push(ModalRequest::new("sheet", key("sheet-root"))).unwrap();
    s.push(ModalRequest::new("confirm", key("confirm-root")).child_of("sheet"))
        .unwrap();
    s.drain_commands();

    assert!(s.close(&"confirm".into()));
    assert_eq!(
        s.drain_commands(),
        [
            remove_class("sheet-btn", FOCUS_HIDDEN_CLASS),
            remove_class("sheet-root", FOCUS_HIDDEN_CONTAINER_CLASS),
            DomCommand::ReplaceHistory {
                level: 1,
                url: "#modal-1".into()
            },
        ]
    );

    assert!(s.close(&"sheet".into()));
    assert_eq!(s.drain_commands(), [DomCommand::ClearHistoryMarker]);
    assert!(s.is_empty());
}

#[test]
fn hardware_back_unwinds_without_history_commands() {
    let mut s = session();
    s.register_root(key("a-root"), vec![]);
    s.register_root(key("b-root"), vec![key("b-input")]);
    s.push(ModalRequest::new("a", key("a-root"))).unwrap();
    s.push(ModalRequest::new("b", key("b-root")).child_of("a")).unwrap();
    s.drain_commands();

    s.handle_event(DomEvent::PopState { level: Some(1) });

    let commands = s.drain_commands();
    assert!(
        !commands.iter().any(|c| matches!(
            c,
            DomCommand::PushHistory { .. }
                | DomCommand::ReplaceHistory { .. }
                | DomCommand::ClearHistoryMarker
        )),
        "unwind must not write history, got {commands:?}"
    );
    assert_eq!(s.depth(), 1);
    assert_eq!(s.manager().history_level(), HistoryLevel::new(1));
}

#[test]
fn foreign_popstate_unwinds_everything() {
    let mut s = session();
    s.register_root(key("a-root"), vec![]);
    s.push(ModalRequest::new("a", key("a-root"))).unwrap();
    s.drain_commands();

    s.handle_event(DomEvent::PopState { level: None });
    assert!(s.is_empty());
    assert_eq!(s.manager().history_level(), HistoryLevel::ROOT);
}

#[test]
fn edge_swipe_requests_back_only_with_modals_open() {
    let mut s = session();

    // Nothing open: the swipe belongs to the browser.
    s.handle_event(DomEvent::TouchStart { x: 10.0, y: 300.0 });
    s.handle_event(DomEvent::TouchEnd { x: 200.0, y: 305.0 });
    assert!(s.drain_commands().is_empty());

    s.register_root(key("a-root"), vec![]);
    s.push(ModalRequest::new("a", key("a-root"))).unwrap();
    s.drain_commands();

    s.handle_event(DomEvent::TouchStart { x: 10.0, y: 300.0 });
    s.handle_event(DomEvent::TouchEnd { x: 200.0, y: 305.0 });
    assert_eq!(s.drain_commands(), [DomCommand::RequestHistoryBack]);

    // The platform answers with a popstate; only then does the stack move.
    assert_eq!(s.depth(), 1);
    s.handle_event(DomEvent::PopState { level: Some(0) });
    assert!(s.is_empty());
}

#[test]
fn off_edge_and_diagonal_swipes_are_ignored() {
    let mut s = session();
    s.register_root(key("a-root"), vec![]);
    s.push(ModalRequest::new("a", key("a-root"))).unwrap();
    s.drain_commands();

    s.handle_event(DomEvent::TouchStart { x: 180.0, y: 300.0 });
    s.handle_event(DomEvent::TouchEnd { x: 340.0, y: 300.0 });
    assert!(s.drain_commands().is_empty());

    s.handle_event(DomEvent::TouchStart { x: 10.0, y: 300.0 });
    s.handle_event(DomEvent::TouchEnd { x: 160.0, y: 420.0 });
    assert!(s.drain_commands().is_empty());

    s.handle_event(DomEvent::TouchStart { x: 10.0, y: 300.0 });
    s.handle_event(DomEvent::TouchCancel);
    s.handle_event(DomEvent::TouchEnd { x: 200.0, y: 300.0 });
    assert!(s.drain_commands().is_empty());
}

#[test]
fn refocus_after_open_is_caught_by_the_pump() {
    let mut s = session();
    s.register_root(key("sheet-root"), vec![key("sheet-input")]);
    s.register_root(key("confirm-root"), vec![]);
    s.push(ModalRequest::new("sheet", key("sheet-root"))).unwrap();
    s.push(ModalRequest::new("confirm", key("confirm-root")).child_of("sheet"))
        .unwrap();
    s.drain_commands();

    // The platform sneaks focus back into the covered sheet after the
    // open (autofocus restoration); the host reports it.
    s.handle_event(DomEvent::ActiveElement {
        node: Some(key("sheet-input")),
    });

    assert_eq!(s.pump(), 1);
    let commands = s.drain_commands();
    assert!(
        commands.contains(&DomCommand::Blur {
            node: key("sheet-input")
        }),
        "the deferred re-hide blurs the re-focused field, got {commands:?}"
    );
}

#[test]
fn cascade_close_replays_as_one_history_replace() {
    let mut s = session();
    for id in ["a", "b", "c"] {
        s.register_root(key(&format!("{id}-root")), vec![]);
    }
    s.push(ModalRequest::new("a", key("a-root"))).unwrap();
    s.push(ModalRequest::new("b", key("b-root")).child_of("a")).unwrap();
    s.push(ModalRequest::new("c", key("c-root")).child_of("b")).unwrap();
    s.drain_commands();

    assert!(s.close(&"a".into()));
    let commands = s.drain_commands();
    let history_writes: Vec<&DomCommand> = commands
        .iter()
        .filter(|c| {
            matches!(
                c,
                DomCommand::PushHistory { .. }
                    | DomCommand::ReplaceHistory { .. }
                    | DomCommand::ClearHistoryMarker
            )
        })
        .collect();
    assert_eq!(history_writes, [&DomCommand::ClearHistoryMarker]);
    assert!(s.is_empty());
}
