#![forbid(unsafe_code)]

//! Integration tests: whole modal flows over the in-memory backends.
//!
//! Each test walks one realistic user journey and asserts the combined
//! footprint across stack, history entry list, focus ledger, and close
//! hooks.

use pretty_assertions::assert_eq;
use scrim_backend::HistoryBackend;
use scrim_core::{HistoryLevel, ModalId, ModalRequest};
use scrim_harness::{CloseProbe, MemoryManager, MemoryRoot, memory_manager};

fn open(
    manager: &mut MemoryManager,
    probe: &CloseProbe,
    id: &str,
    parent: Option<&str>,
) {
    let mut request =
        ModalRequest::new(id, MemoryRoot::new(format!("{id}-root"))).on_close(probe.hook(id));
    if let Some(p) = parent {
        request = request.child_of(p);
    }
    manager.push(request).unwrap();
}

fn root(id: &str) -> MemoryRoot {
    MemoryRoot::new(format!("{id}-root"))
}

/// Press hardware back once: move the cursor, deliver the landing level.
fn press_back(manager: &mut MemoryManager) {
    if let Some(landed) = manager.history_mut().user_back() {
        manager.handle_back_navigation(landed);
    }
}

// ============================================================================
// Nested flow: open three deep, close one at a time
// ============================================================================

#[test]
fn nested_settings_flow_keeps_history_and_focus_in_step() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "settings", None);
    open(&mut manager, &probe, "profile", Some("settings"));
    manager.pump();
    open(&mut manager, &probe, "avatar", Some("profile"));
    manager.pump();

    assert_eq!(manager.depth(), 3);
    assert_eq!(manager.history_level(), HistoryLevel::new(3));
    assert_eq!(
        manager.history().entry_levels(),
        [
            None,
            Some(HistoryLevel::new(1)),
            Some(HistoryLevel::new(2)),
            Some(HistoryLevel::new(3)),
        ]
    );
    // Only the covered layers are dark; the top one stays live.
    assert_eq!(
        manager.focus().hidden_roots(),
        [root("profile"), root("settings")]
    );

    assert!(manager.close(&ModalId::new("avatar")));
    assert!(!manager.focus().is_hidden(&root("profile")));
    assert!(manager.focus().is_hidden(&root("settings")));
    assert_eq!(manager.history_level(), HistoryLevel::new(2));

    assert!(manager.close(&ModalId::new("profile")));
    assert!(manager.close(&ModalId::new("settings")));

    assert!(manager.is_empty());
    assert_eq!(manager.history_level(), HistoryLevel::ROOT);
    assert!(manager.focus().hidden_roots().is_empty());
    assert_eq!(
        probe.closed(),
        [
            ModalId::new("avatar"),
            ModalId::new("profile"),
            ModalId::new("settings"),
        ]
    );
    // Each explicit close replaced in place; the entry list never grew.
    assert_eq!(manager.history().entry_count(), 4);
    assert_eq!(manager.history().replaces(), 3);
}

// ============================================================================
// Hardware back
// ============================================================================

#[test]
fn hardware_back_peels_one_layer_per_press() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "menu", None);
    open(&mut manager, &probe, "item", Some("menu"));
    open(&mut manager, &probe, "detail", Some("item"));

    press_back(&mut manager);
    assert_eq!(manager.depth(), 2);
    assert_eq!(probe.closed(), [ModalId::new("detail")]);
    assert!(!manager.focus().is_hidden(&root("item")));

    press_back(&mut manager);
    assert_eq!(manager.depth(), 1);
    assert_eq!(manager.current().map(|e| e.id()), Some(&ModalId::new("menu")));

    press_back(&mut manager);
    assert!(manager.is_empty());
    // The whole journey back wrote no history entries.
    assert_eq!(manager.history().replaces(), 0);
    assert_eq!(manager.history().pushes(), 3);
}

#[test]
fn duplicate_popstate_delivery_converges() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "menu", None);
    open(&mut manager, &probe, "item", Some("menu"));

    press_back(&mut manager);
    // WebKit redelivers the same state; the stack is already there.
    let level = manager.history_level();
    manager.handle_back_navigation(level);

    assert_eq!(manager.depth(), 1);
    assert_eq!(probe.count(), 1);
    assert_eq!(manager.suppressed_back_events(), 0);
}

#[test]
fn back_after_explicit_close_absorbs_one_press() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "sheet", None);
    open(&mut manager, &probe, "confirm", Some("sheet"));

    // Explicit close replaces entry 2 with level 1, so history now reads
    // [root, 1, 1] with the cursor on the duplicate.
    assert!(manager.close(&ModalId::new("confirm")));
    assert_eq!(
        manager.history().entry_levels(),
        [None, Some(HistoryLevel::new(1)), Some(HistoryLevel::new(1))]
    );

    // First press lands on the other level-1 entry: nothing to unwind.
    press_back(&mut manager);
    assert_eq!(manager.depth(), 1);
    assert_eq!(probe.count(), 1);

    // Second press reaches root and closes the sheet.
    press_back(&mut manager);
    assert!(manager.is_empty());
    assert_eq!(probe.closed(), [ModalId::new("confirm"), ModalId::new("sheet")]);
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn clear_tears_down_top_first_with_one_history_write() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "1", None);
    open(&mut manager, &probe, "2", None);
    open(&mut manager, &probe, "3", None);

    assert_eq!(manager.clear(), 3);
    assert_eq!(
        probe.closed(),
        [ModalId::new("3"), ModalId::new("2"), ModalId::new("1")]
    );
    assert!(manager.is_empty());
    assert_eq!(manager.history().replaces(), 1);
    assert_eq!(manager.history_level(), HistoryLevel::ROOT);
    // No layer declared a parent, so nothing is restored on the way out.
    // Tearing the covered containers down is the close hooks' job.
    assert_eq!(manager.focus().hidden_roots(), [root("1"), root("2")]);
}

// ============================================================================
// Programmatic back requests (the gesture path)
// ============================================================================

#[test]
fn requested_back_routes_through_history_then_unwinds() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "gallery", None);
    open(&mut manager, &probe, "photo", Some("gallery"));

    // A back swipe never touches the stack directly; it asks history to
    // move and waits for the event to come back around.
    manager.history_mut().request_back();
    assert_eq!(manager.depth(), 2);

    for landed in manager.history_mut().take_pending_back() {
        manager.handle_back_navigation(landed);
    }
    assert_eq!(manager.depth(), 1);
    assert_eq!(probe.closed(), [ModalId::new("photo")]);

    manager.history_mut().request_back();
    for landed in manager.history_mut().take_pending_back() {
        manager.handle_back_navigation(landed);
    }
    assert!(manager.is_empty());

    // One more request with nowhere to go: counted, nothing delivered.
    manager.history_mut().request_back();
    assert!(manager.history_mut().take_pending_back().is_empty());
    assert_eq!(manager.history().back_requests(), 3);
}

// ============================================================================
// Cascades and reuse
// ============================================================================

#[test]
fn closing_a_shared_parent_fells_both_siblings() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "editor", None);
    open(&mut manager, &probe, "toolbar", Some("editor"));
    open(&mut manager, &probe, "palette", Some("editor"));

    assert!(manager.close(&ModalId::new("editor")));
    assert!(manager.is_empty());
    // Deepest first, then the shallower sibling, then the parent.
    assert_eq!(
        probe.closed(),
        [
            ModalId::new("palette"),
            ModalId::new("toolbar"),
            ModalId::new("editor"),
        ]
    );
    assert_eq!(manager.history().replaces(), 1);
}

#[test]
fn an_id_can_be_reused_after_close_with_a_fresh_hook() {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    open(&mut manager, &probe, "dialog", None);
    assert!(manager.close(&ModalId::new("dialog")));
    open(&mut manager, &probe, "dialog", None);
    assert!(manager.close(&ModalId::new("dialog")));

    // Two instances, one firing each.
    assert_eq!(probe.count_for("dialog"), 2);
    assert_eq!(manager.history().pushes(), 2);
}
