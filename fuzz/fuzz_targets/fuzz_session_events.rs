#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use scrim_core::{ModalId, ModalRequest};
use scrim_web::{DomEvent, DomNodeKey, WebSession};

#[derive(Arbitrary, Debug)]
enum Step {
    Open { id: u8, parent: Option<u8> },
    Close { id: u8 },
    Pop,
    Clear,
    PopState { level: Option<u32> },
    TouchStart { x: f64, y: f64 },
    TouchEnd { x: f64, y: f64 },
    TouchCancel,
    ActiveElement { node: Option<u8> },
    Pump,
    Drain,
}

fn modal(n: u8) -> ModalId {
    ModalId::new(format!("m{}", n & 7))
}

fn key(n: u8) -> DomNodeKey {
    DomNodeKey::new(format!("n{}", n & 7))
}

fuzz_target!(|steps: Vec<Step>| {
    let mut session = WebSession::new();

    for step in steps {
        match step {
            Step::Open { id, parent } => {
                let root = key(id);
                session.register_root(root.clone(), vec![key(id.wrapping_add(1))]);
                let mut request = ModalRequest::new(modal(id), root);
                if let Some(p) = parent {
                    request = request.child_of(modal(p));
                }
                let _ = session.push(request);
            }
            Step::Close { id } => {
                session.close(&modal(id));
            }
            Step::Pop => {
                session.pop();
            }
            Step::Clear => {
                session.clear();
            }
            Step::PopState { level } => {
                session.handle_event(DomEvent::PopState { level });
            }
            Step::TouchStart { x, y } => {
                session.handle_event(DomEvent::TouchStart { x, y });
            }
            Step::TouchEnd { x, y } => {
                session.handle_event(DomEvent::TouchEnd { x, y });
            }
            Step::TouchCancel => {
                session.handle_event(DomEvent::TouchCancel);
            }
            Step::ActiveElement { node } => {
                session.handle_event(DomEvent::ActiveElement {
                    node: node.map(key),
                });
            }
            Step::Pump => {
                session.pump();
            }
            Step::Drain => {
                session.drain_commands();
            }
        }
        assert!(!session.manager().is_unwinding());
    }

    // Draining leaves the queue truly empty.
    session.drain_commands();
    assert_eq!(session.commands_pending(), 0);
});
