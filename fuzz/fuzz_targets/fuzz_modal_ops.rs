#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use scrim_harness::{CloseProbe, ModalOp, apply_op, memory_manager};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Push { id: u8, parent: Option<u8> },
    Close { id: u8 },
    Pop,
    Clear,
    Back,
    DuplicateBack,
    Pump,
}

/// Fold ids into eight slots so duplicate pushes, unknown parents, and
/// close-reopen cycles happen constantly.
fn convert(op: Op) -> ModalOp {
    match op {
        Op::Push { id, parent } => ModalOp::Push {
            id: id & 7,
            parent: parent.map(|p| p & 7),
        },
        Op::Close { id } => ModalOp::Close { id: id & 7 },
        Op::Pop => ModalOp::Pop,
        Op::Clear => ModalOp::Clear,
        Op::Back => ModalOp::Back,
        Op::DuplicateBack => ModalOp::DuplicateBack,
        Op::Pump => ModalOp::Pump,
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut manager = memory_manager();
    let probe = CloseProbe::new();

    for op in ops {
        apply_op(&mut manager, &probe, &convert(op));

        let stack = manager.stack();
        for (pos, entry) in stack.iter().enumerate() {
            if let Some(parent) = entry.parent() {
                match stack.position(parent) {
                    Some(p) => assert!(p < pos, "parent above child"),
                    None => panic!("child {} outlived parent {}", entry.id(), parent),
                }
            }
        }
        assert!(!manager.is_unwinding());
        assert_eq!(
            manager.history().pushes() as usize,
            manager.depth() + probe.count(),
            "an accepted push must be open or closed-with-hook"
        );
    }
});
