#![no_main]

use libfuzzer_sys::fuzz_target;

use scrim_web::input::{parse_event, parse_events};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_event(text);

    // The stream parser must reject or accept, never panic, and its
    // reported line numbers must stay within the input.
    match parse_events(text) {
        Ok(events) => {
            assert!(events.len() <= text.lines().count());
        }
        Err(err) => {
            let message = err.to_string();
            assert!(message.starts_with("malformed event at line "));
        }
    }
});
