#![forbid(unsafe_code)]

//! JSON codec for the event and command streams (`input-parser` feature).
//!
//! Hosts that are not Rust (a plain `<script>` shell, a React Native
//! webview bridge) speak newline-delimited JSON: one event or command per
//! line. Events are internally tagged with `"type"`, commands with
//! `"cmd"`, both in snake case:
//!
//! ```text
//! {"type":"pop_state","level":1}
//! {"type":"touch_start","x":12.5,"y":300.0}
//! {"cmd":"push_history","level":2,"url":"#modal-2"}
//! ```

use std::fmt;

use crate::command::DomCommand;
use crate::event::DomEvent;

/// Why an event stream failed to parse.
#[derive(Debug)]
pub enum ParseError {
    /// Malformed JSON or an unknown event shape, with its 1-based line.
    Json {
        line: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Json { line, source } => {
                write!(f, "malformed event at line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json { source, .. } => Some(source),
        }
    }
}

/// Parse a single JSON-encoded event.
pub fn parse_event(json: &str) -> Result<DomEvent, ParseError> {
    serde_json::from_str(json).map_err(|source| ParseError::Json { line: 1, source })
}

/// Parse a newline-delimited batch of events. Blank lines are skipped;
/// the first malformed line aborts with its line number.
pub fn parse_events(ndjson: &str) -> Result<Vec<DomEvent>, ParseError> {
    let mut events = Vec::new();
    for (idx, raw) in ndjson.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| ParseError::Json {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Encode commands as newline-delimited JSON, one per line.
pub fn encode_commands(commands: &[DomCommand]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for command in commands {
        out.push_str(&serde_json::to_string(command)?);
        out.push('\n');
    }
    Ok(out)
}
