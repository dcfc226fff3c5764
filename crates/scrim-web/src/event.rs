#![forbid(unsafe_code)]

//! Events the host forwards into the session.

use crate::command::DomNodeKey;

/// One platform happening, as data.
///
/// The host forwards these from its real listeners (`popstate`,
/// `touchstart`/`touchend` with passive listeners, `focusin`/`focusout`).
/// Delivery order is the platform's dispatch order; the session never
/// reorders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "input-parser", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "input-parser", serde(tag = "type", rename_all = "snake_case"))]
pub enum DomEvent {
    /// The browser navigated within session history. `level` is the
    /// `modalLevel` recorded on the entry landed on; `None` for foreign
    /// entries (a state the session never wrote), which unwind to root.
    PopState { level: Option<u32> },
    /// Primary touch began, viewport CSS-pixel coordinates.
    TouchStart { x: f64, y: f64 },
    /// Primary touch ended.
    TouchEnd { x: f64, y: f64 },
    /// Touch sequence was interrupted (incoming call, browser gesture).
    TouchCancel,
    /// Focus moved. `None` means focus left for `body`/nowhere.
    ActiveElement { node: Option<DomNodeKey> },
}
