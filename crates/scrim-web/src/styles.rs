#![forbid(unsafe_code)]

//! Class names, selectors, and the injected stylesheet.
//!
//! Focus suppression works by classes, not inline styles, so restoring a
//! layer is a pure class removal with no style bookkeeping. The stylesheet
//! goes in once per page via [`DomCommand::InstallStylesheet`].
//!
//! [`DomCommand::InstallStylesheet`]: crate::DomCommand::InstallStylesheet

/// Id of the injected `<style>` element; hosts use it to dedupe.
pub const STYLESHEET_ID: &str = "scrim-focus-styles";

/// Class put on each focusable element in a blinded layer.
pub const FOCUS_HIDDEN_CLASS: &str = "scrim-focus-hidden";

/// Class put on the blinded layer's content root.
pub const FOCUS_HIDDEN_CONTAINER_CLASS: &str = "scrim-focus-hidden-container";

/// Selector hosts run inside a content root to enumerate focusables.
///
/// Matches the usual interactive set; `tabindex="-1"` is excluded since
/// those are only ever focused programmatically.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, input, textarea, select, a[href], [tabindex]:not([tabindex="-1"])"#;

/// Delay before the second-stage blur check, in milliseconds.
///
/// Mobile WebKit can re-focus a field in the covered layer shortly after
/// a modal opens; one synchronous blur is not always enough.
pub const BLUR_CHECK_DELAY_MS: u32 = 50;

/// CSS installed once per page.
///
/// Suppresses focus and active styling for marked elements and for
/// everything under a marked container, kills the tap highlight that
/// makes covered buttons flash under a modal, and keeps `:focus-visible`
/// outlines for keyboard users on *unmarked* elements.
pub const FOCUS_STYLESHEET: &str = r#"
* {
    -webkit-tap-highlight-color: transparent;
    -webkit-touch-callout: none;
}

button, a, input, textarea, select {
    -webkit-tap-highlight-color: transparent;
}

.scrim-focus-hidden:focus {
    outline: none !important;
    box-shadow: none !important;
}

.scrim-focus-hidden:active {
    outline: none !important;
    box-shadow: none !important;
    background-color: inherit !important;
}

.scrim-focus-hidden-container *:focus {
    outline: none !important;
    box-shadow: none !important;
}

.scrim-focus-hidden-container *:active {
    outline: none !important;
    box-shadow: none !important;
}

.scrim-focus-hidden-container button:focus,
.scrim-focus-hidden-container input:focus,
.scrim-focus-hidden-container textarea:focus,
.scrim-focus-hidden-container select:focus,
.scrim-focus-hidden-container a:focus {
    outline: none !important;
    box-shadow: none !important;
    border-color: inherit !important;
}

.scrim-focus-hidden-container button:active,
.scrim-focus-hidden-container input:active,
.scrim-focus-hidden-container textarea:active,
.scrim-focus-hidden-container select:active,
.scrim-focus-hidden-container a:active {
    outline: none !important;
    box-shadow: none !important;
    background-color: inherit !important;
    transform: none !important;
}

button:focus-visible,
input:focus-visible,
textarea:focus-visible,
select:focus-visible,
a:focus-visible {
    outline: 2px solid #007bff;
    outline-offset: 2px;
}

.scrim-focus-hidden:focus-visible,
.scrim-focus-hidden-container *:focus-visible {
    outline: none !important;
}

@media (hover: none) and (pointer: coarse) {
    .scrim-focus-hidden-container button,
    .scrim-focus-hidden-container a,
    .scrim-focus-hidden-container input,
    .scrim-focus-hidden-container textarea,
    .scrim-focus-hidden-container select {
        -webkit-tap-highlight-color: transparent !important;
    }

    .scrim-focus-hidden-container button:focus,
    .scrim-focus-hidden-container button:active {
        outline: none !important;
        box-shadow: none !important;
        opacity: 1 !important;
    }
}
"#;
