#![forbid(unsafe_code)]

//! Caller-chosen modal identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Identifier for one modal layer.
///
/// Ids are chosen by the caller (typically mirroring a DOM id or a route
/// segment) and must be unique among *currently open* layers. Reusing an id
/// after its layer closes is fine; opening two layers with the same id at
/// once is rejected by the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(String);

impl ModalId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ModalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ModalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModalId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
