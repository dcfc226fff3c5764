#![forbid(unsafe_code)]

//! Error types for stack mutations.

use std::fmt;

use crate::id::ModalId;

/// Why a push was rejected.
///
/// Rejections are clean: the stack is untouched and the request's close hook
/// has not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    /// A layer with this id is already open.
    DuplicateId(ModalId),
    /// The declared parent is not currently open.
    UnknownParent {
        /// Id the caller tried to open.
        id: ModalId,
        /// Parent that was named but not found.
        parent: ModalId,
    },
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::DuplicateId(id) => {
                write!(f, "modal '{id}' is already open")
            }
            PushError::UnknownParent { id, parent } => {
                write!(f, "modal '{id}' names parent '{parent}', which is not open")
            }
        }
    }
}

impl std::error::Error for PushError {}
