use crate::EntryId;

use std::{path::PathBuf, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Error type returned by a failing menu callback or quit hook.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Tray core errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A menu entry's action is neither callable, reserved, a submenu, nor empty.
    #[error("Invalid action for menu item {label:?} {location}")]
    InvalidActionKind {
        /// Label of the offending entry.
        label: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An id that does not name any leaf of the current menu.
    #[error("Unknown menu id {id} {location}")]
    UnknownId {
        /// The id that failed to resolve.
        id: EntryId,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The configured icon path is not a readable file.
    #[error("Icon file not found or unreadable: {path:?} {location}")]
    MissingIconFile {
        /// The configured icon path.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A user callback or the quit hook returned an error.
    #[error("Action for {label:?} failed: {source} {location}")]
    CallbackFailure {
        /// Label of the entry whose action failed.
        label: String,
        /// The error raised by the callback.
        #[source]
        source: ActionError,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A platform notification-area or menu call failed.
    #[error("Shell {operation} failed: {reason} {location}")]
    Shell {
        /// The shell operation that was attempted.
        operation: &'static str,
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = StdResult<T, CoreError>;
