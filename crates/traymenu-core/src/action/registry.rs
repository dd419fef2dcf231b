//! Id resolution and action invocation.

use crate::{ActionRef, Callback, CoreError, CoreResult, EntryId, IdIndex, MenuLeaf, ReservedAction};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Label reported when the quit hook fails.
const QUIT_HOOK_LABEL: &str = "on-quit hook";

/// Outcome of invoking a leaf's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The action ran (or was a no-op); the tray keeps running.
    Completed,
    /// The action was the reserved quit; the caller must run the quit path.
    Quit,
}

/// Resolves ids to actions and runs them.
#[derive(Debug)]
pub struct ActionRegistry {
    index: IdIndex,
    on_quit: Option<Callback>,
}

impl ActionRegistry {
    /// Create a registry over a built index.
    pub fn new(index: IdIndex, on_quit: Option<Callback>) -> Self {
        Self { index, on_quit }
    }

    /// The underlying id index.
    pub fn index(&self) -> &IdIndex {
        &self.index
    }

    /// Look up the leaf named by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownId`] if `id` is not a leaf of the menu.
    #[track_caller]
    pub fn resolve(&self, id: EntryId) -> CoreResult<&MenuLeaf> {
        self.index.get(id).ok_or_else(|| CoreError::UnknownId {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Run a leaf's action synchronously.
    ///
    /// The reserved quit is not performed here; it is reported as
    /// [`Invocation::Quit`] so the router can order hook, teardown and exit.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CallbackFailure`] if the callback fails.
    #[track_caller]
    #[instrument(skip(self, leaf), fields(label = %leaf.label()))]
    pub fn invoke(&self, leaf: &MenuLeaf) -> CoreResult<Invocation> {
        match leaf.action() {
            ActionRef::None => {
                debug!("Label-only entry selected");
                Ok(Invocation::Completed)
            }
            ActionRef::Callback(callback) => {
                callback.call().map_err(|source| CoreError::CallbackFailure {
                    label: leaf.label().to_string(),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?;
                debug!("Menu action completed");
                Ok(Invocation::Completed)
            }
            ActionRef::Reserved(ReservedAction::Quit) => {
                info!("Quit selected");
                Ok(Invocation::Quit)
            }
        }
    }

    /// Run the optional quit hook. Failures are logged and not retried.
    #[track_caller]
    pub fn run_quit_hook(&self) {
        let Some(hook) = &self.on_quit else {
            return;
        };

        if let Err(source) = hook.call() {
            let error = CoreError::CallbackFailure {
                label: QUIT_HOOK_LABEL.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            };
            warn!(error = %error, "Quit hook failed, continuing teardown");
        }
    }
}
