mod action_ref;
mod registry;

pub use {
    action_ref::{ActionRef, ActionResult, Callback, ReservedAction},
    registry::{ActionRegistry, Invocation},
};
