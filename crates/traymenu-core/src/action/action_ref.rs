use crate::ActionError;

use std::{fmt, rc::Rc};

/// Return type of menu callbacks and the quit hook.
pub type ActionResult = Result<(), ActionError>;

/// Shared handle to a caller-supplied function.
///
/// Callbacks run on the dispatch thread only, so they need not be `Send`.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn() -> ActionResult>);

impl Callback {
    /// Wrap a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> ActionResult + 'static,
    {
        Self(Rc::new(f))
    }

    /// Run the function on the calling thread.
    pub fn call(&self) -> ActionResult {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// System actions handled by the tray itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedAction {
    /// Run the quit hook, remove the icon and stop the event loop.
    Quit,
}

impl ReservedAction {
    /// Parse the name used for this action in untyped menu sources.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// What a leaf does when selected.
#[derive(Debug, Clone)]
pub enum ActionRef {
    /// Label-only entry, selecting it does nothing.
    None,
    /// A caller-supplied function.
    Callback(Callback),
    /// A system action.
    Reserved(ReservedAction),
}

impl ActionRef {
    /// Whether selecting the entry has any effect.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}
