//! Traymenu Core Library
//!
//! Menu model and event dispatch for a single system tray icon. Platform
//! primitives are reached through the [`TrayShell`] trait.
//!
//! # Example
//!
//! ```no_run
//! use traymenu_core::{CoreResult, MenuModel, MenuSpec, NamedActions};
//!
//! fn main() -> CoreResult<()> {
//!     let spec = vec![
//!         MenuSpec::callback("Hello", || {
//!             println!("Hello World.");
//!             Ok(())
//!         }),
//!         MenuSpec::submenu("Sub", vec![MenuSpec::label_only("Inner")]),
//!     ];
//!
//!     let model = MenuModel::build(&spec, &NamedActions::new())?;
//!
//!     // Hello, Inner and the appended Quit entry.
//!     assert_eq!(model.leaf_count(), 3);
//!     Ok(())
//! }
//! ```

mod action;
mod error;
mod lifecycle;
mod menu;
mod router;
mod session;
mod shell;
mod tray;

pub use {
    action::{ActionRef, ActionRegistry, ActionResult, Callback, Invocation, ReservedAction},
    error::{ActionError, CoreError, Result as CoreResult},
    lifecycle::{TrayLifecycle, resolve_icon},
    menu::{
        EntryId, EntryKind, IdIndex, MenuEntry, MenuLeaf, MenuModel, MenuSpec, NamedActions,
        QUIT_LABEL, SpecAction,
    },
    router::{EventKind, EventRouter, Handler, IconEventKind, LoopSignal, RouterState, TrayEvent},
    session::{DEFAULT_WINDOW_CLASS, TrayOptions, TraySession},
    shell::{IconRequest, IconSource, NotifyOp, TrayShell},
    tray::Tray,
};

#[cfg(test)]
mod tests;
