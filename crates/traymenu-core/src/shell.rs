//! Platform collaborator interface.
//!
//! The core never talks to the notification area or draws menus itself. A host
//! supplies a [`TrayShell`] implementation, and every call is made from the
//! thread that dispatches events.

use crate::{CoreResult, EntryId, MenuEntry};

use std::path::PathBuf;

/// Which notification-area operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOp {
    /// Register a new icon.
    Add,
    /// Update the already registered icon.
    Modify,
}

/// Icon to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// A readable icon file.
    File(PathBuf),
    /// The platform's default application icon.
    Default,
}

/// Everything the shell needs to add or modify the icon.
#[derive(Debug, Clone, Copy)]
pub struct IconRequest<'a> {
    /// Icon to display.
    pub icon: &'a IconSource,
    /// Hover text.
    pub tooltip: &'a str,
    /// The menu tree, for backends that attach the menu to the icon.
    pub menu: &'a [MenuEntry],
}

/// Notification-area and popup-menu primitives.
pub trait TrayShell {
    /// Add or modify the tray icon.
    fn notify_icon(&mut self, op: NotifyOp, request: &IconRequest<'_>) -> CoreResult<()>;

    /// Remove the tray icon.
    fn delete_icon(&mut self) -> CoreResult<()>;

    /// Show the context menu. Selection comes back later as a menu command event.
    fn show_menu(&mut self, menu: &[MenuEntry], default_action: Option<EntryId>) -> CoreResult<()>;
}
