//! `tray-icon` backed implementation of the core's platform shell.
//!
//! Add builds a fresh `TrayIcon` with the menu attached, Modify updates icon
//! and tooltip in place, and Delete drops the icon (which removes it from the
//! notification area).
//!
//! `tray-icon` pops up the attached menu itself and has no way to mark a menu
//! item as the default (bold) entry, so the default action passed to
//! [`TrayShell::show_menu`] is only logged here. Double-click still runs it.

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{self, IconMenuItem, IsMenuItem, Menu, MenuId, MenuItem, Submenu},
};
use traymenu_core::{
    CoreError, CoreResult, EntryId, EntryKind, IconRequest, IconSource, MenuEntry, NotifyOp,
    TrayShell,
};

/// Edge length of the generated default icon.
const DEFAULT_ICON_SIZE: u32 = 32;

/// Notification-area shell using `tray-icon`. Must live on the main thread.
#[derive(Default)]
pub struct TrayIconShell {
    tray_icon: Option<TrayIcon>,
}

impl TrayIconShell {
    /// Shell with no icon registered.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrayShell for TrayIconShell {
    #[instrument(skip(self, request), fields(tooltip = request.tooltip))]
    fn notify_icon(&mut self, op: NotifyOp, request: &IconRequest<'_>) -> CoreResult<()> {
        let icon = load_tray_icon(request.icon)?;

        if let (NotifyOp::Modify, Some(tray_icon)) = (op, self.tray_icon.as_ref()) {
            tray_icon
                .set_icon(Some(icon))
                .map_err(|e| shell_error("modify", format!("Failed to update icon: {}", e)))?;
            tray_icon
                .set_tooltip(Some(request.tooltip))
                .map_err(|e| shell_error("modify", format!("Failed to update tooltip: {}", e)))?;
            debug!("Tray icon modified");
            return Ok(());
        }

        // Drop any stale icon before registering a new one.
        self.tray_icon = None;

        let menu = build_menu(request.menu)?;
        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(request.tooltip)
            .with_icon(icon)
            .with_menu(Box::new(menu))
            .with_menu_on_left_click(false)
            .build()
            .map_err(|e| shell_error("add", format!("Failed to create tray icon: {}", e)))?;

        self.tray_icon = Some(tray_icon);
        info!(?op, "Tray icon added");
        Ok(())
    }

    fn delete_icon(&mut self) -> CoreResult<()> {
        if self.tray_icon.take().is_some() {
            debug!("Tray icon dropped");
        }
        Ok(())
    }

    fn show_menu(&mut self, menu: &[MenuEntry], default_action: Option<EntryId>) -> CoreResult<()> {
        // tray-icon pops up the attached menu itself on right-click.
        debug!(
            root_entries = menu.len(),
            default_action = ?default_action,
            "Context menu shown by tray-icon"
        );
        Ok(())
    }
}

#[track_caller]
fn shell_error(operation: &'static str, reason: String) -> CoreError {
    CoreError::Shell {
        operation,
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Load the notification-area icon, falling back to the generated default
/// when the file cannot be decoded.
#[track_caller]
fn load_tray_icon(source: &IconSource) -> CoreResult<Icon> {
    if let IconSource::File(path) = source {
        match decode_rgba(path) {
            Some((rgba, width, height)) => match Icon::from_rgba(rgba, width, height) {
                Ok(icon) => return Ok(icon),
                Err(e) => warn!(path = ?path, error = %e, "Unusable app icon, using default"),
            },
            None => warn!(path = ?path, "Cannot decode app icon, using default"),
        }
    }

    let (rgba, width, height) = default_icon_rgba();
    Icon::from_rgba(rgba, width, height)
        .map_err(|e| shell_error("load icon", format!("Failed to create default icon: {}", e)))
}

fn decode_rgba(path: &Path) -> Option<(Vec<u8>, u32, u32)> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            debug!(path = ?path, error = %e, "Icon decode failed");
            return None;
        }
    };
    let rgba = img.into_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    Some((rgba.into_raw(), width, height))
}

/// A filled circle on a transparent background.
fn default_icon_rgba() -> (Vec<u8>, u32, u32) {
    let size = DEFAULT_ICON_SIZE;
    let center = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0 - 1.0;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let (dx, dy) = (x as f32 - center, y as f32 - center);
            if dx * dx + dy * dy <= radius * radius {
                rgba.extend_from_slice(&[0x2d, 0x7d, 0xd2, 0xff]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }

    (rgba, size, size)
}

/// Menu item built from one entry.
enum BuiltItem {
    Plain(MenuItem),
    WithIcon(IconMenuItem),
    Sub(Submenu),
}

impl BuiltItem {
    fn as_item(&self) -> &dyn IsMenuItem {
        match self {
            Self::Plain(item) => item,
            Self::WithIcon(item) => item,
            Self::Sub(submenu) => submenu,
        }
    }
}

/// Render the entry tree as a `tray-icon` menu. Leaf item ids are the
/// decimal entry ids so selections map straight back to the core.
#[track_caller]
fn build_menu(tree: &[MenuEntry]) -> CoreResult<Menu> {
    let menu = Menu::new();
    for entry in tree {
        let item = build_item(entry)?;
        menu.append(item.as_item()).map_err(|e| {
            shell_error(
                "build menu",
                format!("Failed to add {:?}: {}", entry.label(), e),
            )
        })?;
    }
    Ok(menu)
}

#[track_caller]
fn build_item(entry: &MenuEntry) -> CoreResult<BuiltItem> {
    match entry.kind() {
        EntryKind::Leaf { id, action } => {
            let menu_id = MenuId::new(id.to_string());
            let enabled = action.is_enabled();
            Ok(match entry.icon().and_then(load_menu_icon) {
                Some(icon) => BuiltItem::WithIcon(IconMenuItem::with_id(
                    menu_id,
                    entry.label(),
                    enabled,
                    Some(icon),
                    None,
                )),
                None => BuiltItem::Plain(MenuItem::with_id(menu_id, entry.label(), enabled, None)),
            })
        }
        EntryKind::Submenu { children, .. } => {
            if entry.icon().is_some() {
                debug!(label = entry.label(), "Submenu icons are not rendered");
            }
            let submenu = Submenu::new(entry.label(), true);
            for child in children {
                let item = build_item(child)?;
                submenu.append(item.as_item()).map_err(|e| {
                    shell_error(
                        "build menu",
                        format!("Failed to add {:?}: {}", child.label(), e),
                    )
                })?;
            }
            Ok(BuiltItem::Sub(submenu))
        }
    }
}

fn load_menu_icon(path: &Path) -> Option<menu::Icon> {
    let (rgba, width, height) = decode_rgba(path)?;
    match menu::Icon::from_rgba(rgba, width, height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!(path = ?path, error = %e, "Unusable menu icon, showing label only");
            None
        }
    }
}
