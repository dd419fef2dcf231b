use tray_icon::{
    MouseButton, MouseButtonState, TrayIconEvent,
    menu::{MenuEvent, MenuId},
};
use traymenu_core::{EntryId, IconEventKind, TrayEvent};

/// Commands delivered to the main UI thread through the event loop.
///
/// The main thread owns the `Tray` (because `TrayIcon` is `!Send`), so
/// platform events, tooltip updates and quit requests all flow through this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayCommand {
    /// A platform event for the tray router.
    Event(TrayEvent),
    /// Replace the hover text.
    UpdateTooltip(String),
    /// Shut down the application. The main thread will exit the event loop.
    Quit,
}

impl TrayCommand {
    /// Translate a context menu selection.
    pub fn from_menu_event(event: &MenuEvent) -> Option<Self> {
        entry_id(&event.id).map(|id| Self::Event(TrayEvent::MenuCommand(id)))
    }

    /// Translate a mouse event on the icon. Hover events are dropped.
    pub fn from_icon_event(event: &TrayIconEvent) -> Option<Self> {
        let kind = match event {
            TrayIconEvent::DoubleClick {
                button: MouseButton::Left,
                ..
            } => IconEventKind::DoubleClick,
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => IconEventKind::LeftClick,
            TrayIconEvent::Click {
                button: MouseButton::Right,
                button_state: MouseButtonState::Up,
                ..
            } => IconEventKind::RightClick,
            _ => return None,
        };
        Some(Self::Event(TrayEvent::TrayIcon(kind)))
    }
}

/// Parse the entry id encoded in a menu item id.
///
/// Leaves are created with their decimal entry id. Submenus keep the id the
/// menu library generates, which may also be numeric, but submenus never emit
/// menu events, so only leaf ids reach this function. Non-numeric ids yield
/// `None`.
pub fn entry_id(id: &MenuId) -> Option<EntryId> {
    id.0.parse().ok()
}
