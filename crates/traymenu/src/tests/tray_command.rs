use crate::{TrayCommand, tray_command::entry_id};

use tray_icon::{
    MouseButton, MouseButtonState, Rect, TrayIconEvent, TrayIconId,
    dpi::PhysicalPosition,
    menu::{MenuEvent, MenuId},
};
use traymenu_core::{EntryId, IconEventKind, TrayEvent};

fn click(button: MouseButton, button_state: MouseButtonState) -> TrayIconEvent {
    TrayIconEvent::Click {
        id: TrayIconId::new("tray"),
        position: PhysicalPosition::new(0.0, 0.0),
        rect: Rect::default(),
        button,
        button_state,
    }
}

fn icon_kind(event: &TrayIconEvent) -> Option<IconEventKind> {
    match TrayCommand::from_icon_event(event) {
        Some(TrayCommand::Event(TrayEvent::TrayIcon(kind))) => Some(kind),
        _ => None,
    }
}

/// WHAT: Decimal menu item ids parse back to entry ids
/// WHY: Leaves are registered with their entry id as the menu item id
#[test]
fn given_decimal_menu_id_when_parsing_then_entry_id_returned() {
    // Given: The id a leaf with entry id 3 is registered under
    let id = MenuId::new("3");

    // When: Parsing it
    let parsed = entry_id(&id);

    // Then: The entry id round-trips
    assert_eq!(parsed, Some(EntryId::new(3)));
}

/// WHAT: Ids that are not unsigned integers are not entry ids
/// WHY: Only leaves emit menu events, and leaves always carry a decimal id
#[test]
fn given_non_numeric_menu_id_when_parsing_then_none() {
    // Given: Ids that were never produced from an entry id
    let named = MenuId::new("about");
    let negative = MenuId::new("-1");

    // When/Then: Neither parses
    assert_eq!(entry_id(&named), None);
    assert_eq!(entry_id(&negative), None);
}

/// WHAT: A menu selection becomes a MenuCommand event
/// WHY: The router only sees core events, never tray-icon types
#[test]
fn given_menu_event_when_translating_then_menu_command_event() {
    // Given: A selection of the item with id 0
    let event = MenuEvent {
        id: MenuId::new("0"),
    };

    // When: Translating it
    let command = TrayCommand::from_menu_event(&event);

    // Then: It targets entry 0
    assert_eq!(
        command,
        Some(TrayCommand::Event(TrayEvent::MenuCommand(EntryId::new(0))))
    );
}

/// WHAT: Selections with foreign ids are dropped
/// WHY: Forwarding them would report UnknownId for every submenu click
#[test]
fn given_menu_event_with_foreign_id_when_translating_then_dropped() {
    // Given: A selection with a non-entry id
    let event = MenuEvent {
        id: MenuId::new("about"),
    };

    // When/Then: No command is produced
    assert_eq!(TrayCommand::from_menu_event(&event), None);
}

/// WHAT: Left double-click maps to DoubleClick
/// WHY: Double-click runs the default action
#[test]
fn given_left_double_click_when_translating_then_double_click() {
    // Given: A left double-click on the icon
    let event = TrayIconEvent::DoubleClick {
        id: TrayIconId::new("tray"),
        position: PhysicalPosition::new(0.0, 0.0),
        rect: Rect::default(),
        button: MouseButton::Left,
    };

    // When/Then: It becomes a DoubleClick event
    assert_eq!(icon_kind(&event), Some(IconEventKind::DoubleClick));
}

/// WHAT: Button releases map to single clicks by button
/// WHY: Right release shows the menu, left release does nothing
#[test]
fn given_button_release_when_translating_then_click_by_button() {
    // Given: Left and right releases
    let left = click(MouseButton::Left, MouseButtonState::Up);
    let right = click(MouseButton::Right, MouseButtonState::Up);

    // When/Then: Each maps to its click kind
    assert_eq!(icon_kind(&left), Some(IconEventKind::LeftClick));
    assert_eq!(icon_kind(&right), Some(IconEventKind::RightClick));
}

/// WHAT: Button presses and hover events are dropped
/// WHY: Only releases count as clicks, and hovering must not reach the router
#[test]
fn given_press_or_hover_when_translating_then_dropped() {
    // Given: A right press and a pointer entering the icon
    let press = click(MouseButton::Right, MouseButtonState::Down);
    let enter = TrayIconEvent::Enter {
        id: TrayIconId::new("tray"),
        position: PhysicalPosition::new(0.0, 0.0),
        rect: Rect::default(),
    };

    // When/Then: Neither produces a command
    assert_eq!(TrayCommand::from_icon_event(&press), None);
    assert_eq!(TrayCommand::from_icon_event(&enter), None);
}
