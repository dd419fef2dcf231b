use crate::app::quit_tray;

use std::{cell::RefCell, rc::Rc};

use traymenu_core::{
    CoreResult, EntryId, IconRequest, LoopSignal, MenuEntry, NotifyOp, RouterState, Tray,
    TrayOptions, TrayShell,
};

/// Shell that keeps the order of its calls.
#[derive(Default)]
struct LoggingShell {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl TrayShell for LoggingShell {
    fn notify_icon(&mut self, _op: NotifyOp, _request: &IconRequest<'_>) -> CoreResult<()> {
        self.log.borrow_mut().push("Notify");
        Ok(())
    }

    fn delete_icon(&mut self) -> CoreResult<()> {
        self.log.borrow_mut().push("Delete");
        Ok(())
    }

    fn show_menu(&mut self, _menu: &[MenuEntry], _default: Option<EntryId>) -> CoreResult<()> {
        Ok(())
    }
}

/// WHAT: A quit command runs the hook and removes the icon
/// WHY: Ctrl+C posts this command and must tear down like the Quit item
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_tray_when_quit_command_then_hook_then_delete() {
    // Given: A started tray whose hook logs into the shell's log
    let log = Rc::new(RefCell::new(Vec::new()));
    let hook_log = Rc::clone(&log);
    let options = TrayOptions::new(Vec::new()).with_on_quit(move || {
        hook_log.borrow_mut().push("Hook");
        Ok(())
    });
    let shell = LoggingShell {
        log: Rc::clone(&log),
    };
    let mut tray = Tray::new(options, shell).unwrap();

    // When: Handling the quit command twice
    let first = quit_tray(Some(&mut tray));
    let second = quit_tray(Some(&mut tray));

    // Then: Exit both times, teardown once, hook before delete
    assert_eq!(first, LoopSignal::Exit);
    assert_eq!(second, LoopSignal::Exit);
    assert_eq!(tray.state(), RouterState::ShuttingDown);
    assert_eq!(*log.borrow(), vec!["Notify", "Hook", "Delete"]);
}

/// WHAT: A quit command before startup just exits
/// WHY: Ctrl+C can arrive before the icon was ever added
#[test]
fn given_no_tray_when_quit_command_then_exit() {
    // Given/When: Quit with no tray
    let signal = quit_tray::<LoggingShell>(None);

    // Then: The loop is told to exit
    assert_eq!(signal, LoopSignal::Exit);
}
