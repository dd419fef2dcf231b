use crate::{
    CoreError, EntryId, IconEventKind, IconSource, LoopSignal, NotifyOp, RouterState, Tray,
    TrayEvent, TrayOptions, DEFAULT_WINDOW_CLASS,
    tests::support::{RecordingShell, ShellCall, counter, hello_sub_inner},
};

/// WHAT: Creating a tray adds the icon with the configured tooltip
/// WHY: The icon must be visible as soon as construction succeeds
#[test]
#[allow(clippy::unwrap_used)]
fn given_options_when_creating_tray_then_icon_added() {
    // Given: Options with a tooltip and no icon
    let options = TrayOptions::new(hello_sub_inner(&counter(), &counter())).with_tooltip("Demo");

    // When: Creating the tray
    let tray = Tray::new(options, RecordingShell::default()).unwrap();

    // Then: One Add with the default icon
    assert_eq!(
        tray.shell().calls,
        vec![ShellCall::Notify {
            op: NotifyOp::Add,
            icon: IconSource::Default,
            tooltip: "Demo".to_string(),
        }]
    );
    assert_eq!(tray.state(), RouterState::Running);
    assert_eq!(tray.session().window_class_name(), DEFAULT_WINDOW_CLASS);
}

/// WHAT: Updating the tooltip issues a Modify with the new text
/// WHY: The hover text must reflect the latest update
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_tray_when_updating_tooltip_then_modify_issued() {
    // Given: A running tray
    let options = TrayOptions::new(Vec::new()).with_tooltip("Before");
    let mut tray = Tray::new(options, RecordingShell::default()).unwrap();

    // When: Updating the tooltip
    tray.update_tooltip("After".to_string()).unwrap();

    // Then: Modify carrying the new text
    assert_eq!(
        tray.shell().calls.last(),
        Some(&ShellCall::Notify {
            op: NotifyOp::Modify,
            icon: IconSource::Default,
            tooltip: "After".to_string(),
        })
    );
    assert_eq!(tray.session().tooltip(), "After");
}

/// WHAT: Programmatic quit follows the user quit path
/// WHY: Host code must be able to shut the tray down cleanly
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_tray_when_quit_called_then_exit_and_icon_removed() {
    // Given: A running tray
    let mut tray = Tray::new(TrayOptions::new(Vec::new()), RecordingShell::default()).unwrap();

    // When: Quitting twice
    let first = tray.quit();
    let second = tray.quit();

    // Then: Exit both times, single delete
    assert_eq!(first, LoopSignal::Exit);
    assert_eq!(second, LoopSignal::Exit);
    assert_eq!(tray.shell().delete_count(), 1);
    assert_eq!(tray.state(), RouterState::ShuttingDown);
}

/// WHAT: Tooltip updates after shutdown do not touch the shell
/// WHY: The icon no longer exists once the tray has quit
#[test]
#[allow(clippy::unwrap_used)]
fn given_quit_tray_when_updating_tooltip_then_no_shell_call() {
    // Given: A tray that has quit
    let mut tray = Tray::new(TrayOptions::new(Vec::new()), RecordingShell::default()).unwrap();
    tray.quit();
    let calls_before = tray.shell().calls.len();

    // When: Updating the tooltip
    tray.update_tooltip("Late".to_string()).unwrap();

    // Then: No new calls
    assert_eq!(tray.shell().calls.len(), calls_before);
}

/// WHAT: A default action that is not a leaf is rejected at construction
/// WHY: Double-click must never target a container or missing entry
#[test]
fn given_container_default_when_creating_tray_then_unknown_id() {
    // Given: Default action points at the Sub container (id 2)
    let options = TrayOptions::new(hello_sub_inner(&counter(), &counter()))
        .with_default_action(EntryId::new(2));

    // When: Creating the tray
    let result = Tray::new(options, RecordingShell::default());

    // Then: UnknownId for id 2
    assert!(matches!(
        result,
        Err(CoreError::UnknownId { id, .. }) if id == EntryId::new(2)
    ));
}

/// WHAT: A shell that refuses the initial add fails construction
/// WHY: Startup must report a tray that never appeared
#[test]
fn given_refusing_shell_when_creating_tray_then_shell_error() {
    // Given: A shell that fails every notify
    let shell = RecordingShell {
        fail_notify: true,
        ..RecordingShell::default()
    };

    // When: Creating the tray
    let result = Tray::new(TrayOptions::new(Vec::new()), shell);

    // Then: Shell error
    assert!(matches!(result, Err(CoreError::Shell { .. })));
}

/// WHAT: Left clicks are ignored
/// WHY: Only double-click and right-click have meaning for the icon
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_tray_when_left_click_then_nothing_happens() {
    // Given: A running tray
    let hello = counter();
    let options = TrayOptions::new(hello_sub_inner(&hello, &counter()))
        .with_default_action(EntryId::FIRST)
        .with_window_class_name("DemoWindow");
    let mut tray = Tray::new(options, RecordingShell::default()).unwrap();

    // When: Left-clicking
    let signal = tray.handle(TrayEvent::TrayIcon(IconEventKind::LeftClick));

    // Then: Nothing ran, custom window class kept
    assert_eq!(signal, LoopSignal::Continue);
    assert_eq!(hello.get(), 0);
    assert_eq!(tray.shell().calls.len(), 1);
    assert_eq!(tray.session().window_class_name(), "DemoWindow");
}
