//! Event dispatch state machine.
//!
//! ```text
//! Running ──quit / session ending / window destroyed──▶ ShuttingDown
//! ```
//!
//! Every event kind maps to one handler through [`EventKind::handler`]. Once
//! the session is shutting down, every event is dropped.

use crate::{CoreError, EntryId, Invocation, TrayShell, TraySession};

use tracing::{debug, error, info, instrument, warn};

/// Router state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    /// Icon present, events dispatched.
    Running,
    /// Quit initiated; no further dispatch.
    ShuttingDown,
}

/// What the host's event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    /// Keep pumping events.
    Continue,
    /// Leave the event loop.
    Exit,
}

/// Mouse interaction on the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconEventKind {
    /// Single primary click.
    LeftClick,
    /// Primary double-click.
    DoubleClick,
    /// Secondary button released.
    RightClick,
}

/// An inbound platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// The shell process relaunched and forgot every icon.
    ShellRestarted,
    /// The user session is ending.
    SessionEnding,
    /// The owning window was destroyed.
    WindowDestroyed,
    /// A context menu leaf was selected.
    MenuCommand(EntryId),
    /// A mouse interaction on the icon.
    TrayIcon(IconEventKind),
}

/// Payload-free discriminant of [`TrayEvent`], the key of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`TrayEvent::ShellRestarted`].
    ShellRestarted,
    /// See [`TrayEvent::SessionEnding`].
    SessionEnding,
    /// See [`TrayEvent::WindowDestroyed`].
    WindowDestroyed,
    /// See [`TrayEvent::MenuCommand`].
    MenuCommand,
    /// See [`TrayEvent::TrayIcon`].
    TrayIcon,
}

impl TrayEvent {
    /// The event's kind.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ShellRestarted => EventKind::ShellRestarted,
            Self::SessionEnding => EventKind::SessionEnding,
            Self::WindowDestroyed => EventKind::WindowDestroyed,
            Self::MenuCommand(_) => EventKind::MenuCommand,
            Self::TrayIcon(_) => EventKind::TrayIcon,
        }
    }
}

/// A transition handler for events arriving while running.
pub type Handler<S> = fn(&mut TraySession, &mut S, TrayEvent) -> LoopSignal;

impl EventKind {
    /// The handler for this kind of event.
    pub fn handler<S: TrayShell>(self) -> Handler<S> {
        match self {
            Self::ShellRestarted => on_shell_restarted::<S>,
            Self::SessionEnding | Self::WindowDestroyed => on_destroy::<S>,
            Self::MenuCommand => on_menu_command::<S>,
            Self::TrayIcon => on_tray_icon::<S>,
        }
    }
}

/// Routes events to handlers and owns the quit path.
pub struct EventRouter;

impl EventRouter {
    /// Dispatch one event on the calling thread.
    #[instrument(skip(session, shell))]
    pub fn dispatch<S: TrayShell>(
        session: &mut TraySession,
        shell: &mut S,
        event: TrayEvent,
    ) -> LoopSignal {
        if session.state == RouterState::ShuttingDown {
            debug!("Shutting down, event ignored");
            return LoopSignal::Exit;
        }

        let handler = event.kind().handler::<S>();
        handler(session, shell, event)
    }

    /// Quit: hook first while the icon still exists, then teardown, then exit.
    ///
    /// Runs at most once per session; later calls only repeat the exit signal.
    #[instrument(skip(session, shell))]
    pub fn quit<S: TrayShell>(session: &mut TraySession, shell: &mut S) -> LoopSignal {
        if session.state == RouterState::ShuttingDown {
            return LoopSignal::Exit;
        }
        session.state = RouterState::ShuttingDown;
        info!("Shutting down tray");

        session.registry.run_quit_hook();

        if let Err(e) = session.lifecycle.remove(shell) {
            error!(error = %e, "Failed to remove tray icon");
        }

        LoopSignal::Exit
    }

    /// Resolve and invoke the leaf named by `id`.
    pub(crate) fn execute<S: TrayShell>(
        session: &mut TraySession,
        shell: &mut S,
        id: EntryId,
    ) -> LoopSignal {
        let outcome = session
            .registry
            .resolve(id)
            .and_then(|leaf| session.registry.invoke(leaf));

        match outcome {
            Ok(Invocation::Completed) => LoopSignal::Continue,
            Ok(Invocation::Quit) => Self::quit(session, shell),
            Err(e @ CoreError::UnknownId { .. }) => {
                error!(error = %e, "Menu command for unknown id dropped");
                LoopSignal::Continue
            }
            Err(e) => {
                warn!(error = %e, "Menu action failed");
                LoopSignal::Continue
            }
        }
    }
}

fn on_shell_restarted<S: TrayShell>(
    session: &mut TraySession,
    shell: &mut S,
    _event: TrayEvent,
) -> LoopSignal {
    info!("Shell restarted, re-registering tray icon");
    if let Err(e) = session.refresh_icon(shell, true) {
        error!(error = %e, "Failed to re-register tray icon");
    }
    LoopSignal::Continue
}

fn on_destroy<S: TrayShell>(
    session: &mut TraySession,
    shell: &mut S,
    event: TrayEvent,
) -> LoopSignal {
    info!(?event, "Owning window going away");
    EventRouter::quit(session, shell)
}

fn on_menu_command<S: TrayShell>(
    session: &mut TraySession,
    shell: &mut S,
    event: TrayEvent,
) -> LoopSignal {
    match event {
        TrayEvent::MenuCommand(id) => EventRouter::execute(session, shell, id),
        _ => LoopSignal::Continue,
    }
}

fn on_tray_icon<S: TrayShell>(
    session: &mut TraySession,
    shell: &mut S,
    event: TrayEvent,
) -> LoopSignal {
    let TrayEvent::TrayIcon(kind) = event else {
        return LoopSignal::Continue;
    };

    match kind {
        IconEventKind::DoubleClick => match session.default_action {
            Some(id) => EventRouter::execute(session, shell, id),
            None => {
                debug!("Double-click with no default action");
                LoopSignal::Continue
            }
        },
        IconEventKind::RightClick => {
            if let Err(e) = shell.show_menu(&session.tree, session.default_action) {
                error!(error = %e, "Failed to show context menu");
            }
            LoopSignal::Continue
        }
        IconEventKind::LeftClick => LoopSignal::Continue,
    }
}
