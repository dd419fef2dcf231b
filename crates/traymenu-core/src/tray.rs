use crate::{
    CoreResult, EventRouter, LoopSignal, RouterState, TrayEvent, TrayOptions, TrayShell,
    TraySession,
};

use tracing::{debug, info, instrument};

/// A tray icon with its menu, driven by a host event loop.
///
/// The host forwards platform events to [`handle`](Self::handle) and leaves its
/// loop once [`LoopSignal::Exit`] is returned.
pub struct Tray<S: TrayShell> {
    session: TraySession,
    shell: S,
}

impl<S: TrayShell> Tray<S> {
    /// Build the session and add the icon to the notification area.
    ///
    /// # Errors
    ///
    /// Fails on an invalid menu, an unknown default action, or if the shell
    /// rejects the initial add.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(options: TrayOptions, mut shell: S) -> CoreResult<Self> {
        let mut session = TraySession::new(options)?;
        session.refresh_icon(&mut shell, false)?;

        info!("System tray icon initialized");

        Ok(Self { session, shell })
    }

    /// Dispatch one platform event.
    pub fn handle(&mut self, event: TrayEvent) -> LoopSignal {
        EventRouter::dispatch(&mut self.session, &mut self.shell, event)
    }

    /// Replace the hover text and refresh the icon.
    ///
    /// # Errors
    ///
    /// Propagates the shell's error from the modify call.
    #[instrument(skip(self))]
    pub fn update_tooltip(&mut self, text: String) -> CoreResult<()> {
        self.session.set_tooltip(text);

        if self.session.state() == RouterState::ShuttingDown {
            debug!("Shutting down, tooltip stored without refresh");
            return Ok(());
        }

        self.session.refresh_icon(&mut self.shell, false)?;
        Ok(())
    }

    /// Trigger the same path as selecting Quit.
    pub fn quit(&mut self) -> LoopSignal {
        EventRouter::quit(&mut self.session, &mut self.shell)
    }

    /// Router state.
    pub fn state(&self) -> RouterState {
        self.session.state()
    }

    /// The session.
    pub fn session(&self) -> &TraySession {
        &self.session
    }

    /// The platform shell.
    pub fn shell(&self) -> &S {
        &self.shell
    }
}
