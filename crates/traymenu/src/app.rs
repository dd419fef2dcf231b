use crate::{
    AppError, AppResult, TrayCommand, TrayHandle, TrayIconShell, commands, config::Config,
};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder},
};
use tokio::runtime::Handle;
use tracing::{debug, error, info, instrument, warn};
use traymenu_core::{LoopSignal, Tray, TrayEvent, TrayShell};

/// Main application state.
///
/// Lives on the main thread inside the event loop closure; the `Tray` it owns
/// is created on `StartCause::Init` because some platforms require the event
/// loop to be running before a tray icon can be registered.
pub struct App {
    pub(crate) config: Config,
    pub(crate) config_dir: PathBuf,
    pub(crate) tray_handle: TrayHandle,
    pub(crate) runtime: Handle,
    pub(crate) tray: Option<Tray<TrayIconShell>>,
}

impl App {
    /// Handle one event-loop event and report whether to keep running.
    pub(crate) fn on_event(&mut self, event: Event<'_, TrayCommand>) -> AppResult<LoopSignal> {
        match event {
            Event::NewEvents(StartCause::Init) => {
                self.start()?;
                Ok(LoopSignal::Continue)
            }
            Event::UserEvent(command) => Ok(self.handle_command(command)),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => Ok(self.dispatch(TrayEvent::SessionEnding)),
            Event::WindowEvent {
                event: WindowEvent::Destroyed,
                ..
            } => Ok(self.dispatch(TrayEvent::WindowDestroyed)),
            _ => Ok(LoopSignal::Continue),
        }
    }

    /// Build the menu and register the tray icon.
    #[instrument(skip(self))]
    fn start(&mut self) -> AppResult<()> {
        let actions = commands::named_actions(
            self.tray_handle.clone(),
            self.runtime.clone(),
            self.config_dir.clone(),
            self.config.tray.tooltip.clone(),
        );
        let options = self
            .config
            .to_tray_options(actions, Some(commands::on_quit()))?;

        let tray = Tray::new(options, TrayIconShell::new())?;

        #[cfg(target_os = "macos")]
        unsafe {
            use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
            CFRunLoopWakeUp(CFRunLoopGetMain());
        }

        self.tray = Some(tray);
        info!("TrayMenu started");
        Ok(())
    }

    #[instrument(skip(self))]
    fn handle_command(&mut self, command: TrayCommand) -> LoopSignal {
        match command {
            TrayCommand::Event(event) => self.dispatch(event),
            TrayCommand::UpdateTooltip(text) => {
                let Some(tray) = self.tray.as_mut() else {
                    warn!("Tooltip update before tray started, dropped");
                    return LoopSignal::Continue;
                };
                if let Err(e) = tray.update_tooltip(text) {
                    error!(error = ?e, "Failed to update tooltip");
                }
                LoopSignal::Continue
            }
            TrayCommand::Quit => quit_tray(self.tray.as_mut()),
        }
    }

    fn dispatch(&mut self, event: TrayEvent) -> LoopSignal {
        match self.tray.as_mut() {
            Some(tray) => tray.handle(event),
            None => LoopSignal::Continue,
        }
    }
}

/// Run a requested quit. Before the tray exists there is nothing to tear down.
pub(crate) fn quit_tray<S: TrayShell>(tray: Option<&mut Tray<S>>) -> LoopSignal {
    match tray {
        Some(tray) => tray.quit(),
        None => {
            debug!("Quit requested before tray started");
            LoopSignal::Exit
        }
    }
}

/// Create the hidden window that owns the tray icon.
#[track_caller]
pub(crate) fn create_owner_window(
    target: &EventLoopWindowTarget<TrayCommand>,
    title: &str,
) -> AppResult<Window> {
    WindowBuilder::new()
        .with_title(title)
        .with_visible(false)
        .build(target)
        .map_err(|e| AppError::WindowError {
            reason: format!("Failed to create owner window: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}
