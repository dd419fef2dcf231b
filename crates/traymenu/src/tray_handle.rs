use crate::{AppError, AppResult, TrayCommand};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tracing::debug;

/// Cloneable, thread-safe handle for driving the tray from outside the UI thread.
///
/// Every call posts a [`TrayCommand`]; the tray itself is only touched on the
/// event loop thread.
#[derive(Clone)]
pub struct TrayHandle {
    proxy: EventLoopProxy<TrayCommand>,
}

impl TrayHandle {
    /// Wrap an event loop proxy.
    pub fn new(proxy: EventLoopProxy<TrayCommand>) -> Self {
        Self { proxy }
    }

    /// Replace the hover text and refresh the icon.
    #[track_caller]
    pub fn update_tooltip(&self, text: impl Into<String>) -> AppResult<()> {
        self.send(TrayCommand::UpdateTooltip(text.into()))
    }

    /// Run the quit path: hook, icon removal, event loop exit.
    #[track_caller]
    pub fn quit(&self) -> AppResult<()> {
        self.send(TrayCommand::Quit)
    }

    /// Post any command to the event loop.
    #[track_caller]
    pub fn send(&self, command: TrayCommand) -> AppResult<()> {
        debug!(?command, "Posting tray command");
        self.proxy
            .send_event(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Event loop closed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
