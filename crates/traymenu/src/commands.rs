//! Named commands available to config-file menus.
//!
//! Commands run on the UI thread and must return promptly. Anything slow is
//! handed to the tokio runtime, which reports back through [`TrayHandle`].

use crate::TrayHandle;

use std::{path::PathBuf, time::Duration};

use tokio::runtime::Handle;
use tracing::{error, info};
use traymenu_core::{Callback, NamedActions};

/// Delay before the `remind` command updates the tooltip.
const REMINDER_DELAY: Duration = Duration::from_secs(5);

/// Build the command table.
///
/// `tooltip` is the configured hover text, restored by `restore_tooltip`.
pub fn named_actions(
    tray: TrayHandle,
    runtime: Handle,
    config_dir: PathBuf,
    tooltip: String,
) -> NamedActions {
    let mut actions = NamedActions::new();

    actions.insert("hello", || {
        info!("Hello World.");
        Ok(())
    });

    actions.insert("simon", || {
        info!("Hello Simon.");
        Ok(())
    });

    actions.insert("open_config", move || {
        open::that(&config_dir)?;
        info!(config_dir = ?config_dir, "Opened config folder");
        Ok(())
    });

    {
        let tray = tray.clone();
        actions.insert("remind", move || {
            let tray = tray.clone();
            runtime.spawn(async move {
                tokio::time::sleep(REMINDER_DELAY).await;
                if let Err(e) = tray.update_tooltip("Reminder: you asked to be reminded") {
                    error!(error = ?e, "Failed to post reminder");
                }
            });
            info!(delay_secs = REMINDER_DELAY.as_secs(), "Reminder scheduled");
            Ok(())
        });
    }

    actions.insert("restore_tooltip", move || {
        tray.update_tooltip(tooltip.clone())?;
        Ok(())
    });

    actions
}

/// Quit through the normal path when the process gets Ctrl+C.
pub fn quit_on_ctrl_c(tray: TrayHandle, runtime: &Handle) {
    runtime.spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Cannot listen for Ctrl+C");
            return;
        }
        info!("Ctrl+C received, quitting");
        if let Err(e) = tray.quit() {
            error!(error = ?e, "Failed to request quit");
        }
    });
}

/// Hook run on quit, while the icon is still present.
pub fn on_quit() -> Callback {
    Callback::new(|| {
        info!("Bye, then.");
        Ok(())
    })
}
