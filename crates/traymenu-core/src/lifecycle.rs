//! Icon add/modify/delete bookkeeping.

use crate::{CoreError, CoreResult, IconRequest, IconSource, MenuEntry, NotifyOp, TrayShell};

use std::{fs::File, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Tracks whether the icon is registered with the shell.
#[derive(Debug, Default)]
pub struct TrayLifecycle {
    added: bool,
}

impl TrayLifecycle {
    /// Fresh lifecycle; the first [`add`](Self::add) issues [`NotifyOp::Add`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an icon is currently registered.
    pub fn is_added(&self) -> bool {
        self.added
    }

    /// Show the icon: `Add` the first time, `Modify` afterwards.
    ///
    /// # Errors
    ///
    /// Propagates the shell's error. The icon is then still considered absent
    /// if it had never been added.
    #[instrument(skip(self, shell, menu))]
    pub fn add<S: TrayShell>(
        &mut self,
        shell: &mut S,
        icon_path: Option<&Path>,
        tooltip: &str,
        menu: &[MenuEntry],
    ) -> CoreResult<NotifyOp> {
        let op = if self.added {
            NotifyOp::Modify
        } else {
            NotifyOp::Add
        };
        let icon = resolve_icon(icon_path);

        shell.notify_icon(
            op,
            &IconRequest {
                icon: &icon,
                tooltip,
                menu,
            },
        )?;
        self.added = true;

        debug!(?op, ?icon, "Tray icon refreshed");
        Ok(op)
    }

    /// Register the icon from scratch, as if it had never been added.
    ///
    /// Used after the shell restarts and forgets every icon.
    #[instrument(skip(self, shell, menu))]
    pub fn reregister<S: TrayShell>(
        &mut self,
        shell: &mut S,
        icon_path: Option<&Path>,
        tooltip: &str,
        menu: &[MenuEntry],
    ) -> CoreResult<NotifyOp> {
        self.added = false;
        self.add(shell, icon_path, tooltip, menu)
    }

    /// Remove the icon if present. Returns whether a delete was issued.
    ///
    /// Safe to call repeatedly or after a failed add; those calls do nothing.
    /// After a failed delete the icon is still treated as gone.
    #[instrument(skip(self, shell))]
    pub fn remove<S: TrayShell>(&mut self, shell: &mut S) -> CoreResult<bool> {
        if !self.added {
            debug!("No tray icon to remove");
            return Ok(false);
        }

        self.added = false;
        shell.delete_icon()?;
        info!("Tray icon removed");
        Ok(true)
    }
}

/// Pick the icon to show, substituting the default for a missing file.
#[track_caller]
pub fn resolve_icon(icon_path: Option<&Path>) -> IconSource {
    let Some(path) = icon_path else {
        debug!("No icon configured, using default");
        return IconSource::Default;
    };

    if is_readable_file(path) {
        return IconSource::File(path.to_path_buf());
    }

    let error = CoreError::MissingIconFile {
        path: path.to_path_buf(),
        location: ErrorLocation::from(Location::caller()),
    };
    warn!(error = %error, "Cannot find app icon, using default");
    IconSource::Default
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}
