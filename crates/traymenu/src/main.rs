//! TrayMenu: a configurable system tray icon with a nested context menu.

mod app;
mod commands;
mod config;
mod error;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_handle;
mod tray_icon_shell;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    tray_command::TrayCommand,
    tray_handle::TrayHandle,
    tray_icon_shell::TrayIconShell,
};

use crate::config::Config;

use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tray_icon::{TrayIconEvent, menu::MenuEvent};
use traymenu_core::{DEFAULT_WINDOW_CLASS, LoopSignal};

/// Log directives used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "traymenu=debug,traymenu_core=debug";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let config_dir = match Config::config_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to resolve config directory: {:?}", e);
            std::process::exit(1);
        }
    };

    // Background work handed off by menu commands runs here, never on the UI thread.
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_handle = TrayHandle::new(event_loop.create_proxy());

    // Hidden owner window; closing or destroying it ends the tray session.
    let window_title = config
        .tray
        .window_class_name
        .clone()
        .unwrap_or_else(|| DEFAULT_WINDOW_CLASS.to_string());
    let window = match app::create_owner_window(&event_loop, &window_title) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create window: {:?}", e);
            std::process::exit(1);
        }
    };

    // tray-icon delivers events on its own channel; forward them into the
    // event loop so the tray is only touched on this thread.
    {
        let tray_handle = tray_handle.clone();
        TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
            let Some(command) = TrayCommand::from_icon_event(&event) else {
                return;
            };
            if let Err(e) = tray_handle.send(command) {
                error!(error = ?e, "Failed to forward tray icon event");
            }
        }));
    }
    {
        let tray_handle = tray_handle.clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            match TrayCommand::from_menu_event(&event) {
                Some(command) => {
                    if let Err(e) = tray_handle.send(command) {
                        error!(error = ?e, "Failed to forward menu event");
                    }
                }
                None => error!(id = ?event.id, "Menu event without an entry id"),
            }
        }));
    }

    commands::quit_on_ctrl_c(tray_handle.clone(), runtime.handle());

    let mut app = App {
        config,
        config_dir,
        tray_handle,
        runtime: runtime.handle().clone(),
        tray: None,
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match app.on_event(event) {
            Ok(LoopSignal::Continue) => {}
            Ok(LoopSignal::Exit) => {
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            Err(e) => {
                error!("Failed to start tray: {:?}", e);
                *control_flow = ControlFlow::ExitWithCode(1);
            }
        }

        // Keep the window and runtime alive in the closure for the app's lifetime.
        let _ = (&window, &runtime);
    });
}
