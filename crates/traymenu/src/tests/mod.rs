mod app;
mod tray_command;
