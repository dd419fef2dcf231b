mod support;
mod tray;
