#[allow(clippy::module_inception)]
mod config;
mod menu_item_config;
mod tray_config;

pub(crate) use {config::Config, menu_item_config::MenuItemConfig, tray_config::TrayConfig};

pub(crate) const DEFAULT_TOOLTIP: &str = "TrayMenu";

pub(crate) fn default_tooltip() -> String {
    DEFAULT_TOOLTIP.to_string()
}
