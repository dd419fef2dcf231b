use crate::config::default_tooltip;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tray icon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Icon file shown in the notification area (None = platform default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<PathBuf>,

    /// Hover text.
    #[serde(default = "default_tooltip")]
    pub tooltip: String,

    /// Title of the hidden owner window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_class_name: Option<String>,

    /// Menu id invoked on double-click. 0 is the first leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<u32>,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            icon_path: None,
            tooltip: default_tooltip(),
            window_class_name: None,
            default_action: None,
        }
    }
}
