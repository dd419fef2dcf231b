//! Configuration management for traymenu.
//!
//! Loads and saves the TOML configuration file from the platform config
//! directory, creating a demo menu on first run.

use crate::{
    AppError, AppResult,
    config::{MenuItemConfig, TrayConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use traymenu_core::{Callback, EntryId, MenuSpec, NamedActions, TrayOptions};

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tray icon settings.
    #[serde(default)]
    pub tray: TrayConfig,
    /// Menu entries, in display order. Quit is always appended.
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tray: TrayConfig::default(),
            menu: vec![
                MenuItemConfig::command("Say Hello", "hello"),
                MenuItemConfig::label_only("Switch Icon"),
                MenuItemConfig::submenu(
                    "A sub-menu",
                    vec![
                        MenuItemConfig::command("Say Hello to Simon", "simon"),
                        MenuItemConfig::label_only("Switch Icon"),
                    ],
                ),
                MenuItemConfig::command("Remind Me Later", "remind"),
                MenuItemConfig::command("Restore Tooltip", "restore_tooltip"),
                MenuItemConfig::command("Open Config Folder", "open_config"),
            ],
        }
    }
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load configuration from a specific file.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Save configuration to a file using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Build the core tray options from this configuration.
    #[track_caller]
    pub fn to_tray_options(
        &self,
        actions: NamedActions,
        on_quit: Option<Callback>,
    ) -> AppResult<TrayOptions> {
        let menu = self
            .menu
            .iter()
            .map(MenuItemConfig::to_spec)
            .collect::<AppResult<Vec<MenuSpec>>>()?;

        Ok(TrayOptions {
            menu,
            actions,
            icon_path: self.tray.icon_path.clone(),
            tooltip: self.tray.tooltip.clone(),
            on_quit,
            default_action: self.tray.default_action.map(EntryId::new),
            window_class_name: self.tray.window_class_name.clone(),
        })
    }

    /// Directory holding the config file, created if missing.
    #[track_caller]
    pub fn config_dir() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "traymenu", "TrayMenu").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.to_path_buf())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
