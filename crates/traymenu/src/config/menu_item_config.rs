use crate::{AppError, AppResult};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use traymenu_core::{MenuSpec, SpecAction};

/// One `[[menu]]` entry of the config file.
///
/// `action` names a command (or `"quit"`); `items` makes the entry a submenu.
/// An entry with neither is a label-only item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    /// Display text.
    pub label: String,

    /// Optional icon file shown next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,

    /// Named command run on selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Child entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItemConfig>>,
}

impl MenuItemConfig {
    /// Entry running the named command.
    pub fn command(label: &str, action: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            action: Some(action.to_string()),
            items: None,
        }
    }

    /// Label-only entry.
    pub fn label_only(label: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            action: None,
            items: None,
        }
    }

    /// Submenu entry.
    pub fn submenu(label: &str, items: Vec<MenuItemConfig>) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            action: None,
            items: Some(items),
        }
    }

    /// Convert to a core menu spec. Action names are resolved later, when the
    /// menu is built.
    #[track_caller]
    pub fn to_spec(&self) -> AppResult<MenuSpec> {
        let action = match (&self.action, &self.items) {
            (Some(_), Some(_)) => {
                return Err(AppError::ConfigError {
                    reason: format!(
                        "Menu item {:?} has both an action and sub-items",
                        self.label
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            (Some(name), None) => SpecAction::Named(name.clone()),
            (None, Some(items)) => SpecAction::Submenu(
                items
                    .iter()
                    .map(MenuItemConfig::to_spec)
                    .collect::<AppResult<Vec<_>>>()?,
            ),
            (None, None) => SpecAction::None,
        };

        let spec = MenuSpec::new(self.label.clone(), action);
        Ok(match &self.icon {
            Some(icon) => spec.with_icon(icon.clone()),
            None => spec,
        })
    }
}
