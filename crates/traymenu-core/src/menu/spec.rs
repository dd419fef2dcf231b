use crate::{ActionRef, ActionResult, Callback, ReservedAction};

use std::{collections::HashMap, path::PathBuf};

/// One caller-supplied menu entry, before ids are assigned.
#[derive(Debug, Clone)]
pub struct MenuSpec {
    /// Display text.
    pub label: String,
    /// Optional icon file shown next to the label.
    pub icon: Option<PathBuf>,
    /// What the entry does, or its children.
    pub action: SpecAction,
}

/// The action slot of a [`MenuSpec`].
#[derive(Debug, Clone)]
pub enum SpecAction {
    /// Label-only entry.
    None,
    /// Call a user function.
    Callback(Callback),
    /// A system action handled by the tray itself.
    Reserved(ReservedAction),
    /// A nested submenu.
    Submenu(Vec<MenuSpec>),
    /// An action referenced by name, resolved against [`NamedActions`] at build time.
    Named(String),
}

impl MenuSpec {
    /// Create an entry with the given action and no icon.
    pub fn new(label: impl Into<String>, action: SpecAction) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action,
        }
    }

    /// Label-only entry.
    pub fn label_only(label: impl Into<String>) -> Self {
        Self::new(label, SpecAction::None)
    }

    /// Entry that calls `f` when selected.
    pub fn callback<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> ActionResult + 'static,
    {
        Self::new(label, SpecAction::Callback(Callback::new(f)))
    }

    /// Submenu containing `children`.
    pub fn submenu(label: impl Into<String>, children: Vec<MenuSpec>) -> Self {
        Self::new(label, SpecAction::Submenu(children))
    }

    /// Entry whose action is looked up by name.
    pub fn named(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(label, SpecAction::Named(name.into()))
    }

    /// Attach an icon file.
    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Callbacks addressable by name from untyped menu sources such as config files.
#[derive(Debug, Clone, Default)]
pub struct NamedActions {
    actions: HashMap<String, Callback>,
}

impl NamedActions {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` under `name`, replacing any previous registration.
    pub fn insert<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn() -> ActionResult + 'static,
    {
        self.actions.insert(name.into(), Callback::new(f));
        self
    }

    /// Resolve a name: reserved names first, then registered callbacks.
    pub(crate) fn resolve(&self, name: &str) -> Option<ActionRef> {
        if let Some(reserved) = ReservedAction::from_name(name) {
            return Some(ActionRef::Reserved(reserved));
        }
        self.actions.get(name).cloned().map(ActionRef::Callback)
    }
}
