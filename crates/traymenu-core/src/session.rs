//! The process-wide tray state.

use crate::{
    ActionRegistry, ActionResult, Callback, CoreError, CoreResult, EntryId, MenuEntry, MenuModel,
    MenuSpec, NamedActions, NotifyOp, RouterState, TrayLifecycle, TrayShell,
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Window class name used when none is configured.
pub const DEFAULT_WINDOW_CLASS: &str = "TrayMenu";

/// Construction parameters for a tray.
#[derive(Debug, Default)]
pub struct TrayOptions {
    /// Menu entries, before the synthetic Quit entry.
    pub menu: Vec<MenuSpec>,
    /// Callbacks referenced by [`SpecAction::Named`](crate::SpecAction::Named) entries.
    pub actions: NamedActions,
    /// Icon file; missing or unreadable files fall back to the default icon.
    pub icon_path: Option<PathBuf>,
    /// Hover text.
    pub tooltip: String,
    /// Runs on quit, before the icon is removed.
    pub on_quit: Option<Callback>,
    /// Leaf invoked on double-click. `Some(EntryId::FIRST)` is a valid choice.
    pub default_action: Option<EntryId>,
    /// Name of the owning window's class.
    pub window_class_name: Option<String>,
}

impl TrayOptions {
    /// Options with the given menu and everything else unset.
    pub fn new(menu: Vec<MenuSpec>) -> Self {
        Self {
            menu,
            ..Self::default()
        }
    }

    /// Set the named action table.
    pub fn with_actions(mut self, actions: NamedActions) -> Self {
        self.actions = actions;
        self
    }

    /// Set the icon file.
    pub fn with_icon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_path = Some(path.into());
        self
    }

    /// Set the hover text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Set the quit hook.
    pub fn with_on_quit<F>(mut self, f: F) -> Self
    where
        F: Fn() -> ActionResult + 'static,
    {
        self.on_quit = Some(Callback::new(f));
        self
    }

    /// Set the double-click action.
    pub fn with_default_action(mut self, id: EntryId) -> Self {
        self.default_action = Some(id);
        self
    }

    /// Set the window class name.
    pub fn with_window_class_name(mut self, name: impl Into<String>) -> Self {
        self.window_class_name = Some(name.into());
        self
    }

    /// The configured window class name, or [`DEFAULT_WINDOW_CLASS`].
    pub fn resolved_window_class(&self) -> &str {
        self.window_class_name
            .as_deref()
            .unwrap_or(DEFAULT_WINDOW_CLASS)
    }
}

/// Long-lived tray state, owned by the dispatch thread.
#[derive(Debug)]
pub struct TraySession {
    pub(crate) tooltip: String,
    pub(crate) icon_path: Option<PathBuf>,
    pub(crate) window_class_name: String,
    pub(crate) default_action: Option<EntryId>,
    pub(crate) tree: Vec<MenuEntry>,
    pub(crate) quit_id: EntryId,
    pub(crate) registry: ActionRegistry,
    pub(crate) lifecycle: TrayLifecycle,
    pub(crate) state: RouterState,
}

impl TraySession {
    /// Build the menu and validate the default action. Touches no platform state.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidActionKind`] for an unresolvable menu action, and
    /// [`CoreError::UnknownId`] if the default action is not a leaf.
    #[track_caller]
    #[instrument(skip(options), fields(entries = options.menu.len()))]
    pub fn new(options: TrayOptions) -> CoreResult<Self> {
        let window_class_name = options.resolved_window_class().to_string();
        let model = MenuModel::build(&options.menu, &options.actions)?;

        if let Some(id) = options
            .default_action
            .filter(|id| !model.index().contains(*id))
        {
            return Err(CoreError::UnknownId {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let (tree, index, quit_id) = model.into_parts();

        info!(
            leaves = index.len(),
            default_action = ?options.default_action,
            window_class = %window_class_name,
            "Tray session created"
        );

        Ok(Self {
            tooltip: options.tooltip,
            icon_path: options.icon_path,
            window_class_name,
            default_action: options.default_action,
            tree,
            quit_id,
            registry: ActionRegistry::new(index, options.on_quit),
            lifecycle: TrayLifecycle::new(),
            state: RouterState::Running,
        })
    }

    /// Current hover text.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Configured icon file.
    pub fn icon_path(&self) -> Option<&Path> {
        self.icon_path.as_deref()
    }

    /// Owning window's class name.
    pub fn window_class_name(&self) -> &str {
        &self.window_class_name
    }

    /// Double-click action, if any.
    pub fn default_action(&self) -> Option<EntryId> {
        self.default_action
    }

    /// Root menu entries.
    pub fn tree(&self) -> &[MenuEntry] {
        &self.tree
    }

    /// Id of the synthetic Quit entry.
    pub fn quit_id(&self) -> EntryId {
        self.quit_id
    }

    /// Id resolution and invocation.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Icon registration state.
    pub fn lifecycle(&self) -> &TrayLifecycle {
        &self.lifecycle
    }

    /// Router state.
    pub fn state(&self) -> RouterState {
        self.state
    }

    pub(crate) fn set_tooltip(&mut self, tooltip: String) {
        self.tooltip = tooltip;
    }

    /// Push icon and tooltip to the shell. `from_scratch` forces an `Add`.
    pub(crate) fn refresh_icon<S: TrayShell>(
        &mut self,
        shell: &mut S,
        from_scratch: bool,
    ) -> CoreResult<NotifyOp> {
        let icon_path = self.icon_path.as_deref();
        if from_scratch {
            self.lifecycle
                .reregister(shell, icon_path, &self.tooltip, &self.tree)
        } else {
            self.lifecycle.add(shell, icon_path, &self.tooltip, &self.tree)
        }
    }
}
