use crate::ActionRef;

use std::{
    fmt,
    num::ParseIntError,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Stable integer id of a menu entry, unique across the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u32);

impl EntryId {
    /// Id given to the first entry of a freshly built menu.
    pub const FIRST: EntryId = EntryId(0);

    /// Wrap a raw id, e.g. one read back from a platform menu event.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A built menu entry: either an invokable leaf or a submenu container.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub(crate) label: String,
    pub(crate) icon: Option<PathBuf>,
    pub(crate) kind: EntryKind,
}

/// What a [`MenuEntry`] is.
#[derive(Debug, Clone)]
pub enum EntryKind {
    /// A target the user can select.
    Leaf {
        /// Id registered in the [`IdIndex`](crate::IdIndex).
        id: EntryId,
        /// What selecting the entry does.
        action: ActionRef,
    },
    /// A container for child entries. Its id is never dispatched.
    Submenu {
        /// Id taken after the last descendant.
        id: EntryId,
        /// Child entries in display order.
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    /// Display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional icon file shown next to the label.
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// Leaf or submenu.
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// The entry's id, for leaves and containers alike.
    pub fn id(&self) -> EntryId {
        match self.kind {
            EntryKind::Leaf { id, .. } | EntryKind::Submenu { id, .. } => id,
        }
    }

    /// Children of a submenu; empty for leaves.
    pub fn children(&self) -> &[MenuEntry] {
        match &self.kind {
            EntryKind::Submenu { children, .. } => children,
            EntryKind::Leaf { .. } => &[],
        }
    }

    /// Whether this entry is an invokable leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, EntryKind::Leaf { .. })
    }
}

/// A leaf as stored in the [`IdIndex`](crate::IdIndex).
#[derive(Debug, Clone)]
pub struct MenuLeaf {
    pub(crate) label: String,
    pub(crate) icon: Option<PathBuf>,
    pub(crate) action: ActionRef,
}

impl MenuLeaf {
    /// Display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional icon file.
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// The action invoked on selection.
    pub fn action(&self) -> &ActionRef {
        &self.action
    }
}
