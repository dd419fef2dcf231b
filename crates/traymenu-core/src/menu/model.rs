//! Flattening of nested menu specifications into an id-addressable tree.
//!
//! Ids live in one namespace for the whole tree. Within a level, entries are
//! numbered left to right; a submenu's descendants are numbered before the
//! submenu itself, which takes the id following its last descendant. Only
//! leaves are registered in the [`IdIndex`].

use crate::{
    ActionRef, CoreError, CoreResult, EntryId, EntryKind, MenuEntry, MenuLeaf, MenuSpec,
    NamedActions, ReservedAction, SpecAction,
};

use std::{collections::HashMap, iter, panic::Location};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Label of the entry appended to every menu.
pub const QUIT_LABEL: &str = "Quit";

/// Lookup from leaf id to the leaf it names.
#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    leaves: HashMap<EntryId, MenuLeaf>,
}

impl IdIndex {
    /// Index every leaf of `tree`, recursively.
    pub fn from_tree(tree: &[MenuEntry]) -> Self {
        let mut leaves = HashMap::new();
        let mut stack: Vec<&MenuEntry> = tree.iter().collect();

        while let Some(entry) = stack.pop() {
            match &entry.kind {
                EntryKind::Leaf { id, action } => {
                    leaves.insert(
                        *id,
                        MenuLeaf {
                            label: entry.label.clone(),
                            icon: entry.icon.clone(),
                            action: action.clone(),
                        },
                    );
                }
                EntryKind::Submenu { children, .. } => stack.extend(children),
            }
        }

        Self { leaves }
    }

    /// Leaf named by `id`.
    pub fn get(&self, id: EntryId) -> Option<&MenuLeaf> {
        self.leaves.get(&id)
    }

    /// Whether `id` names a leaf.
    pub fn contains(&self, id: EntryId) -> bool {
        self.leaves.contains_key(&id)
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Whether the index is empty. Never true for a built model.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// All leaf ids in ascending order.
    pub fn ids(&self) -> Vec<EntryId> {
        let mut ids: Vec<EntryId> = self.leaves.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// The built menu: immutable tree plus its id index.
#[derive(Debug, Clone)]
pub struct MenuModel {
    tree: Vec<MenuEntry>,
    index: IdIndex,
    quit_id: EntryId,
}

impl MenuModel {
    /// Build a model from `spec`, appending the synthetic Quit entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidActionKind`] naming the first entry whose
    /// named action cannot be resolved. No model is produced in that case.
    #[track_caller]
    #[instrument(skip_all, fields(entries = spec.len()))]
    pub fn build(spec: &[MenuSpec], actions: &NamedActions) -> CoreResult<Self> {
        let quit = MenuSpec::new(QUIT_LABEL, SpecAction::Reserved(ReservedAction::Quit));
        let (tree, next_id) =
            build_level(spec.iter().chain(iter::once(&quit)), EntryId::FIRST, actions)?;

        let quit_id = tree.last().map(MenuEntry::id).unwrap_or(EntryId::FIRST);
        let index = IdIndex::from_tree(&tree);

        debug!(
            leaves = index.len(),
            next_id = %next_id,
            quit_id = %quit_id,
            "Menu model built"
        );

        Ok(Self {
            tree,
            index,
            quit_id,
        })
    }

    /// Root entries in display order.
    pub fn tree(&self) -> &[MenuEntry] {
        &self.tree
    }

    /// The id index.
    pub fn index(&self) -> &IdIndex {
        &self.index
    }

    /// Leaf named by `id`.
    pub fn leaf(&self, id: EntryId) -> Option<&MenuLeaf> {
        self.index.get(id)
    }

    /// Id of the synthetic Quit entry.
    pub fn quit_id(&self) -> EntryId {
        self.quit_id
    }

    /// Number of leaves, including Quit.
    pub fn leaf_count(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn into_parts(self) -> (Vec<MenuEntry>, IdIndex, EntryId) {
        (self.tree, self.index, self.quit_id)
    }
}

/// Build one level, returning its entries and the next unused id.
#[track_caller]
fn build_level<'a, I>(
    specs: I,
    first_id: EntryId,
    actions: &NamedActions,
) -> CoreResult<(Vec<MenuEntry>, EntryId)>
where
    I: IntoIterator<Item = &'a MenuSpec>,
{
    let mut entries = Vec::new();
    let mut next_id = first_id;

    for spec in specs {
        let kind = match &spec.action {
            SpecAction::Submenu(children) => {
                let (children, after_children) = build_level(children, next_id, actions)?;
                next_id = after_children;
                EntryKind::Submenu {
                    id: next_id,
                    children,
                }
            }
            other => EntryKind::Leaf {
                id: next_id,
                action: leaf_action(&spec.label, other, actions)?,
            },
        };

        entries.push(MenuEntry {
            label: spec.label.clone(),
            icon: spec.icon.clone(),
            kind,
        });
        next_id = next_id.next();
    }

    Ok((entries, next_id))
}

#[track_caller]
fn leaf_action(label: &str, action: &SpecAction, actions: &NamedActions) -> CoreResult<ActionRef> {
    match action {
        SpecAction::None => Ok(ActionRef::None),
        SpecAction::Callback(callback) => Ok(ActionRef::Callback(callback.clone())),
        SpecAction::Reserved(reserved) => Ok(ActionRef::Reserved(*reserved)),
        SpecAction::Named(name) => {
            actions
                .resolve(name)
                .ok_or_else(|| CoreError::InvalidActionKind {
                    label: label.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
        }
        SpecAction::Submenu(_) => Err(CoreError::InvalidActionKind {
            label: label.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
