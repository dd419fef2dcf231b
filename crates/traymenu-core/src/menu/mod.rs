mod entry;
mod model;
mod spec;

pub use {
    entry::{EntryId, EntryKind, MenuEntry, MenuLeaf},
    model::{IdIndex, MenuModel, QUIT_LABEL},
    spec::{MenuSpec, NamedActions, SpecAction},
};
