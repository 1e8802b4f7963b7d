//! Export of validated trees back into the sidebar grammar.
//!
//! The exported form is what the rendering layer consumes. It is
//! order-preserving and lossless: `export(build_tree(name, d)?) == d`
//! for every valid description `d`.

use serde::{Serialize, Serializer};

use crate::description::{CATEGORY_TYPE, CategoryDescription, EntryDescription, SidebarsDescription};
use crate::tree::{NavigationEntry, NavigationTree, Sidebars};

/// Export a tree as sidebar entries.
#[must_use]
pub fn export(tree: &NavigationTree) -> Vec<EntryDescription> {
    tree.entries().iter().map(export_entry).collect()
}

fn export_entry(entry: &NavigationEntry) -> EntryDescription {
    match entry {
        NavigationEntry::DocumentLink { document_id } => EntryDescription::Doc(document_id.clone()),
        NavigationEntry::CategoryGroup { label, items } => {
            EntryDescription::Category(CategoryDescription {
                entry_type: Some(CATEGORY_TYPE.to_owned()),
                label: label.clone(),
                items: items.iter().map(export_entry).collect(),
            })
        }
    }
}

impl Sidebars {
    /// Export every sidebar, keyed by name.
    #[must_use]
    pub fn export(&self) -> SidebarsDescription {
        self.iter()
            .map(|tree| (tree.name().to_owned(), export(tree)))
            .collect()
    }
}

impl Serialize for NavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        export(self).serialize(serializer)
    }
}

impl Serialize for Sidebars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.export().serialize(serializer)
    }
}
