//! Validated navigation trees.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashSet};
use std::slice;

/// Validated sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEntry {
    /// Leaf link to a document.
    DocumentLink {
        /// Canonical document path (e.g., "getting-started/installation").
        document_id: String,
    },
    /// Named group of entries, rendered as a collapsible section.
    CategoryGroup {
        /// Display label, never empty.
        label: String,
        /// Child entries in display order, never empty.
        items: Vec<NavigationEntry>,
    },
}

impl NavigationEntry {
    /// Document id if this entry is a link.
    #[must_use]
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::DocumentLink { document_id } => Some(document_id.as_str()),
            Self::CategoryGroup { .. } => None,
        }
    }

    /// Label if this entry is a category.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::DocumentLink { .. } => None,
            Self::CategoryGroup { label, .. } => Some(label.as_str()),
        }
    }

    /// Children of a category, empty for links.
    #[must_use]
    pub fn items(&self) -> &[NavigationEntry] {
        match self {
            Self::DocumentLink { .. } => &[],
            Self::CategoryGroup { items, .. } => items,
        }
    }

    fn category_depth(&self) -> usize {
        match self {
            Self::DocumentLink { .. } => 0,
            Self::CategoryGroup { items, .. } => {
                1 + items.iter().map(Self::category_depth).max().unwrap_or(0)
            }
        }
    }
}

/// One named sidebar.
///
/// Only obtainable through [`build_tree`](crate::build_tree), so every
/// instance satisfies the category invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTree {
    name: String,
    entries: Vec<NavigationEntry>,
}

impl NavigationTree {
    pub(crate) fn new(name: String, entries: Vec<NavigationEntry>) -> Self {
        Self { name, entries }
    }

    /// Sidebar name (lookup key, e.g. "tutorialSidebar").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Document ids in display order (depth-first).
    pub fn document_ids(&self) -> DocumentIds<'_> {
        DocumentIds {
            stack: vec![self.entries.iter()],
        }
    }

    /// Ids referenced more than once, each reported once, in order of first repeat.
    #[must_use]
    pub fn duplicate_document_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.document_ids()
            .filter(|id| !seen.insert(*id) && reported.insert(*id))
            .collect()
    }

    /// Deepest category nesting. Zero when the sidebar holds only links.
    #[must_use]
    pub fn category_depth(&self) -> usize {
        self.entries
            .iter()
            .map(NavigationEntry::category_depth)
            .max()
            .unwrap_or(0)
    }
}

/// Depth-first iterator over document ids. See [`NavigationTree::document_ids`].
pub struct DocumentIds<'a> {
    stack: Vec<slice::Iter<'a, NavigationEntry>>,
}

impl<'a> Iterator for DocumentIds<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some(NavigationEntry::DocumentLink { document_id }) => {
                    return Some(document_id.as_str());
                }
                Some(NavigationEntry::CategoryGroup { items, .. }) => self.stack.push(items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// All validated sidebars of a site, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    trees: BTreeMap<String, NavigationTree>,
}

impl Sidebars {
    pub(crate) fn from_trees(trees: BTreeMap<String, NavigationTree>) -> Self {
        Self { trees }
    }

    /// Look up a sidebar by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NavigationTree> {
        self.trees.get(name)
    }

    /// Sidebar names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    /// Iterate trees in name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, NavigationTree> {
        self.trees.values()
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// True if no sidebar is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = &'a NavigationTree;
    type IntoIter = btree_map::Values<'a, String, NavigationTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.values()
    }
}
