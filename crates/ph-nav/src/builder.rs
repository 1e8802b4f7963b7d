//! Sidebar validation.
//!
//! Turns a [`SidebarsDescription`] into immutable [`NavigationTree`]s.
//! Structure is kept exactly as described: no reordering, no trimming.

use std::collections::BTreeMap;

use crate::description::{CATEGORY_TYPE, CategoryDescription, EntryDescription, SidebarsDescription};
use crate::tree::{NavigationEntry, NavigationTree, Sidebars};
use crate::ConfigurationError;

/// Options controlling sidebar validation.
#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Reject document ids referenced more than once in a sidebar.
    ///
    /// When `false`, duplicates are accepted and logged as warnings.
    pub strict_ids: bool,
}

/// Build one sidebar with default options.
///
/// # Errors
///
/// Returns [`ConfigurationError`] on the first structural violation.
pub fn build_tree(
    name: &str,
    description: &[EntryDescription],
) -> Result<NavigationTree, ConfigurationError> {
    build_tree_with(name, description, &BuildOptions::default())
}

/// Build one sidebar.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if a category is empty or unlabeled, an
/// object entry is not a category, a document id is empty, or (with
/// [`BuildOptions::strict_ids`]) a document id repeats.
pub fn build_tree_with(
    name: &str,
    description: &[EntryDescription],
    options: &BuildOptions,
) -> Result<NavigationTree, ConfigurationError> {
    if name.trim().is_empty() {
        return Err(ConfigurationError::EmptySidebarName);
    }

    let entries = build_entries(description, name)?;
    let tree = NavigationTree::new(name.to_owned(), entries);

    let duplicates = tree.duplicate_document_ids();
    if let Some(first) = duplicates.first() {
        if options.strict_ids {
            return Err(ConfigurationError::DuplicateDocumentId {
                sidebar: name.to_owned(),
                document_id: (*first).to_owned(),
            });
        }
        for document_id in &duplicates {
            tracing::warn!(sidebar = name, document_id, "Document referenced more than once");
        }
    }

    tracing::debug!(
        sidebar = name,
        entries = tree.entries().len(),
        documents = tree.document_ids().count(),
        "Built sidebar"
    );

    Ok(tree)
}

/// Build every sidebar of a description. Fails on the first invalid sidebar.
///
/// # Errors
///
/// Returns the first [`ConfigurationError`] encountered.
pub fn build_sidebars(
    description: &SidebarsDescription,
    options: &BuildOptions,
) -> Result<Sidebars, ConfigurationError> {
    let trees = description
        .iter()
        .map(|(name, entries)| Ok((name.clone(), build_tree_with(name, entries, options)?)))
        .collect::<Result<BTreeMap<_, _>, ConfigurationError>>()?;

    tracing::debug!(sidebars = trees.len(), "Built sidebars");

    Ok(Sidebars::from_trees(trees))
}

fn build_entries(
    items: &[EntryDescription],
    location: &str,
) -> Result<Vec<NavigationEntry>, ConfigurationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| build_entry(item, format!("{location}[{index}]")))
        .collect()
}

fn build_entry(
    item: &EntryDescription,
    location: String,
) -> Result<NavigationEntry, ConfigurationError> {
    match item {
        EntryDescription::Doc(document_id) => {
            if document_id.trim().is_empty() {
                return Err(ConfigurationError::EmptyDocumentId { location });
            }
            Ok(NavigationEntry::DocumentLink {
                document_id: document_id.clone(),
            })
        }
        EntryDescription::Category(category) => build_category(category, location),
    }
}

fn build_category(
    category: &CategoryDescription,
    location: String,
) -> Result<NavigationEntry, ConfigurationError> {
    if category.entry_type.as_deref() != Some(CATEGORY_TYPE) {
        return Err(ConfigurationError::UnknownEntryType {
            location,
            found: category.entry_type.clone(),
        });
    }
    if category.label.trim().is_empty() {
        return Err(ConfigurationError::EmptyLabel { location });
    }
    if category.items.is_empty() {
        return Err(ConfigurationError::EmptyCategory {
            location,
            label: category.label.clone(),
        });
    }

    let items = build_entries(&category.items, &format!("{location}.items"))?;

    Ok(NavigationEntry::CategoryGroup {
        label: category.label.clone(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn docs(ids: &[&str]) -> Vec<EntryDescription> {
        ids.iter().map(|id| EntryDescription::doc(*id)).collect()
    }

    #[test]
    fn test_getting_started_category_keeps_three_links_in_order() {
        let description = vec![EntryDescription::category(
            "Getting Started",
            docs(&["installation", "quickstart", "configuration"]),
        )];

        let tree = build_tree("tutorialSidebar", &description).unwrap();

        assert_eq!(tree.entries().len(), 1);
        let NavigationEntry::CategoryGroup { label, items } = &tree.entries()[0] else {
            panic!("expected category");
        };
        assert_eq!(label, "Getting Started");
        let ids: Vec<_> = items.iter().filter_map(NavigationEntry::document_id).collect();
        assert_eq!(ids, ["installation", "quickstart", "configuration"]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_sibling_categories_keep_input_order() {
        let description = vec![
            EntryDescription::category(
                "User Guide",
                docs(&[
                    "guide/simulations",
                    "guide/batch-processing",
                    "guide/evaluation",
                    "guide/web-demo",
                ]),
            ),
            EntryDescription::category(
                "API Reference",
                docs(&["api/clients", "api/therapists", "api/evaluators", "api/events"]),
            ),
        ];

        let tree = build_tree("tutorialSidebar", &description).unwrap();

        let labels: Vec<_> = tree.entries().iter().filter_map(NavigationEntry::label).collect();
        assert_eq!(labels, ["User Guide", "API Reference"]);
        let guide: Vec<_> = tree.entries()[0]
            .items()
            .iter()
            .filter_map(NavigationEntry::document_id)
            .collect();
        assert_eq!(
            guide,
            [
                "guide/simulations",
                "guide/batch-processing",
                "guide/evaluation",
                "guide/web-demo"
            ]
        );
        let api: Vec<_> = tree.entries()[1]
            .items()
            .iter()
            .filter_map(NavigationEntry::document_id)
            .collect();
        assert_eq!(api, ["api/clients", "api/therapists", "api/evaluators", "api/events"]);
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let description = vec![
            EntryDescription::doc("intro"),
            EntryDescription::category("Contributing", Vec::new()),
        ];

        let err = build_tree("tutorialSidebar", &description).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::EmptyCategory {
                location: "tutorialSidebar[1]".to_owned(),
                label: "Contributing".to_owned(),
            }
        );
    }

    #[test]
    fn test_empty_label_is_rejected() {
        let description = vec![EntryDescription::category("", docs(&["intro"]))];

        let err = build_tree("tutorialSidebar", &description).unwrap_err();

        assert!(
            matches!(err, ConfigurationError::EmptyLabel { .. }),
            "Expected ConfigurationError::EmptyLabel, got {err:?}"
        );
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let description = vec![EntryDescription::category("   ", docs(&["intro"]))];

        let result = build_tree("tutorialSidebar", &description);

        assert!(matches!(result, Err(ConfigurationError::EmptyLabel { .. })));
    }

    #[test]
    fn test_nested_error_reports_full_location() {
        let description = vec![
            EntryDescription::doc("intro"),
            EntryDescription::category(
                "Supported Methods",
                vec![
                    EntryDescription::doc("methods/overview"),
                    EntryDescription::category("Empty", Vec::new()),
                ],
            ),
        ];

        let err = build_tree("tutorialSidebar", &description).unwrap_err();

        assert!(err.to_string().contains("tutorialSidebar[1].items[1]"));
        assert!(err.to_string().contains("\"Empty\""));
    }

    #[test]
    fn test_unknown_entry_type_is_rejected() {
        let description = SidebarsDescription::from_json(
            r#"{"s": [{"type": "link", "label": "GitHub", "items": ["x"]}]}"#,
        )
        .unwrap();

        let err = build_sidebars(&description, &BuildOptions::default()).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::UnknownEntryType {
                location: "s[0]".to_owned(),
                found: Some("link".to_owned()),
            }
        );
    }

    #[test]
    fn test_missing_entry_type_is_rejected() {
        let description =
            SidebarsDescription::from_json(r#"{"s": [{"label": "Guide", "items": ["x"]}]}"#)
                .unwrap();

        let err = build_sidebars(&description, &BuildOptions::default()).unwrap_err();

        assert!(err.to_string().contains("<missing>"));
    }

    #[test]
    fn test_empty_document_id_is_rejected() {
        let description = vec![EntryDescription::doc("")];

        let result = build_tree("tutorialSidebar", &description);

        assert!(matches!(result, Err(ConfigurationError::EmptyDocumentId { .. })));
    }

    #[test]
    fn test_empty_sidebar_name_is_rejected() {
        let result = build_tree("", &docs(&["intro"]));

        assert_eq!(result.unwrap_err(), ConfigurationError::EmptySidebarName);
    }

    #[test]
    fn test_empty_sidebar_is_valid() {
        let tree = build_tree("emptySidebar", &[]).unwrap();

        assert!(tree.entries().is_empty());
        assert_eq!(tree.name(), "emptySidebar");
    }

    #[test]
    fn test_duplicate_ids_across_categories_are_accepted() {
        let description = vec![
            EntryDescription::category("User Guide", docs(&["guide/evaluation"])),
            EntryDescription::category("API Reference", docs(&["guide/evaluation"])),
        ];

        let tree = build_tree("tutorialSidebar", &description).unwrap();

        assert_eq!(tree.document_ids().count(), 2);
        assert_eq!(tree.duplicate_document_ids(), ["guide/evaluation"]);
    }

    #[test]
    fn test_duplicate_ids_rejected_in_strict_mode() {
        let description = vec![
            EntryDescription::category("User Guide", docs(&["guide/evaluation"])),
            EntryDescription::category("API Reference", docs(&["guide/evaluation"])),
        ];
        let options = BuildOptions { strict_ids: true };

        let err = build_tree_with("tutorialSidebar", &description, &options).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::DuplicateDocumentId {
                sidebar: "tutorialSidebar".to_owned(),
                document_id: "guide/evaluation".to_owned(),
            }
        );
    }

    #[test]
    fn test_nested_categories_are_accepted() {
        let description = vec![EntryDescription::category(
            "Outer",
            vec![EntryDescription::category("Inner", docs(&["deep/page"]))],
        )];

        let tree = build_tree("s", &description).unwrap();

        assert_eq!(tree.category_depth(), 2);
        assert_eq!(tree.document_ids().collect::<Vec<_>>(), ["deep/page"]);
    }

    #[test]
    fn test_build_sidebars_by_name() {
        let mut description = SidebarsDescription::new();
        description.insert("tutorialSidebar", docs(&["intro"]));
        description.insert("apiSidebar", docs(&["api/clients"]));

        let sidebars = build_sidebars(&description, &BuildOptions::default()).unwrap();

        assert_eq!(sidebars.len(), 2);
        assert_eq!(sidebars.names().collect::<Vec<_>>(), ["apiSidebar", "tutorialSidebar"]);
        let tree = sidebars.get("tutorialSidebar").unwrap();
        assert_eq!(tree.document_ids().collect::<Vec<_>>(), ["intro"]);
        assert!(sidebars.get("missing").is_none());
    }

    #[test]
    fn test_build_sidebars_fails_fast() {
        let mut description = SidebarsDescription::new();
        description.insert("good", docs(&["intro"]));
        description.insert("bad", vec![EntryDescription::category("Empty", Vec::new())]);

        let result = build_sidebars(&description, &BuildOptions::default());

        assert!(matches!(result, Err(ConfigurationError::EmptyCategory { .. })));
    }

    #[test]
    fn test_shipped_sidebars_are_valid() {
        let description =
            SidebarsDescription::from_yaml(include_str!("../../../sidebars.yaml")).unwrap();

        let sidebars = build_sidebars(&description, &BuildOptions { strict_ids: true }).unwrap();

        let tree = sidebars.get("tutorialSidebar").unwrap();
        assert_eq!(tree.entries()[0].document_id(), Some("intro"));
        let labels: Vec<_> = tree.entries().iter().filter_map(NavigationEntry::label).collect();
        assert_eq!(
            labels,
            [
                "Getting Started",
                "User Guide",
                "API Reference",
                "Supported Methods",
                "Contributing"
            ]
        );
        assert_eq!(tree.document_ids().count(), 26);
        assert_eq!(tree.category_depth(), 1);
    }
}
