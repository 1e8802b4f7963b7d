//! Sidebar navigation model for the PatientHub documentation site.
//!
//! This crate provides:
//! - [`SidebarsDescription`]: the declarative sidebar grammar as read from JSON or YAML
//! - [`build_tree`] / [`build_sidebars`]: validation into immutable [`NavigationTree`]s
//! - [`export`]: the reverse transform, handed to the rendering layer
//!
//! Document ids are passed through untouched. Whether a document actually
//! exists is up to the content store.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ph_nav::{BuildOptions, SidebarsDescription, build_sidebars};
//!
//! let description = SidebarsDescription::from_json(
//!     r#"{"tutorialSidebar": ["intro", {"type": "category", "label": "Guide", "items": ["guide/evaluation"]}]}"#,
//! )?;
//! let sidebars = build_sidebars(&description, &BuildOptions::default())?;
//!
//! let tree = sidebars.get("tutorialSidebar").expect("sidebar is defined");
//! assert_eq!(tree.document_ids().collect::<Vec<_>>(), ["intro", "guide/evaluation"]);
//! # Ok(())
//! # }
//! ```

mod builder;
mod description;
mod error;
mod export;
mod tree;

pub use builder::{BuildOptions, build_sidebars, build_tree, build_tree_with};
pub use description::{
    CATEGORY_TYPE, CategoryDescription, EntryDescription, SidebarsDescription, SourceFormat,
};
pub use error::ConfigurationError;
pub use export::export;
pub use tree::{DocumentIds, NavigationEntry, NavigationTree, Sidebars};
