//! Sidebar configuration errors.

/// Error raised when a sidebar description violates a structural invariant.
///
/// All variants are fatal: no partial navigation is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Sidebar name is empty.
    #[error("Sidebar name cannot be empty")]
    EmptySidebarName,
    /// Category has no items.
    #[error("Category \"{label}\" at {location} has no items")]
    EmptyCategory {
        /// Entry location (e.g., "`tutorialSidebar[2]`").
        location: String,
        /// Category label.
        label: String,
    },
    /// Category label is empty.
    #[error("Category at {location} has an empty label")]
    EmptyLabel {
        /// Entry location.
        location: String,
    },
    /// Object entry with a `type` other than `category`.
    #[error("Unsupported entry type at {location}: {}", .found.as_deref().unwrap_or("<missing>"))]
    UnknownEntryType {
        /// Entry location.
        location: String,
        /// The `type` value found, if any.
        found: Option<String>,
    },
    /// Document link with an empty id.
    #[error("Document link at {location} has an empty id")]
    EmptyDocumentId {
        /// Entry location.
        location: String,
    },
    /// Document id referenced twice (strict mode only).
    #[error("Document \"{document_id}\" is referenced more than once in sidebar {sidebar}")]
    DuplicateDocumentId {
        /// Sidebar name.
        sidebar: String,
        /// Repeated document id.
        document_id: String,
    },
    /// Sidebar name defined twice in one description.
    #[error("Sidebar \"{name}\" is defined more than once")]
    DuplicateSidebar {
        /// Repeated sidebar name.
        name: String,
    },
    /// Description could not be parsed.
    #[error("Invalid sidebars description: {0}")]
    Parse(String),
}
