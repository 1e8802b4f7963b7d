//! Filesystem content store.
//!
//! Resolves sidebar document ids to markdown files under the docs
//! directory. A document id `guide/evaluation` matches the first existing
//! file among `guide/evaluation.md`, `guide/evaluation.mdx`,
//! `guide/evaluation/index.md` and `guide/evaluation/index.mdx`.

use std::path::{Component, Path, PathBuf};

use ph_nav::NavigationTree;

/// Document suffixes tried in order.
const CANDIDATE_SUFFIXES: &[&str] = &[".md", ".mdx", "/index.md", "/index.mdx"];

/// A sidebar references a document the docs directory cannot provide.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ReferenceError {
    #[error("Sidebar {sidebar} references missing document \"{document_id}\"")]
    Missing {
        sidebar: String,
        document_id: String,
        tried: Vec<PathBuf>,
    },
    #[error("Sidebar {sidebar} references \"{document_id}\" outside the docs directory")]
    OutsideDocsDir {
        sidebar: String,
        document_id: String,
    },
}

impl ReferenceError {
    pub(crate) fn document_id(&self) -> &str {
        match self {
            Self::Missing { document_id, .. } | Self::OutsideDocsDir { document_id, .. } => {
                document_id.as_str()
            }
        }
    }

    /// Files looked up before giving up. Empty when the id was never looked up.
    pub(crate) fn tried(&self) -> &[PathBuf] {
        match self {
            Self::Missing { tried, .. } => tried.as_slice(),
            Self::OutsideDocsDir { .. } => &[],
        }
    }
}

/// Docs directory acting as the document content store.
pub(crate) struct DocsDir {
    root: PathBuf,
}

impl DocsDir {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate files for a document id, in lookup order.
    fn candidates(&self, document_id: &str) -> Vec<PathBuf> {
        CANDIDATE_SUFFIXES
            .iter()
            .map(|suffix| self.root.join(format!("{document_id}{suffix}")))
            .collect()
    }

    /// Resolve one document id to its source file.
    ///
    /// Ids must be relative paths without `..` components.
    pub(crate) fn resolve(&self, sidebar: &str, document_id: &str) -> Result<PathBuf, ReferenceError> {
        let contained = Path::new(document_id)
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(ReferenceError::OutsideDocsDir {
                sidebar: sidebar.to_owned(),
                document_id: document_id.to_owned(),
            });
        }

        let tried = self.candidates(document_id);
        if let Some(found) = tried.iter().find(|path| path.is_file()) {
            return Ok(found.clone());
        }
        Err(ReferenceError::Missing {
            sidebar: sidebar.to_owned(),
            document_id: document_id.to_owned(),
            tried,
        })
    }

    /// Resolve every document of a sidebar, returning the ones that are missing.
    pub(crate) fn check(&self, tree: &NavigationTree) -> Vec<ReferenceError> {
        tree.document_ids()
            .filter_map(|id| match self.resolve(tree.name(), id) {
                Ok(path) => {
                    tracing::debug!(document_id = id, path = %path.display(), "Resolved document");
                    None
                }
                Err(err) => Some(err),
            })
            .collect()
    }
}
