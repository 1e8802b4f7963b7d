//! `ph check` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{SidebarsArgs, load_sidebars};
use crate::docs_dir::DocsDir;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    sidebars: SidebarsArgs,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Only validate sidebar structure, skip document lookup.
    #[arg(long)]
    no_docs: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidebars are invalid or reference missing documents.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.sidebars.load_config(self.source_dir)?;
        output.info(&format!(
            "Sidebars: {}",
            config.sidebars_resolved.path.display()
        ));

        let sidebars = load_sidebars(&config)?;

        for tree in sidebars.iter() {
            for document_id in tree.duplicate_document_ids() {
                output.warning(&format!(
                    "Sidebar {} references \"{document_id}\" more than once",
                    tree.name()
                ));
            }
        }

        if !self.no_docs {
            let docs = DocsDir::new(config.docs_resolved.source_dir.clone());
            output.info(&format!("Docs: {}", docs.root().display()));

            let missing: Vec<_> = sidebars.iter().flat_map(|tree| docs.check(tree)).collect();
            for err in &missing {
                output.error(&err.to_string());
                for path in err.tried() {
                    output.info(&format!("  tried {}", path.display()));
                }
            }
            if !missing.is_empty() {
                return Err(CliError::UnresolvedReferences(missing.len()));
            }
        }

        let documents: usize = sidebars.iter().map(|tree| tree.document_ids().count()).sum();
        output.success(&format!(
            "{} sidebar(s) OK, {documents} document link(s)",
            sidebars.len()
        ));
        Ok(())
    }
}
