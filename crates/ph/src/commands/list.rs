//! `ph list` command implementation.

use std::io::Write;

use clap::Args;

use super::{SidebarsArgs, load_sidebars, select};
use crate::error::CliError;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    sidebars: SidebarsArgs,

    /// Sidebar to list (default: configured default sidebar).
    #[arg(long)]
    sidebar: Option<String>,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.sidebars.load_config(None)?;
        let sidebars = load_sidebars(&config)?;
        let tree = select(&sidebars, self.sidebar.as_deref(), &config)?;

        let mut stdout = std::io::stdout().lock();
        for document_id in tree.document_ids() {
            writeln!(stdout, "{document_id}")?;
        }
        Ok(())
    }
}
