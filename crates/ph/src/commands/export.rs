//! `ph export` command implementation.

use std::io::Write;

use clap::{Args, ValueEnum};

use super::{SidebarsArgs, load_sidebars, select};
use crate::error::CliError;

/// Output format for exported sidebars.
#[derive(Clone, Copy, Default, ValueEnum)]
pub(crate) enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    sidebars: SidebarsArgs,

    /// Sidebar to export (default: every sidebar, keyed by name).
    #[arg(long)]
    sidebar: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: ExportFormat,
}

impl ExportArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.sidebars.load_config(None)?;
        let sidebars = load_sidebars(&config)?;

        let rendered = match self.sidebar.as_deref() {
            Some(name) => render(select(&sidebars, Some(name), &config)?, self.format)?,
            None => render(&sidebars, self.format)?,
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered.trim_end())?;
        Ok(())
    }
}

pub(super) fn render<T: serde::Serialize + ?Sized>(
    value: &T,
    format: ExportFormat,
) -> Result<String, CliError> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| CliError::Serialize(e.to_string()))
        }
        ExportFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| CliError::Serialize(e.to_string()))
        }
    }
}
