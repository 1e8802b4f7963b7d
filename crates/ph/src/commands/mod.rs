//! CLI command implementations.

mod check;
mod export;
mod list;
mod site;

use std::path::{Path, PathBuf};

use clap::Args;
use ph_config::{CliSettings, Config};
use ph_nav::{BuildOptions, NavigationTree, Sidebars, SidebarsDescription, SourceFormat, build_sidebars};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use list::ListArgs;
pub(crate) use site::SiteArgs;

/// Arguments shared by every command that loads sidebars.
#[derive(Args)]
pub(crate) struct SidebarsArgs {
    /// Path to configuration file (default: auto-discover ph.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sidebars description file (overrides config).
    #[arg(long)]
    sidebars: Option<PathBuf>,

    /// Reject document ids referenced more than once.
    #[arg(long)]
    strict_ids: bool,
}

impl SidebarsArgs {
    /// Load configuration, applying these arguments as overrides.
    pub(crate) fn load_config(&self, source_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir,
            sidebars_path: self.sidebars.clone(),
            strict_ids: self.strict_ids.then_some(true),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Read, parse and validate the sidebars file named by `config`.
pub(crate) fn load_sidebars(config: &Config) -> Result<Sidebars, CliError> {
    let path = &config.sidebars_resolved.path;
    let description = read_description(path)?;
    let options = BuildOptions {
        strict_ids: config.sidebars_resolved.strict_ids,
    };

    let sidebars = build_sidebars(&description, &options)?;
    tracing::info!(path = %path.display(), sidebars = sidebars.len(), "Loaded sidebars");
    Ok(sidebars)
}

fn read_description(path: &Path) -> Result<SidebarsDescription, CliError> {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(SourceFormat::from_extension)
        .ok_or_else(|| {
            CliError::Validation(format!(
                "Unsupported sidebars file (expected .json, .yaml or .yml): {}",
                path.display()
            ))
        })?;
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadSidebars {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SidebarsDescription::parse(&content, format)?)
}

/// Pick the requested sidebar, falling back to the configured default.
pub(crate) fn select<'a>(
    sidebars: &'a Sidebars,
    requested: Option<&str>,
    config: &Config,
) -> Result<&'a NavigationTree, CliError> {
    let name = requested.unwrap_or(&config.sidebars_resolved.default);
    sidebars.get(name).ok_or_else(|| {
        let available: Vec<_> = sidebars.names().collect();
        CliError::Validation(format!(
            "Sidebar not found: {name} (available: {})",
            available.join(", ")
        ))
    })
}
