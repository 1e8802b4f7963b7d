//! `ph site` command implementation.
//!
//! Emits the data page views need in one document: site title and
//! tagline, the default sidebar name and every validated sidebar.

use std::io::Write;

use clap::Args;
use ph_config::Config;
use ph_nav::Sidebars;
use serde::Serialize;

use super::export::{ExportFormat, render};
use super::{SidebarsArgs, load_sidebars, select};
use crate::error::CliError;

/// Site data handed to the rendering layer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteManifest<'a> {
    title: &'a str,
    tagline: &'a str,
    default_sidebar: &'a str,
    sidebars: &'a Sidebars,
}

/// Arguments for the site command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    #[command(flatten)]
    sidebars: SidebarsArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: ExportFormat,
}

impl SiteArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.sidebars.load_config(None)?;
        let sidebars = load_sidebars(&config)?;

        let rendered = render(&manifest(&config, &sidebars)?, self.format)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered.trim_end())?;
        Ok(())
    }
}

/// Assemble the manifest. Fails if the default sidebar is not defined.
fn manifest<'a>(config: &'a Config, sidebars: &'a Sidebars) -> Result<SiteManifest<'a>, CliError> {
    let default_sidebar = select(sidebars, None, config)?.name();
    Ok(SiteManifest {
        title: &config.site.title,
        tagline: &config.site.tagline,
        default_sidebar,
        sidebars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_nav::{BuildOptions, SidebarsDescription, build_sidebars};

    fn sidebars(json: &str) -> Sidebars {
        let description = SidebarsDescription::from_json(json).unwrap();
        build_sidebars(&description, &BuildOptions::default()).unwrap()
    }

    #[test]
    fn test_manifest_carries_site_metadata_and_sidebars() {
        let mut config = Config::default();
        config.site.title = "PatientHub".to_owned();
        config.site.tagline = "Patient simulation for mental health training".to_owned();
        let sidebars = sidebars(
            r#"{"tutorialSidebar": ["intro", {"type": "category", "label": "Guide", "items": ["guide/web-demo"]}]}"#,
        );

        let json = render(&manifest(&config, &sidebars).unwrap(), ExportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "PatientHub");
        assert_eq!(value["tagline"], "Patient simulation for mental health training");
        assert_eq!(value["defaultSidebar"], "tutorialSidebar");
        assert_eq!(value["sidebars"]["tutorialSidebar"][0], "intro");
        assert_eq!(value["sidebars"]["tutorialSidebar"][1]["label"], "Guide");
    }

    #[test]
    fn test_manifest_requires_default_sidebar() {
        let config = Config::default();
        let sidebars = sidebars(r#"{"apiSidebar": ["api/clients"]}"#);

        let result = manifest(&config, &sidebars);

        assert!(matches!(result, Err(CliError::Validation(_))));
    }
}
