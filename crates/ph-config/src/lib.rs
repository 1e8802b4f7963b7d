//! Configuration management for the PatientHub docs tooling.
//!
//! Parses `ph.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir`
//! - `sidebars.path`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebars file.
    pub sidebars_path: Option<PathBuf>,
    /// Override strict document id checking.
    pub strict_ids: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ph.toml";

/// Sidebars file used when none is configured.
const DEFAULT_SIDEBARS_FILE: &str = "sidebars.json";

/// Sidebar exposed to the rendering layer when none is requested.
const DEFAULT_SIDEBAR: &str = "tutorialSidebar";

/// Extensions accepted for the sidebars file.
const SIDEBARS_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Sidebar configuration (paths are relative strings from TOML).
    sidebars: SidebarsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved sidebar configuration (set after loading).
    #[serde(skip)]
    pub sidebars_resolved: SidebarsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata consumed by page views.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Short tagline shown under the title.
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "PatientHub".to_owned(),
            tagline: "A unified framework for LLM-based patient simulation".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files (the content store).
    pub source_dir: PathBuf,
}

/// Raw sidebar configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SidebarsConfigRaw {
    path: Option<String>,
    default: Option<String>,
    strict_ids: Option<bool>,
}

/// Resolved sidebar configuration.
#[derive(Debug, Default)]
pub struct SidebarsConfig {
    /// Sidebars description file (JSON or YAML).
    pub path: PathBuf,
    /// Sidebar used when a command names none.
    pub default: String,
    /// Reject document ids referenced more than once.
    pub strict_ids: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sidebars.path`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} environment variable not found").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ph.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebars_path) = &settings.sidebars_path {
            self.sidebars_resolved.path.clone_from(sidebars_path);
        }
        if let Some(strict_ids) = settings.strict_ids {
            self.sidebars_resolved.strict_ids = strict_ids;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(&current)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            sidebars: SidebarsConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            sidebars_resolved: SidebarsConfig {
                path: base.join(DEFAULT_SIDEBARS_FILE),
                default: DEFAULT_SIDEBAR.to_owned(),
                strict_ids: false,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        self.validate_sidebars()?;
        Ok(())
    }

    /// Validate sidebar configuration.
    fn validate_sidebars(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.sidebars_resolved.default, "sidebars.default")?;

        let extension = self
            .sidebars_resolved
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension {
            Some(ext) if SIDEBARS_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ConfigError::Validation(format!(
                "sidebars.path must end in one of: {}",
                SIDEBARS_EXTENSIONS.join(", ")
            ))),
        }
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }
        if let Some(ref path) = self.sidebars.path {
            self.sidebars.path = Some(expand::expand_env(path, "sidebars.path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
        };

        self.sidebars_resolved = SidebarsConfig {
            path: resolve(self.sidebars.path.as_deref(), DEFAULT_SIDEBARS_FILE),
            default: self
                .sidebars
                .default
                .clone()
                .unwrap_or_else(|| DEFAULT_SIDEBAR.to_owned()),
            strict_ids: self.sidebars.strict_ids.unwrap_or(false),
        };
    }
}
