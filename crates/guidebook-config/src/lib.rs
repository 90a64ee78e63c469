//! Configuration management for guidebook.
//!
//! Parses `guidebook.toml` configuration files with serde and provides
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
//! - `site.name`
//! - `docs.source_dir`
//! - `docs.output_dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override HTML output directory.
    pub output_dir: Option<PathBuf>,
    /// Override site name.
    pub site_name: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "guidebook.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide page settings.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Markdown rendering settings.
    pub render: RenderConfig,
    /// Navigation table. `None` selects the built-in table.
    pub chapters: Option<Vec<ChapterConfig>>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide values embedded in every page.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page title suffix and home link text.
    pub name: String,
    /// Stylesheet reference.
    pub stylesheet: String,
    /// Home link target.
    pub home: String,
    /// Navigation id of the contents page.
    pub contents_id: String,
    /// Document language.
    pub lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Let's Build with Elixir and Phoenix".to_owned(),
            stylesheet: "assets/css/main.css".to_owned(),
            home: "index.html".to_owned(),
            contents_id: "00.01-contents".to_owned(),
            lang: "en".to_owned(),
        }
    }
}

/// `[render]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Engine for text outside code figures and callouts.
    pub backend: MarkdownEngine,
}

/// Markdown engine names accepted by `render.backend`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownEngine {
    /// Built-in line rules (GFM tables included).
    #[default]
    Rules,
    /// `pulldown-cmark` for all text runs.
    CommonMark,
}

/// One `[[chapters]]` entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ChapterConfig {
    pub id: String,
    pub title: String,
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    extensions: Option<Vec<String>>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory containing markdown chapters.
    pub source_dir: PathBuf,
    /// Directory receiving generated pages.
    pub output_dir: PathBuf,
    /// Markdown extensions without leading dot, in priority order.
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_owned(), "markdown".to_owned()]
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
        /// Config field path (e.g., "`site.name`").
        field: String,
        /// Error message (e.g., "${`GUIDE_NAME`} not set").
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
    /// Otherwise, searches for `guidebook.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the final configuration is invalid.
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
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(site_name) = &settings.site_name {
            self.site.name.clone_from(site_name);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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
            render: RenderConfig::default(),
            chapters: None,
            docs_resolved: DocsConfig {
                source_dir: base.join("guide"),
                output_dir: base.join("html"),
                extensions: default_extensions(),
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

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically at the end of [`Config::load`]. The navigation
    /// table itself is checked when the navigation index is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;
        require_non_empty(&self.site.stylesheet, "site.stylesheet")?;
        require_non_empty(&self.site.contents_id, "site.contents_id")?;
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        let extensions = &self.docs_resolved.extensions;
        if extensions.is_empty() {
            return Err(ConfigError::Validation(
                "docs.extensions must list at least one extension".to_owned(),
            ));
        }
        for ext in extensions {
            require_non_empty(ext, "docs.extensions entry")?;
            if ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "docs.extensions entry \"{ext}\" must not start with a dot"
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.name = expand::expand_env(&self.site.name, "site.name")?;

        if let Some(ref dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(dir, "docs.source_dir")?);
        }
        if let Some(ref dir) = self.docs.output_dir {
            self.docs.output_dir = Some(expand::expand_env(dir, "docs.output_dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "guide"),
            output_dir: resolve(self.docs.output_dir.as_deref(), "html"),
            extensions: self
                .docs
                .extensions
                .clone()
                .unwrap_or_else(default_extensions),
        };
    }
}
