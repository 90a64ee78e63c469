//! `guidebook check` command implementation.

use std::path::PathBuf;

use clap::Args;
use guidebook_config::{CliSettings, Config};

use super::site_builder;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover guidebook.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Loads and validates configuration and the navigation table, then lists
    /// chapters without a source file. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the navigation table is invalid, or
    /// if the source directory cannot be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));

        let builder = site_builder(&config)?;
        let sources = builder.resolve_sources()?;

        let mut missing = 0;
        for (id, path) in &sources {
            if path.is_none() {
                output.warning(&format!("Missing source for {id}"));
                missing += 1;
            }
        }

        output.summary(
            &format!(
                "Navigation table OK: {} chapters, {missing} without source",
                sources.len()
            ),
            missing == 0,
        );
        Ok(())
    }
}
