//! `guidebook build` command implementation.

use std::path::PathBuf;

use clap::Args;
use guidebook_config::{CliSettings, Config};
use guidebook_site::SkipReason;

use super::site_builder;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover guidebook.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Site name used in page titles and the home link (overrides config).
    #[arg(long)]
    site_name: Option<String>,

    /// Enable verbose output (log every created page).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the navigation table is invalid, or
    /// if the source or output directory is unusable. Skipped documents do not
    /// fail the command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            site_name: self.site_name,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "configuration loaded");

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Output: {}",
            config.docs_resolved.output_dir.display()
        ));

        let builder = site_builder(&config)?;
        let report = builder.build()?;

        for skipped in &report.skipped {
            if matches!(skipped.reason, SkipReason::Failed(_)) {
                output.error(&format!("Failed {}: {}", skipped.id, skipped.reason));
            }
        }

        output.summary(
            &format!(
                "Converted {} documents, skipped {}",
                report.converted.len(),
                report.skipped.len()
            ),
            report.skipped.is_empty(),
        );
        Ok(())
    }
}
