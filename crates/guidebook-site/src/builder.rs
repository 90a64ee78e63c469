//! Batch site builder.
//!
//! Walks the navigation table in declared order, renders every chapter whose
//! source file exists and writes `<id>.html` into the output directory.
//! Markdown files in the source directory that are not in the table are
//! reported afterwards, sorted by name.
//!
//! Pages are written to a temporary file and renamed into place, so a failed
//! document never leaves a partial page behind. Rendering is deterministic:
//! building twice over unchanged inputs produces identical files.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::transformer::{DocumentTransformer, RenderedPage, TransformError};

/// Configuration for a build.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Directory containing `<id>.<extension>` markdown files.
    pub source_dir: PathBuf,
    /// Directory receiving `<id>.html` pages. Created if missing.
    pub output_dir: PathBuf,
    /// Markdown file extensions without leading dot, in priority order.
    pub extensions: Vec<String>,
}

/// Why a document produced no page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Source file whose id is not in the navigation table.
    Unmapped,
    /// Navigation entry without a source file.
    MissingSource,
    /// Reading, rendering or writing failed.
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped => f.write_str("not in navigation map"),
            Self::MissingSource => f.write_str("file not found"),
            Self::Failed(message) => write!(f, "error: {message}"),
        }
    }
}

/// A document that was skipped, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedDocument {
    pub id: String,
    pub reason: SkipReason,
}

/// Outcome of a build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Ids of pages written, in processing order.
    pub converted: Vec<String>,
    /// Documents that produced no page, in processing order.
    pub skipped: Vec<SkippedDocument>,
}

impl BuildReport {
    fn skip(&mut self, id: &str, reason: SkipReason) {
        self.skipped.push(SkippedDocument {
            id: id.to_owned(),
            reason,
        });
    }
}

/// Fatal error that stops a build before any document is processed.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Cannot read source directory {}: {source}", path.display())]
    SourceDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-document failure, recorded as [`SkipReason`].
#[derive(Debug, thiserror::Error)]
enum DocumentError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Builds the static site from a source directory.
pub struct SiteBuilder {
    transformer: DocumentTransformer,
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(transformer: DocumentTransformer, config: BuildConfig) -> Self {
        Self {
            transformer,
            config,
        }
    }

    /// Render and write every page.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] only if the source directory cannot be listed or
    /// the output directory cannot be created. Problems with individual
    /// documents are logged and recorded in the returned [`BuildReport`].
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let sources = self.scan_sources()?;
        fs::create_dir_all(&self.config.output_dir).map_err(|source| BuildError::OutputDir {
            path: self.config.output_dir.clone(),
            source,
        })?;

        let index = self.transformer.index();
        let contents_id = &self.transformer.settings().contents_id;
        if !index.contains(contents_id) {
            tracing::warn!("Contents page {contents_id} is not in navigation map");
        }

        let mut report = BuildReport::default();
        for entry in index {
            match sources.get(entry.id.as_str()) {
                Some(path) => self.process(&entry.id, path, &mut report),
                None => {
                    tracing::warn!("Skipping {} (file not found)", entry.id);
                    report.skip(&entry.id, SkipReason::MissingSource);
                }
            }
        }
        for id in sources.keys().filter(|id| !index.contains(id)) {
            tracing::warn!("Skipping {id} - not in navigation map");
            report.skip(id, SkipReason::Unmapped);
        }

        tracing::info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            "build finished"
        );
        Ok(report)
    }

    /// Chapters in navigation order paired with their source file, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SourceDir`] if the source directory cannot be listed.
    pub fn resolve_sources(&self) -> Result<Vec<(String, Option<PathBuf>)>, BuildError> {
        let mut sources = self.scan_sources()?;
        Ok(self
            .transformer
            .index()
            .iter()
            .map(|entry| (entry.id.clone(), sources.remove(entry.id.as_str())))
            .collect())
    }

    fn process(&self, id: &str, path: &Path, report: &mut BuildReport) {
        match self.convert(id, path) {
            Ok(page) => {
                tracing::info!("Created {}", page.file_name());
                report.converted.push(page.id);
            }
            Err(err) => {
                tracing::error!("Error processing {}: {err}", path.display());
                report.skip(id, SkipReason::Failed(err.to_string()));
            }
        }
    }

    fn convert(&self, id: &str, path: &Path) -> Result<RenderedPage, DocumentError> {
        let source = fs::read_to_string(path)?;
        let page = self.transformer.render(id, &source)?;
        write_atomic(
            &self.config.output_dir.join(page.file_name()),
            page.html.as_bytes(),
        )?;
        Ok(page)
    }

    /// Markdown files in the source directory keyed by file stem.
    ///
    /// When one stem exists with several extensions, the extension listed
    /// first in the configuration wins.
    fn scan_sources(&self) -> Result<BTreeMap<String, PathBuf>, BuildError> {
        let source_error = |source| BuildError::SourceDir {
            path: self.config.source_dir.clone(),
            source,
        };
        let entries = fs::read_dir(&self.config.source_dir).map_err(source_error)?;

        let mut found: BTreeMap<String, (usize, PathBuf)> = BTreeMap::new();
        for entry in entries {
            let Some(entry) = logged(entry, &self.config.source_dir) else {
                continue;
            };
            let path = entry.path();
            if !logged(entry.file_type(), &path).is_some_and(|t| t.is_file()) {
                continue;
            }
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|e| e.to_str()),
            ) else {
                continue;
            };
            let Some(priority) = self.config.extensions.iter().position(|e| e == ext) else {
                continue;
            };
            let stem = stem.to_owned();
            match found.get(&stem) {
                Some((existing, _)) if *existing <= priority => {}
                _ => {
                    found.insert(stem, (priority, path));
                }
            }
        }

        Ok(found
            .into_iter()
            .map(|(stem, (_, path))| (stem, path))
            .collect())
    }
}

/// Unwrap a directory listing result, logging and dropping errors.
fn logged<T>(result: io::Result<T>, path: &Path) -> Option<T> {
    result
        .map_err(|err| tracing::warn!("Cannot read {}: {err}", path.display()))
        .ok()
}

/// Write a file via a temporary sibling and rename.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid output file name"))?;
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    let result = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
