//! Page assembly and static site building for guidebook.
//!
//! - [`DocumentTransformer`] renders one chapter into a complete standalone
//!   page: the markdown fragment wrapped in head, header navigation, chapter
//!   banner and footer.
//! - [`SiteBuilder`] runs the transformer over a source directory in
//!   navigation order and writes one `<id>.html` per chapter. Per-document
//!   problems are logged and counted in the [`BuildReport`]; they never abort
//!   the batch.

mod builder;
mod template;
mod transformer;

pub use builder::{BuildConfig, BuildError, BuildReport, SiteBuilder, SkipReason, SkippedDocument};
pub use guidebook_renderer::MarkdownBackend;
pub use transformer::{DocumentTransformer, RenderedPage, SiteSettings, TransformError};
