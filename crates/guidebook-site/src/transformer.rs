//! Chapter document to full page.

use guidebook_nav::{BUILTIN_SITE_NAME, NavigationIndex};
use guidebook_renderer::{FragmentRenderer, MarkdownBackend};

use crate::template::{NavLink, PageData, render_page};

/// Fixed site-wide values embedded in every page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteSettings {
    /// Site name, used as title suffix and home link text.
    pub name: String,
    /// Stylesheet reference.
    pub stylesheet: String,
    /// Home link target.
    pub home: String,
    /// Navigation id of the contents page.
    pub contents_id: String,
    /// Document language.
    pub lang: String,
    /// Engine for chapter text.
    pub backend: MarkdownBackend,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: BUILTIN_SITE_NAME.to_owned(),
            stylesheet: "assets/css/main.css".to_owned(),
            home: "index.html".to_owned(),
            contents_id: "00.01-contents".to_owned(),
            lang: "en".to_owned(),
            backend: MarkdownBackend::default(),
        }
    }
}

/// A complete standalone page for one chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Navigation id the page was rendered for.
    pub id: String,
    /// Full HTML document.
    pub html: String,
}

impl RenderedPage {
    /// Output file name, `<id>.html`.
    pub fn file_name(&self) -> String {
        page_href(&self.id)
    }
}

/// Error returned when a document cannot be turned into a page.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransformError {
    /// The document id has no entry in the navigation table.
    #[error("{0} is not in navigation map")]
    Unmapped(String),
}

/// Renders chapter markdown into complete pages with navigation chrome.
#[derive(Debug)]
pub struct DocumentTransformer {
    index: NavigationIndex,
    settings: SiteSettings,
    renderer: FragmentRenderer,
}

impl DocumentTransformer {
    /// Create a transformer over a validated navigation table.
    pub fn new(index: NavigationIndex, settings: SiteSettings) -> Self {
        let renderer = FragmentRenderer::new()
            .with_chapter_extraction()
            .with_backend(settings.backend);
        Self {
            index,
            settings,
            renderer,
        }
    }

    /// The navigation table pages are linked through.
    pub fn index(&self) -> &NavigationIndex {
        &self.index
    }

    /// Site-wide page settings.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Render one document into a full page.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Unmapped`] if `id` is not in the navigation
    /// table. Callers treat this as a skip, not a failure of the batch.
    pub fn render(&self, id: &str, source: &str) -> Result<RenderedPage, TransformError> {
        let entry = self
            .index
            .lookup(id)
            .ok_or_else(|| TransformError::Unmapped(id.to_owned()))?;

        let fragment = self.renderer.render(source);
        if let Some(chapter) = &fragment.chapter {
            tracing::debug!(id, %chapter, "chapter label extracted");
        }

        let contents_href = page_href(&self.settings.contents_id);
        let page = PageData {
            title: &entry.title,
            site_name: &self.settings.name,
            lang: &self.settings.lang,
            stylesheet: &self.settings.stylesheet,
            home_href: &self.settings.home,
            contents_href: &contents_href,
            chapter: fragment.chapter.as_ref().map(ToString::to_string),
            html_content: &fragment.html,
            previous: entry.previous_id.as_deref().map(|id| self.nav_link(id)),
            next: entry.next_id.as_deref().map(|id| self.nav_link(id)),
        };

        Ok(RenderedPage {
            id: entry.id.clone(),
            html: render_page(&page),
        })
    }

    fn nav_link(&self, id: &str) -> NavLink {
        NavLink {
            href: page_href(id),
            title: self.index.title_of(id).unwrap_or(id).to_owned(),
        }
    }
}

fn page_href(id: &str) -> String {
    format!("{id}.html")
}
