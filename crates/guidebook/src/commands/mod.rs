//! CLI command implementations.

mod build;
mod check;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

use guidebook_config::{ChapterConfig, Config, MarkdownEngine};
use guidebook_nav::{ChapterEntry, NavigationError, NavigationIndex};
use guidebook_site::{BuildConfig, DocumentTransformer, MarkdownBackend, SiteBuilder, SiteSettings};

/// Navigation table from `[[chapters]]`, or the built-in table when absent.
fn navigation_index(config: &Config) -> Result<NavigationIndex, NavigationError> {
    match &config.chapters {
        Some(chapters) => NavigationIndex::new(chapters.iter().map(chapter_entry).collect()),
        None => NavigationIndex::builtin(),
    }
}

fn chapter_entry(chapter: &ChapterConfig) -> ChapterEntry {
    ChapterEntry::new(
        chapter.id.as_str(),
        chapter.title.as_str(),
        chapter.previous.as_deref(),
        chapter.next.as_deref(),
    )
}

fn site_settings(config: &Config) -> SiteSettings {
    let site = &config.site;
    SiteSettings {
        name: site.name.clone(),
        stylesheet: site.stylesheet.clone(),
        home: site.home.clone(),
        contents_id: site.contents_id.clone(),
        lang: site.lang.clone(),
        backend: markdown_backend(config.render.backend),
    }
}

fn markdown_backend(engine: MarkdownEngine) -> MarkdownBackend {
    match engine {
        MarkdownEngine::Rules => MarkdownBackend::Rules,
        MarkdownEngine::CommonMark => MarkdownBackend::CommonMark,
    }
}

/// Validate the navigation table and assemble a builder from loaded config.
fn site_builder(config: &Config) -> Result<SiteBuilder, NavigationError> {
    let transformer = DocumentTransformer::new(navigation_index(config)?, site_settings(config));
    let docs = &config.docs_resolved;
    Ok(SiteBuilder::new(
        transformer,
        BuildConfig {
            source_dir: docs.source_dir.clone(),
            output_dir: docs.output_dir.clone(),
            extensions: docs.extensions.clone(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_from(toml: &str) -> Config {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("guidebook.toml");
        std::fs::write(&path, toml).unwrap();
        Config::load(Some(&path), None).unwrap()
    }

    #[test]
    fn test_builtin_table_when_no_chapters() {
        let index = navigation_index(&config_from("")).unwrap();
        assert_eq!(index.len(), 101);
    }

    #[test]
    fn test_chapters_from_config() {
        let config = config_from(
            r#"
[[chapters]]
id = "a"
title = "Alpha"
next = "b"

[[chapters]]
id = "b"
title = "Beta"
previous = "a"
"#,
        );
        let index = navigation_index(&config).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.title_of("b"), Some("Beta"));
        assert_eq!(index.lookup("a").unwrap().next_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_invalid_chapters_rejected() {
        let config = config_from(
            r#"
[[chapters]]
id = "a"
title = "Alpha"
next = "missing"
"#,
        );
        assert!(matches!(
            navigation_index(&config),
            Err(NavigationError::DanglingLink { .. })
        ));
    }

    #[test]
    fn test_site_settings_follow_config() {
        let config = config_from("[site]\nname = \"Handbook\"\nlang = \"fr\"\n");
        let settings = site_settings(&config);
        assert_eq!(settings.name, "Handbook");
        assert_eq!(settings.lang, "fr");
        assert_eq!(settings.contents_id, "00.01-contents");
        assert_eq!(settings.backend, MarkdownBackend::Rules);
    }

    #[test]
    fn test_render_backend_from_config() {
        let config = config_from("[render]\nbackend = \"commonmark\"\n");
        assert_eq!(site_settings(&config).backend, MarkdownBackend::CommonMark);
    }
}
