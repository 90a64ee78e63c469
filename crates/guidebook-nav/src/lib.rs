//! Chapter navigation for guidebook.
//!
//! A [`NavigationIndex`] is the ordered, immutable table of chapters that every
//! rendered page links through. Each [`ChapterEntry`] names its previous and
//! next neighbour; together the entries must form a single doubly linked chain.
//!
//! The index is validated once on construction. A malformed table (duplicate
//! ids, dangling or one-sided links, more than one head or tail, entries not
//! reachable from the head) is rejected with a [`NavigationError`] before any
//! document is processed.
//!
//! # Example
//!
//! ```
//! use guidebook_nav::{ChapterEntry, NavigationIndex};
//!
//! let index = NavigationIndex::new(vec![
//!     ChapterEntry::new("intro", "Introduction", None, Some("setup")),
//!     ChapterEntry::new("setup", "Setup", Some("intro"), None),
//! ])
//! .unwrap();
//!
//! assert_eq!(index.title_of("setup"), Some("Setup"));
//! assert_eq!(index.lookup("intro").unwrap().next_id.as_deref(), Some("setup"));
//! ```

mod builtin;
mod index;

pub use builtin::BUILTIN_SITE_NAME;
pub use index::{ChapterEntry, LinkField, NavigationError, NavigationIndex};
