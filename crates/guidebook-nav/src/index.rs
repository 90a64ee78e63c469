//! Validated chapter table.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::builtin::BUILTIN_CHAPTERS;

/// One row of the navigation table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterEntry {
    /// Stable document identifier (source file stem, output file stem).
    pub id: String,
    /// Human-readable page title.
    pub title: String,
    /// Identifier of the preceding chapter, `None` for the first one.
    pub previous_id: Option<String>,
    /// Identifier of the following chapter, `None` for the last one.
    pub next_id: Option<String>,
}

impl ChapterEntry {
    /// Create a new entry.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        previous_id: Option<&str>,
        next_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            previous_id: previous_id.map(str::to_owned),
            next_id: next_id.map(str::to_owned),
        }
    }

    fn link(&self, field: LinkField) -> Option<&str> {
        match field {
            LinkField::Previous => self.previous_id.as_deref(),
            LinkField::Next => self.next_id.as_deref(),
        }
    }
}

/// Which neighbour link of an entry an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkField {
    Previous,
    Next,
}

impl LinkField {
    fn opposite(self) -> Self {
        match self {
            Self::Previous => Self::Next,
            Self::Next => Self::Previous,
        }
    }
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => f.write_str("previous"),
            Self::Next => f.write_str("next"),
        }
    }
}

/// Error returned when a navigation table violates the chain invariants.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    /// An entry has an empty id or title.
    #[error("Chapter #{position} has an empty {field}")]
    EmptyField {
        /// Zero-based position in the table.
        position: usize,
        /// Name of the empty field.
        field: &'static str,
    },
    /// Two entries share an id.
    #[error("Duplicate chapter id: {0}")]
    DuplicateId(String),
    /// A link names an id that is not in the table.
    #[error("Chapter {id} links {field} to unknown chapter {target}")]
    DanglingLink {
        id: String,
        field: LinkField,
        target: String,
    },
    /// A link is not mirrored by the target's opposite link.
    #[error("Chapter {id} links {field} to {target}, but {target} does not link back")]
    AsymmetricLink {
        id: String,
        field: LinkField,
        target: String,
    },
    /// The table is not empty but every entry has a previous link.
    #[error("Navigation chain has no first chapter")]
    NoHead,
    /// More than one entry has no previous link.
    #[error("Navigation chain has several first chapters: {}", .0.join(", "))]
    MultipleHeads(Vec<String>),
    /// An entry cannot be reached by following next links from the head.
    #[error("Chapter {0} is not reachable from the first chapter")]
    Unreachable(String),
}

/// Immutable, validated chapter table.
///
/// Entries keep their declared order; lookups by id go through a hash index.
#[derive(Debug)]
pub struct NavigationIndex {
    entries: Vec<ChapterEntry>,
    positions: HashMap<String, usize>,
}

impl NavigationIndex {
    /// Build an index, validating the chain invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavigationError`] found. Checks run in this order:
    /// empty fields, duplicate ids, dangling links, link symmetry, head count,
    /// reachability. With symmetric links every chain has exactly one tail per
    /// head, so a single head also means a single tail.
    pub fn new(entries: Vec<ChapterEntry>) -> Result<Self, NavigationError> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(NavigationError::EmptyField {
                    position,
                    field: "id",
                });
            }
            if entry.title.is_empty() {
                return Err(NavigationError::EmptyField {
                    position,
                    field: "title",
                });
            }
            if positions.insert(entry.id.clone(), position).is_some() {
                return Err(NavigationError::DuplicateId(entry.id.clone()));
            }
        }

        let index = Self { entries, positions };
        index.check_links()?;
        index.check_chain()?;
        tracing::debug!(chapters = index.len(), "navigation index validated");
        Ok(index)
    }

    /// The built-in chapter table of the guide.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] if the compiled-in table is inconsistent.
    pub fn builtin() -> Result<Self, NavigationError> {
        let entries = BUILTIN_CHAPTERS
            .iter()
            .map(|&(id, title, previous, next)| ChapterEntry::new(id, title, previous, next))
            .collect();
        Self::new(entries)
    }

    /// Look up an entry by id.
    pub fn lookup(&self, id: &str) -> Option<&ChapterEntry> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    /// Title of the entry with the given id.
    pub fn title_of(&self, id: &str) -> Option<&str> {
        self.lookup(id).map(|entry| entry.title.as_str())
    }

    /// Whether the table has an entry with the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Entries in declared order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChapterEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_links(&self) -> Result<(), NavigationError> {
        for entry in &self.entries {
            for field in [LinkField::Previous, LinkField::Next] {
                let Some(target) = entry.link(field) else {
                    continue;
                };
                let Some(neighbour) = self.lookup(target) else {
                    return Err(NavigationError::DanglingLink {
                        id: entry.id.clone(),
                        field,
                        target: target.to_owned(),
                    });
                };
                if neighbour.link(field.opposite()) != Some(entry.id.as_str()) {
                    return Err(NavigationError::AsymmetricLink {
                        id: entry.id.clone(),
                        field,
                        target: target.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_chain(&self) -> Result<(), NavigationError> {
        if self.entries.is_empty() {
            return Ok(());
        }

        let heads: Vec<&ChapterEntry> = self
            .entries
            .iter()
            .filter(|e| e.previous_id.is_none())
            .collect();

        let head = match heads.as_slice() {
            [] => return Err(NavigationError::NoHead),
            [head] => *head,
            _ => {
                return Err(NavigationError::MultipleHeads(
                    heads.iter().map(|e| e.id.clone()).collect(),
                ));
            }
        };

        let mut visited = HashSet::with_capacity(self.entries.len());
        let mut current = Some(head);
        while let Some(entry) = current {
            if !visited.insert(entry.id.as_str()) {
                break;
            }
            current = entry.next_id.as_deref().and_then(|id| self.lookup(id));
        }

        match self.entries.iter().find(|e| !visited.contains(e.id.as_str())) {
            Some(orphan) => Err(NavigationError::Unreachable(orphan.id.clone())),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a NavigationIndex {
    type Item = &'a ChapterEntry;
    type IntoIter = std::slice::Iter<'a, ChapterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
