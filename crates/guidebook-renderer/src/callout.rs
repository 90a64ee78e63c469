//! Quote block variants.

/// Rendering variant of a quote block.
///
/// The variant is picked from marker text anywhere in the block, checked in
/// declaration order: a block mentioning both `**FP Concept:` and `**Note`
/// is a [`Concept`](Self::Concept).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutVariant {
    /// Functional programming concept box.
    Concept,
    Note,
    Important,
    Hint,
    /// Plain quote, no marker found.
    Quote,
}

const MARKERS: [(&str, CalloutVariant); 4] = [
    ("**FP Concept:", CalloutVariant::Concept),
    ("**Note", CalloutVariant::Note),
    ("**Important", CalloutVariant::Important),
    ("**Hint", CalloutVariant::Hint),
];

impl CalloutVariant {
    /// Select the variant for a quote block's content (prefixes stripped).
    ///
    /// # Examples
    ///
    /// ```
    /// use guidebook_renderer::CalloutVariant;
    ///
    /// assert_eq!(CalloutVariant::detect("**Hint**: try it"), CalloutVariant::Hint);
    /// assert_eq!(CalloutVariant::detect("Just a quote"), CalloutVariant::Quote);
    /// ```
    pub fn detect(content: &str) -> Self {
        MARKERS
            .iter()
            .find(|(marker, _)| content.contains(marker))
            .map_or(Self::Quote, |&(_, variant)| variant)
    }

    /// CSS class of the wrapper element, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Concept => Some("fp-concept"),
            Self::Note => Some("note"),
            Self::Important => Some("important"),
            Self::Hint => Some("hint"),
            Self::Quote => None,
        }
    }

    /// Opening tag of the wrapper element.
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Concept => r#"<blockquote class="fp-concept">"#,
            Self::Note => r#"<div class="note">"#,
            Self::Important => r#"<div class="important">"#,
            Self::Hint => r#"<div class="hint">"#,
            Self::Quote => "<blockquote>",
        }
    }

    /// Closing tag matching [`open_tag`](Self::open_tag).
    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Concept | Self::Quote => "</blockquote>",
            Self::Note | Self::Important | Self::Hint => "</div>",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_marker() {
        assert_eq!(
            CalloutVariant::detect("**FP Concept: Immutability**\nData never changes."),
            CalloutVariant::Concept
        );
        assert_eq!(
            CalloutVariant::detect("**Note**: remember this"),
            CalloutVariant::Note
        );
        assert_eq!(
            CalloutVariant::detect("**Important**: do not skip"),
            CalloutVariant::Important
        );
        assert_eq!(
            CalloutVariant::detect("**Hint**: look at the docs"),
            CalloutVariant::Hint
        );
    }

    #[test]
    fn test_concept_wins_over_note() {
        let content = "**FP Concept: Pure Functions**\n**Note**: no side effects.";
        assert_eq!(CalloutVariant::detect(content), CalloutVariant::Concept);
    }

    #[test]
    fn test_priority_ignores_textual_order() {
        let content = "**Hint**: first in text\n**Important**: second in text";
        assert_eq!(CalloutVariant::detect(content), CalloutVariant::Important);
    }

    #[test]
    fn test_marker_anywhere_in_block() {
        assert_eq!(
            CalloutVariant::detect("Some lead-in.\n**Note:** trailing marker"),
            CalloutVariant::Note
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert_eq!(
            CalloutVariant::detect("**note**: lowercase"),
            CalloutVariant::Quote
        );
        assert_eq!(
            CalloutVariant::detect("Note without bold"),
            CalloutVariant::Quote
        );
    }

    #[test]
    fn test_tags_pair_up() {
        assert_eq!(CalloutVariant::Note.open_tag(), "<div class=\"note\">");
        assert_eq!(CalloutVariant::Note.close_tag(), "</div>");
        assert_eq!(
            CalloutVariant::Concept.open_tag(),
            "<blockquote class=\"fp-concept\">"
        );
        assert_eq!(CalloutVariant::Concept.close_tag(), "</blockquote>");
        assert_eq!(CalloutVariant::Quote.class(), None);
    }
}
