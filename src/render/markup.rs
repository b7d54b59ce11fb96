//! Run rendering: delimiters, symbol substitution, cross-reference links.

use regex::Regex;

use crate::error::Result;

use super::{MarkupStyle, StyleSheet};

/// Renders one style run as Markdown.
pub struct RunRenderer {
    styles: StyleSheet,
    link: Regex,
}

impl RunRenderer {
    /// Create a renderer over a style sheet.
    pub fn new(styles: StyleSheet) -> Self {
        Self {
            styles,
            // A structural code: optional numeric prefix, one capital
            // letter, one or two digits, not preceded by an alphanumeric.
            link: Regex::new(r"(^|[^A-Za-z0-9])([1-3]?[A-Z][1-9][0-9]?)").unwrap(),
        }
    }

    /// The style sheet this renderer reads.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Render a run under its established font.
    ///
    /// Whitespace-only text is returned unchanged for any font.
    /// Symbol-font text is substituted character by character; a character
    /// missing from the map is a fatal [`crate::Error::UnknownSymbol`].
    /// Anything else is wrapped in the font's delimiter, with two
    /// adjustments: a lone non-alphanumeric character stays undelimited
    /// (Markdown mistreats `**.**` and friends), and a leading or trailing
    /// space is re-attached outside the delimiter envelope so the
    /// delimiters always hug non-space text. Structural codes inside the
    /// text are rewritten as inline links to their anchors.
    pub fn render(&self, text: &str, font: Option<&str>) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let font = font.unwrap_or("");
        if self.styles.style(font) == Some(MarkupStyle::Symbol) {
            return text.chars().map(|ch| self.styles.symbol_for(ch)).collect();
        }

        let trimmed = text.trim();
        let lone_punctuation = trimmed.chars().count() == 1
            && !trimmed.chars().next().is_some_and(char::is_alphanumeric);
        // The delimiter lookup is the fatal one, and it only happens when
        // a delimiter can actually be emitted.
        let delimiter = if lone_punctuation {
            ""
        } else {
            self.styles.style_of(font)?.delimiter()
        };

        let linked = self.link.replace_all(text, "${1}[${2}](#a${2})");

        let mut rendered = String::new();
        if text.starts_with(' ') {
            rendered.push(' ');
        }
        rendered.push_str(delimiter);
        rendered.push_str(linked.trim());
        rendered.push_str(delimiter);
        if text.ends_with(' ') {
            rendered.push(' ');
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> RunRenderer {
        RunRenderer::new(
            StyleSheet::new()
                .with_font("Serif-Regular", MarkupStyle::Plain)
                .with_font("Serif-Bold", MarkupStyle::Bold)
                .with_font("Serif-Italic", MarkupStyle::Italic)
                .with_font("Astromark", MarkupStyle::Symbol)
                .with_symbol('C', '♀')
                .with_symbol('D', '☿')
                .with_symbol(' ', ' '),
        )
    }

    #[test]
    fn test_whitespace_only_is_unchanged() {
        let r = renderer();
        assert_eq!(r.render("   ", Some("Serif-Bold")).unwrap(), "   ");
        // Even when no font was established.
        assert_eq!(r.render(" ", None).unwrap(), " ");
    }

    #[test]
    fn test_plain_and_styled_wrapping() {
        let r = renderer();
        assert_eq!(r.render("word", Some("Serif-Regular")).unwrap(), "word");
        assert_eq!(r.render("word", Some("Serif-Bold")).unwrap(), "**word**");
        assert_eq!(r.render("word", Some("Serif-Italic")).unwrap(), "_word_");
    }

    #[test]
    fn test_edge_spaces_stay_outside_the_envelope() {
        let r = renderer();
        assert_eq!(r.render(" word", Some("Serif-Bold")).unwrap(), " **word**");
        assert_eq!(r.render("word ", Some("Serif-Bold")).unwrap(), "**word** ");
        assert_eq!(
            r.render(" word ", Some("Serif-Italic")).unwrap(),
            " _word_ "
        );
    }

    #[test]
    fn test_lone_punctuation_suppresses_delimiters() {
        let r = renderer();
        assert_eq!(r.render(".", Some("Serif-Bold")).unwrap(), ".");
        assert_eq!(r.render(" ) ", Some("Serif-Italic")).unwrap(), " ) ");
        // A lone alphanumeric still gets its delimiter.
        assert_eq!(r.render("a", Some("Serif-Bold")).unwrap(), "**a**");
        // Suppression happens before the delimiter lookup, so a lone
        // punctuation glyph renders even under an unregistered font.
        assert_eq!(r.render(".", Some("Serif-Wild")).unwrap(), ".");
    }

    #[test]
    fn test_symbol_substitution() {
        let r = renderer();
        assert_eq!(r.render("C D", Some("Astromark")).unwrap(), "♀ ☿");
    }

    #[test]
    fn test_symbol_substitution_is_total() {
        let r = renderer();
        let err = r.render("CZ", Some("Astromark")).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownSymbol('Z')));
    }

    #[test]
    fn test_structural_code_becomes_link() {
        let r = renderer();
        assert_eq!(
            r.render("see A1 for details", Some("Serif-Regular")).unwrap(),
            "see [A1](#aA1) for details"
        );
        // Lead-in character preserved, code unchanged.
        assert_eq!(
            r.render("(3B12)", Some("Serif-Regular")).unwrap(),
            "([3B12](#a3B12))"
        );
        // Code at the start of the run.
        assert_eq!(
            r.render("A1 opens", Some("Serif-Regular")).unwrap(),
            "[A1](#aA1) opens"
        );
    }

    #[test]
    fn test_code_must_not_follow_alphanumeric() {
        let r = renderer();
        assert_eq!(
            r.render("pilotA1", Some("Serif-Regular")).unwrap(),
            "pilotA1"
        );
    }

    #[test]
    fn test_links_inside_styled_run() {
        let r = renderer();
        assert_eq!(
            r.render("rule B2 applies", Some("Serif-Bold")).unwrap(),
            "**rule [B2](#aB2) applies**"
        );
    }

    #[test]
    fn test_unknown_font_is_fatal() {
        let r = renderer();
        assert!(matches!(
            r.render("word", Some("Serif-Wild")),
            Err(crate::Error::UnknownFont(_))
        ));
    }
}
