//! Beginning-of-line classification.
//!
//! The first run of a line decides its structural role. Classification is
//! an ordered cascade with first-match-wins semantics, expressed as a
//! tagged [`LineRole`] rather than ad hoc string concatenation.

use regex::Regex;

use crate::error::Result;
use crate::layout::Run;

use super::{MarkupStyle, RunRenderer, StyleSheet};

/// Structural role of a line, decided by its first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRole {
    /// Top-level section heading. `anchor` is the captured section letter,
    /// or the literal text for the glossary heading.
    Heading1 {
        /// Anchor id fragment.
        anchor: String,
    },

    /// Second-level heading. `anchor` is the captured section code.
    Heading2 {
        /// Anchor id fragment.
        anchor: String,
    },

    /// Ordered list item. `marker` is the captured token (`"a."`),
    /// `body_start` the byte offset where the item text begins.
    OrderedItem {
        /// List marker including its period.
        marker: String,
        /// Offset of the item body within the run text.
        body_start: usize,
    },

    /// Bulleted list item; `body_start` as for ordered items.
    UnorderedItem {
        /// Offset of the item body within the run text.
        body_start: usize,
    },

    /// The whole line renders as a blockquote.
    Blockquote,

    /// Ordinary body text.
    Plain,
}

/// Classifies the first run of a line and renders its structural markup.
pub struct LineClassifier {
    renderer: RunRenderer,
    heading1: Regex,
    heading2: Regex,
    ordered: Regex,
    unordered: Regex,
}

impl LineClassifier {
    /// Create a classifier over a style sheet.
    pub fn new(styles: StyleSheet) -> Self {
        Self {
            renderer: RunRenderer::new(styles),
            heading1: Regex::new(r"^\s*([1-3]?[A-Z])\.\s+").unwrap(),
            heading2: Regex::new(r"^\s*([1-3]?[A-Z][0-9]+)\.\s+").unwrap(),
            ordered: Regex::new(r"^\s*([a-z1-9]\.)\s*").unwrap(),
            unordered: Regex::new(r"^\s*•\s+").unwrap(),
        }
    }

    /// The renderer used for non-heading roles, shared with the page
    /// pipeline for the rest of a line's runs.
    pub fn renderer(&self) -> &RunRenderer {
        &self.renderer
    }

    fn styles(&self) -> &StyleSheet {
        self.renderer.styles()
    }

    /// Classify a line's first run. First match wins.
    ///
    /// Style lookups here are deliberately non-fatal: the glossary and
    /// blockquote checks fall through on an unregistered font, and the
    /// renderer surfaces the missing entry when the text is actually
    /// rendered.
    pub fn classify(&self, text: &str, font: Option<&str>) -> LineRole {
        if let Some(caps) = self.heading1.captures(text) {
            return LineRole::Heading1 {
                anchor: caps[1].to_string(),
            };
        }
        let style = font.and_then(|f| self.styles().style(f));
        if text == "Glossary" && style == Some(MarkupStyle::Bold) {
            return LineRole::Heading1 {
                anchor: text.to_string(),
            };
        }
        if let Some(caps) = self.heading2.captures(text) {
            return LineRole::Heading2 {
                anchor: caps[1].to_string(),
            };
        }
        if let Some(caps) = self.ordered.captures(text) {
            return LineRole::OrderedItem {
                marker: caps[1].to_string(),
                body_start: caps.get(0).unwrap().end(),
            };
        }
        if let Some(found) = self.unordered.find(text) {
            return LineRole::UnorderedItem {
                body_start: found.end(),
            };
        }
        if style == Some(MarkupStyle::Quote) {
            return LineRole::Blockquote;
        }
        LineRole::Plain
    }

    /// Render the structural markup for a line's first run.
    ///
    /// Returns the rendered text plus the anchor fragment to append at
    /// the end of the line. Only heading roles produce an anchor; heading
    /// text itself bypasses the run renderer. List markers are re-rendered
    /// under the line's own font, so they pick up the same styling as the
    /// item body.
    pub fn line_start(&self, run: &Run) -> Result<(String, String)> {
        let font = run.font.as_deref();
        match self.classify(&run.text, font) {
            LineRole::Heading1 { anchor } => {
                Ok((format!("# {}", run.text), format!(" {{#a{anchor}}}")))
            }
            LineRole::Heading2 { anchor } => {
                Ok((format!("## {}", run.text), format!(" {{#a{anchor}}}")))
            }
            LineRole::OrderedItem { marker, body_start } => {
                let body = format!("{} {}", marker, &run.text[body_start..]);
                let rendered = self.renderer.render(&body, font)?;
                Ok((format!("\n{rendered}"), String::new()))
            }
            LineRole::UnorderedItem { body_start } => {
                let rendered = self.renderer.render(&run.text[body_start..], font)?;
                Ok((format!("\n-  {rendered}"), String::new()))
            }
            LineRole::Blockquote => {
                let rendered = self.renderer.render(&run.text, font)?;
                Ok((format!("> {rendered}"), String::new()))
            }
            LineRole::Plain => Ok((self.renderer.render(&run.text, font)?, String::new())),
        }
    }
}
