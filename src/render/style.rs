//! Style sheet: font markup classes and symbol substitutions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Markup treatment of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    /// Body text, no delimiters.
    Plain,
    /// Emphasized text wrapped in the bold delimiter.
    Bold,
    /// Emphasized text wrapped in the italic delimiter.
    Italic,
    /// Rendered through the symbol substitution map instead of delimiters.
    Symbol,
    /// Body text that the line classifier renders as a blockquote.
    Quote,
}

impl MarkupStyle {
    /// Markdown delimiter wrapped around styled runs.
    pub fn delimiter(&self) -> &'static str {
        match self {
            MarkupStyle::Bold => "**",
            MarkupStyle::Italic => "_",
            MarkupStyle::Plain | MarkupStyle::Quote | MarkupStyle::Symbol => "",
        }
    }

    /// Markup-equivalence class used by the run collator.
    ///
    /// `Plain` and `Quote` share a class: both render with the empty
    /// delimiter, and quoting is a line-level decision, not a run-level
    /// one.
    pub fn class(&self) -> MarkupClass {
        match self {
            MarkupStyle::Plain | MarkupStyle::Quote => MarkupClass::Unstyled,
            MarkupStyle::Bold => MarkupClass::Bold,
            MarkupStyle::Italic => MarkupClass::Italic,
            MarkupStyle::Symbol => MarkupClass::Symbol,
        }
    }
}

/// Equivalence class of a font under the style sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupClass {
    /// No delimiters.
    Unstyled,
    /// Bold delimiters.
    Bold,
    /// Italic delimiters.
    Italic,
    /// Symbol substitution.
    Symbol,
}

fn default_prefix_len() -> usize {
    7
}

/// Read-only mapping from font identifiers to markup styles, plus the
/// symbol substitutions for the designated symbol font.
///
/// The tables are contractually exhaustive for the document set being
/// converted; a missing entry is a fatal configuration error. Inject a
/// style sheet into the pipeline rather than reaching for globals, so
/// tests can substitute their own tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// Normalized font identifier to markup style.
    pub fonts: HashMap<String, MarkupStyle>,

    /// Symbol font substitutions.
    pub symbols: HashMap<char, char>,

    /// Length of the document-generation subset prefix (`FCVRLH+`) in
    /// front of every reported font identifier.
    pub prefix_len: usize,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            fonts: HashMap::new(),
            symbols: HashMap::new(),
            prefix_len: default_prefix_len(),
        }
    }
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a font identifier to a markup style.
    pub fn with_font(mut self, name: impl Into<String>, style: MarkupStyle) -> Self {
        self.fonts.insert(name.into(), style);
        self
    }

    /// Add a symbol substitution.
    pub fn with_symbol(mut self, character: char, substitute: char) -> Self {
        self.symbols.insert(character, substitute);
        self
    }

    /// Set the generation prefix length.
    pub fn with_prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = len;
        self
    }

    /// Strip the generation prefix from a reported font identifier.
    ///
    /// Identifiers shorter than the prefix normalize to the empty string
    /// and fail the style lookup, which is the contract for identifiers
    /// outside the configured document set.
    pub fn normalize<'a>(&self, font_name: &'a str) -> &'a str {
        font_name.get(self.prefix_len..).unwrap_or("")
    }

    /// Markup style of a normalized font identifier.
    pub fn style_of(&self, font: &str) -> Result<MarkupStyle> {
        self.fonts
            .get(font)
            .copied()
            .ok_or_else(|| Error::UnknownFont(font.to_string()))
    }

    /// Non-fatal style lookup, for checks that fall through to another
    /// classification instead of failing.
    pub fn style(&self, font: &str) -> Option<MarkupStyle> {
        self.fonts.get(font).copied()
    }

    /// Substitute for a character of the symbol font.
    pub fn symbol_for(&self, character: char) -> Result<char> {
        self.symbols
            .get(&character)
            .copied()
            .ok_or(Error::UnknownSymbol(character))
    }

    /// Decode a style sheet from JSON.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}
