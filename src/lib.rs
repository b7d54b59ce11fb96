//! # glyphdown
//!
//! Layout-driven recovery of styled Markdown from positioned glyph
//! streams.
//!
//! Paginated documents often carry their structure implicitly: headings,
//! lists, blockquotes, emphasis, and cross-references are encoded in font
//! choice and spatial layout rather than in any explicit markup. This
//! library takes the per-character output of an external extractor (each
//! glyph with its position, size, font, and color) and rebuilds that
//! structure as Markdown.
//!
//! ## Pipeline
//!
//! For every logical page: filter noise glyphs (footnotes, decorations,
//! transparent text), cluster the survivors into visual lines, collate
//! each line into style-homogeneous runs, classify the first run for its
//! structural role, render runs with delimiters, symbol substitutions,
//! and cross-reference links, and separate paragraphs on vertical gaps.
//!
//! ## Quick Start
//!
//! ```
//! use glyphdown::{convert_document, ConvertOptions, MarkupStyle, Page, StyleSheet};
//!
//! fn main() -> glyphdown::Result<()> {
//!     let styles = StyleSheet::new()
//!         .with_font("Alegreya-Regular", MarkupStyle::Plain)
//!         .with_font("Alegreya-Bold", MarkupStyle::Bold);
//!     let options = ConvertOptions::new().with_styles(styles);
//!
//!     let pages = vec![Page::new(4, 595.0, 842.0)];
//!     let markdown = convert_document(&pages, &options)?;
//!     assert!(markdown.contains("[comment4]: # (page 4)"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structure recovery**: headings with anchors, ordered and
//!   unordered lists, blockquotes, bold and italic runs
//! - **Cross-references**: structural codes become inline links to the
//!   matching heading anchors
//! - **Symbol fonts**: per-character substitution tables
//! - **Noise control**: footnote, decoration, and transparency filters,
//!   exclusion rectangles, footer rules, facing-page margins
//! - **Parallel conversion**: pages convert independently on rayon
//! - **Plain JSON boundary**: pages and style sheets are serde models

pub mod convert;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

pub use convert::{
    convert_document, convert_page, duplicate_anchors, ConvertOptions, PageConverter, PageSet,
};
pub use error::{Error, Result};
pub use layout::{cluster_by, collate_line, lines_of, LayoutOptions, Run};
pub use model::{BBox, DrawnLine, DrawnRect, Glyph, Page, PageObject, Rect};
pub use render::{LineClassifier, LineRole, MarkupClass, MarkupStyle, RunRenderer, StyleSheet};

use std::io::Read;

/// Decode a page dump produced by an external extractor.
///
/// The dump is a JSON array of [`Page`] values.
///
/// # Example
///
/// ```
/// let pages = glyphdown::pages_from_json(
///     r#"[{"number": 4, "width": 595.0, "height": 842.0, "objects": []}]"#,
/// ).unwrap();
/// assert_eq!(pages[0].number, 4);
/// ```
pub fn pages_from_json(data: &str) -> Result<Vec<Page>> {
    Ok(serde_json::from_str(data)?)
}

/// Decode a page dump from a reader.
pub fn pages_from_reader<R: Read>(reader: R) -> Result<Vec<Page>> {
    Ok(serde_json::from_reader(reader)?)
}
