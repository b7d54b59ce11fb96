//! Run collation: merging a line's glyphs into style-homogeneous runs.

use std::cmp::Ordering;

use crate::error::Result;
use crate::model::Glyph;
use crate::render::StyleSheet;

/// A maximal subsequence of a line's glyphs sharing one markup class.
///
/// `font` is the established normalized font identifier. It is `None`
/// only when the run consists entirely of spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// The run text, glyphs concatenated in left-to-right order.
    pub text: String,

    /// Normalized identifier of the font that established the run style.
    pub font: Option<String>,
}

impl Run {
    /// Create a run.
    pub fn new(text: impl Into<String>, font: Option<String>) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// Collate a clustered line into its ordered runs.
///
/// Glyphs are ordered by right edge, then folded left to right. A glyph
/// joins the current run when the run has no established font yet, when
/// it is a space, or when its font maps to the same markup class as the
/// run's font; otherwise the run closes and a new one opens. Spaces never
/// break a run and never update the established font, so a styled word
/// followed by a space and a differently styled word produces exactly two
/// runs with the space attached to the first.
///
/// Font identifiers are normalized by stripping the generation prefix
/// before the style lookup; an identifier missing from the style sheet is
/// a fatal [`crate::Error::UnknownFont`].
pub fn collate_line(mut glyphs: Vec<Glyph>, styles: &StyleSheet) -> Result<Vec<Run>> {
    glyphs.sort_by(|a, b| a.x1.partial_cmp(&b.x1).unwrap_or(Ordering::Equal));

    let mut runs = Vec::new();
    let mut text = String::new();
    let mut font: Option<String> = None;

    for glyph in &glyphs {
        let glyph_font = styles.normalize(&glyph.font_name);
        let joins = match &font {
            None => true,
            Some(run_font) => {
                glyph.is_space()
                    || styles.style_of(run_font)?.class() == styles.style_of(glyph_font)?.class()
            }
        };
        if joins {
            text.push_str(&glyph.text);
        } else {
            runs.push(Run::new(std::mem::take(&mut text), font.clone()));
            text.push_str(&glyph.text);
        }
        if !glyph.is_space() {
            font = Some(glyph_font.to_string());
        }
    }
    runs.push(Run::new(text, font));
    Ok(runs)
}
