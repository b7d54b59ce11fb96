//! Glyph filtering predicates.
//!
//! Each predicate passes non-glyph objects through untouched; painted
//! geometry is still needed downstream for footer and exclusion handling.
//! All predicates are pure.

use crate::model::PageObject;

use super::LayoutOptions;

/// Drop undersized footnote glyphs. Spaces survive regardless of height
/// so word boundaries reach the run collator.
pub fn no_footnote(object: &PageObject, options: &LayoutOptions) -> bool {
    match object {
        PageObject::Glyph(glyph) => {
            glyph.height >= options.min_glyph_height || glyph.is_space()
        }
        _ => true,
    }
}

/// Drop oversized decorative glyphs.
pub fn no_oversize(object: &PageObject, options: &LayoutOptions) -> bool {
    match object {
        PageObject::Glyph(glyph) => glyph.height <= options.max_glyph_height,
        _ => true,
    }
}

/// Drop transparent glyphs. A fill color with exactly four components is
/// fully opaque; anything else marks a transparent or special glyph.
pub fn opaque_fill(object: &PageObject) -> bool {
    match object {
        PageObject::Glyph(glyph) => glyph.fill_color.len() == 4,
        _ => true,
    }
}

/// Composition of all three predicates: the glyphs that belong to the
/// main content stream.
pub fn keeps_body_text(object: &PageObject, options: &LayoutOptions) -> bool {
    no_footnote(object, options) && no_oversize(object, options) && opaque_fill(object)
}
