//! Page pipeline and document driver.
//!
//! [`PageConverter`] runs the per-page stages in order: exclusion check,
//! footer detection, margin cropping, glyph filtering, line clustering,
//! run collation, classification, rendering, and paragraph segmentation.
//! [`convert_document`] drives a page sequence through it, optionally in
//! parallel.

mod options;

pub use options::{ConvertOptions, PageSet};

use std::cmp::Ordering;
use std::collections::HashSet;

use rayon::prelude::*;
use regex::Regex;

use crate::error::Result;
use crate::layout::{collate_line, keeps_body_text, lines_of};
use crate::model::{BBox, Glyph, Page, PageObject, Rect};
use crate::render::LineClassifier;

/// Converts logical pages into Markdown blocks.
pub struct PageConverter {
    options: ConvertOptions,
    classifier: LineClassifier,
}

impl PageConverter {
    /// Create a converter over a set of options.
    pub fn new(options: ConvertOptions) -> Self {
        let classifier = LineClassifier::new(options.styles.clone());
        Self {
            options,
            classifier,
        }
    }

    /// The options this converter runs with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert one logical page into its Markdown block.
    ///
    /// A page in the skip set yields the empty string regardless of its
    /// content. Every other page yields its boundary comment followed by
    /// the rendered lines.
    pub fn convert_page(&self, page: &Page) -> Result<String> {
        if self.options.skip_pages.contains(page.number) {
            log::debug!("page {} skipped by page set", page.number);
            return Ok(String::new());
        }
        let layout = &self.options.layout;

        // Footer boundary: the lowest sufficiently wide painted rule, or
        // the page bottom when no such rule exists.
        let footer_top = page
            .drawn_lines()
            .filter(|line| line.width() > layout.rule_min_width)
            .map(|line| line.top)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .unwrap_or(page.height);

        // Facing pages reserve the binding margin on opposite sides.
        let bbox = if page.number % 2 == 0 {
            BBox::new(layout.margin_width, 0.0, page.width, footer_top)
        } else {
            BBox::new(0.0, 0.0, page.width - layout.margin_width, footer_top)
        };
        let body = page.crop(&bbox);

        let glyphs: Vec<Glyph> = body
            .objects
            .iter()
            .filter(|object| keeps_body_text(object, layout))
            .filter_map(PageObject::as_glyph)
            .cloned()
            .collect();

        let mut exclusions: Vec<Rect> = page
            .drawn_rects()
            .filter(|rect| rect.line_width > 0.0)
            .map(|rect| rect.region())
            .collect();
        if let Some(extra) = self.options.extra_exclusions.get(&page.number) {
            exclusions.extend(extra.iter().copied());
        }

        let lines = lines_of(glyphs, layout.line_tolerance);
        log::debug!(
            "page {}: {} lines, {} exclusion rects, footer at {}",
            page.number,
            lines.len(),
            exclusions.len(),
            footer_top
        );

        let mut output = format!("\n[comment{0}]: # (page {0})\n\n", page.number);
        let mut previous_y0: Option<f64> = None;
        for line in lines {
            // The line's first glyph stands in for the whole line, both
            // for exclusion testing and for the paragraph gap.
            let first = &line[0];
            if exclusions
                .iter()
                .any(|rect| rect.contains_box(first.x0, first.y0, first.x1, first.y1))
            {
                continue;
            }
            let line_top = first.y1;
            let line_bottom = first.y0;
            if let Some(previous) = previous_y0 {
                if line_top + layout.paragraph_gap < previous {
                    output.push('\n');
                }
            }

            let runs = collate_line(line, &self.options.styles)?;
            let (markup, anchor) = self.classifier.line_start(&runs[0])?;
            output.push_str(&markup);
            for run in &runs[1..] {
                output.push_str(
                    &self
                        .classifier
                        .renderer()
                        .render(&run.text, run.font.as_deref())?,
                );
            }
            output.push_str(&anchor);
            output.push('\n');
            previous_y0 = Some(line_bottom);
        }
        Ok(output)
    }
}

/// Convert one logical page with a fresh converter.
pub fn convert_page(page: &Page, options: &ConvertOptions) -> Result<String> {
    PageConverter::new(options.clone()).convert_page(page)
}

/// Convert a page sequence into one Markdown document.
///
/// Pages are converted independently, in parallel on the rayon pool when
/// the options allow it, and concatenated in input order. The assembled
/// document is then checked for duplicate anchors; collisions are logged,
/// never fatal. The first conversion error aborts the run.
pub fn convert_document(pages: &[Page], options: &ConvertOptions) -> Result<String> {
    let converter = PageConverter::new(options.clone());
    let blocks: Vec<String> = if options.parallel && pages.len() > 1 {
        pages
            .par_iter()
            .map(|page| converter.convert_page(page))
            .collect::<Result<_>>()?
    } else {
        pages
            .iter()
            .map(|page| converter.convert_page(page))
            .collect::<Result<_>>()?
    };

    let document = blocks.concat();
    for anchor in duplicate_anchors(&document) {
        log::warn!("duplicate anchor {{#{anchor}}} in document output");
    }
    Ok(document)
}

/// Anchor ids that appear more than once in a rendered document.
///
/// Anchors are asserted unique by document convention but nothing
/// upstream validates that; collisions make cross-reference links
/// ambiguous, so the driver surfaces them without failing the run.
pub fn duplicate_anchors(document: &str) -> Vec<String> {
    let anchor = Regex::new(r"\{#(a[^}]+)\}").unwrap();
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for caps in anchor.captures_iter(document) {
        let id = caps[1].to_string();
        if !seen.insert(id.clone()) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MarkupStyle;
    use crate::render::StyleSheet;

    fn sheet() -> StyleSheet {
        StyleSheet::new()
            .with_font("Serif-Regular", MarkupStyle::Plain)
            .with_font("Serif-Bold", MarkupStyle::Bold)
    }

    fn options() -> ConvertOptions {
        ConvertOptions::new().with_styles(sheet()).sequential()
    }

    /// A glyph placed by left edge and top offset on a 842pt tall page.
    fn glyph(text: &str, font: &str, x0: f64, top: f64) -> PageObject {
        let height = 10.0;
        PageObject::Glyph(Glyph {
            text: text.to_string(),
            font_name: format!("ABCDEF+{font}"),
            x0,
            x1: x0 + 5.0,
            y0: 842.0 - top - height,
            y1: 842.0 - top,
            top,
            bottom: top + height,
            doctop: top,
            height,
            fill_color: vec![0.0, 0.0, 0.0, 1.0],
        })
    }

    fn word(page: &mut Page, text: &str, font: &str, x0: f64, top: f64) {
        for (i, ch) in text.chars().enumerate() {
            page.push(glyph(&ch.to_string(), font, x0 + 5.0 * i as f64, top));
        }
    }

    #[test]
    fn test_page_boundary_comment() {
        let mut page = Page::new(5, 595.0, 842.0);
        word(&mut page, "hello", "Serif-Regular", 100.0, 50.0);

        let block = convert_page(&page, &options()).unwrap();
        assert!(block.starts_with("\n[comment5]: # (page 5)\n\n"));
        assert!(block.ends_with("hello\n"));
    }

    #[test]
    fn test_skipped_page_is_empty() {
        let mut page = Page::new(2, 595.0, 842.0);
        word(&mut page, "contents", "Serif-Regular", 100.0, 50.0);

        let opts = options().with_skip_pages(PageSet::new().page(2));
        assert_eq!(convert_page(&page, &opts).unwrap(), "");
    }

    #[test]
    fn test_paragraph_gap_inserts_blank_line() {
        let mut page = Page::new(5, 595.0, 842.0);
        word(&mut page, "one", "Serif-Regular", 100.0, 50.0);
        // Bottom of line one sits at top 60; a 14pt gap beats the 3pt
        // threshold.
        word(&mut page, "two", "Serif-Regular", 100.0, 74.0);

        let block = convert_page(&page, &options()).unwrap();
        assert!(block.contains("one\n\ntwo\n"));
    }

    #[test]
    fn test_small_gap_keeps_paragraph_together() {
        let mut page = Page::new(5, 595.0, 842.0);
        word(&mut page, "one", "Serif-Regular", 100.0, 50.0);
        // 12pt line pitch: gap of 2pt, inside the threshold.
        word(&mut page, "two", "Serif-Regular", 100.0, 62.0);

        let block = convert_page(&page, &options()).unwrap();
        assert!(block.contains("one\ntwo\n"));
        assert!(!block.contains("one\n\ntwo"));
    }

    #[test]
    fn test_duplicate_anchor_detection() {
        let document = "# A. One {#aA}\ntext\n# A. Again {#aA}\n## A1. Sub {#aA1}\n";
        assert_eq!(duplicate_anchors(document), vec!["aA".to_string()]);
        assert!(duplicate_anchors("# A. One {#aA}\n").is_empty());
    }
}
