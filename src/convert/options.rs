//! Conversion options and page sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::LayoutOptions;
use crate::model::Rect;
use crate::render::StyleSheet;

/// A set of page numbers assembled from single pages, inclusive spans,
/// and an optional open tail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSet {
    /// Individual page numbers.
    pub pages: Vec<u32>,

    /// Inclusive spans `(first, last)`.
    pub spans: Vec<(u32, u32)>,

    /// Every page numbered here or higher.
    pub tail: Option<u32>,
}

impl PageSet {
    /// Create an empty page set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single page.
    pub fn page(mut self, number: u32) -> Self {
        self.pages.push(number);
        self
    }

    /// Add an inclusive span of pages.
    pub fn span(mut self, first: u32, last: u32) -> Self {
        self.spans.push((first, last));
        self
    }

    /// Add every page numbered `first` or higher.
    pub fn onward(mut self, first: u32) -> Self {
        self.tail = Some(match self.tail {
            Some(existing) => existing.min(first),
            None => first,
        });
        self
    }

    /// Whether the set contains a page number.
    pub fn contains(&self, number: u32) -> bool {
        self.pages.contains(&number)
            || self
                .spans
                .iter()
                .any(|(first, last)| (*first..=*last).contains(&number))
            || self.tail.is_some_and(|first| number >= first)
    }

    /// Whether the set matches no pages at all.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.spans.is_empty() && self.tail.is_none()
    }

    /// Parse a page set string: comma-separated single pages (`"2"`),
    /// inclusive spans (`"112-202"`), and open tails (`"326-"`).
    pub fn parse(s: &str) -> Result<Self> {
        let mut set = PageSet::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some((first, last)) = part.split_once('-') {
                let first: u32 = first
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidPageSet(part.to_string()))?;
                let last = last.trim();
                if last.is_empty() {
                    set = set.onward(first);
                } else {
                    let last: u32 = last
                        .parse()
                        .map_err(|_| Error::InvalidPageSet(part.to_string()))?;
                    if last < first {
                        return Err(Error::InvalidPageSet(part.to_string()));
                    }
                    set = set.span(first, last);
                }
            } else {
                let number: u32 = part
                    .parse()
                    .map_err(|_| Error::InvalidPageSet(part.to_string()))?;
                set = set.page(number);
            }
        }
        Ok(set)
    }
}

/// Options steering a document conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Layout thresholds.
    pub layout: LayoutOptions,

    /// Font markup classes and symbol substitutions.
    pub styles: StyleSheet,

    /// Pages converted to empty output: tables of contents and other
    /// non-convertible content.
    pub skip_pages: PageSet,

    /// Manually curated exclusion rects keyed by page number, unioned
    /// with each page's own painted rects.
    pub extra_exclusions: BTreeMap<u32, Vec<Rect>>,

    /// Convert pages on the rayon pool. Pages share only this read-only
    /// configuration, so parallel conversion is safe by construction.
    pub parallel: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            styles: StyleSheet::default(),
            skip_pages: PageSet::default(),
            extra_exclusions: BTreeMap::new(),
            parallel: true,
        }
    }
}

impl ConvertOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout thresholds.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the pages to skip.
    pub fn with_skip_pages(mut self, pages: PageSet) -> Self {
        self.skip_pages = pages;
        self
    }

    /// Add a manually curated exclusion rect for one page.
    pub fn exclude_rect(mut self, page: u32, rect: Rect) -> Self {
        self.extra_exclusions.entry(page).or_default().push(rect);
        self
    }

    /// Disable parallel page conversion.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_set_contains() {
        let set = PageSet::new().page(2).span(112, 202).span(227, 302).onward(326);

        assert!(set.contains(2));
        assert!(!set.contains(3));
        assert!(set.contains(112));
        assert!(set.contains(202));
        assert!(!set.contains(203));
        assert!(set.contains(300));
        assert!(set.contains(326));
        assert!(set.contains(9999));
        assert!(!set.contains(325));
    }

    #[test]
    fn test_page_set_parse() {
        let set = PageSet::parse("2, 112-202, 326-").unwrap();
        assert!(set.contains(2));
        assert!(set.contains(150));
        assert!(!set.contains(250));
        assert!(set.contains(400));

        assert!(PageSet::parse("").unwrap().is_empty());
        assert!(PageSet::parse("abc").is_err());
        assert!(PageSet::parse("10-5").is_err());
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_skip_pages(PageSet::new().page(2))
            .exclude_rect(24, Rect::new(41.0, 118.9, 552.0, 366.9))
            .sequential();

        assert!(options.skip_pages.contains(2));
        assert_eq!(options.extra_exclusions[&24].len(), 1);
        assert!(!options.parallel);
    }
}
