//! Page-level model.

use serde::{Deserialize, Serialize};

use super::geometry::BBox;
use super::glyph::{DrawnLine, DrawnRect, Glyph, PageObject};

/// One logical page, the unit of conversion.
///
/// The page number is global: it encodes the source document and the
/// physical position, and its parity decides which side carries the
/// binding margin in a facing-page layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Global page number.
    pub number: u32,

    /// Page width in points.
    pub width: f64,

    /// Page height in points.
    pub height: f64,

    /// Every object the extractor reported on this page.
    #[serde(default)]
    pub objects: Vec<PageObject>,
}

impl Page {
    /// Create an empty page with the given dimensions.
    pub fn new(number: u32, width: f64, height: f64) -> Self {
        Self {
            number,
            width,
            height,
            objects: Vec::new(),
        }
    }

    /// Create a page with its object list.
    pub fn with_objects(number: u32, width: f64, height: f64, objects: Vec<PageObject>) -> Self {
        Self {
            number,
            width,
            height,
            objects,
        }
    }

    /// Add an object to the page.
    pub fn push(&mut self, object: PageObject) {
        self.objects.push(object);
    }

    /// The rendered characters on this page.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.objects.iter().filter_map(PageObject::as_glyph)
    }

    /// The painted lines on this page.
    pub fn drawn_lines(&self) -> impl Iterator<Item = &DrawnLine> {
        self.objects.iter().filter_map(|o| match o {
            PageObject::Line(line) => Some(line),
            _ => None,
        })
    }

    /// The painted rectangles on this page.
    pub fn drawn_rects(&self) -> impl Iterator<Item = &DrawnRect> {
        self.objects.iter().filter_map(|o| match o {
            PageObject::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// Number of rendered characters on the page.
    pub fn glyph_count(&self) -> usize {
        self.glyphs().count()
    }

    /// Whether the page has no objects at all.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// A restricted view containing only the objects fully inside `bbox`.
    ///
    /// Coordinates are left untouched so that everything downstream keeps
    /// comparing in one absolute frame; only the object set and the view
    /// dimensions change.
    pub fn crop(&self, bbox: &BBox) -> Page {
        let objects = self
            .objects
            .iter()
            .filter(|object| {
                let (x0, top, x1, bottom) = object.frame();
                bbox.contains(x0, top, x1, bottom)
            })
            .cloned()
            .collect();
        Page {
            number: self.number,
            width: bbox.x1 - bbox.x0,
            height: bbox.bottom - bbox.top,
            objects,
        }
    }

    /// Split a physical sheet into its two facing logical pages, dropping
    /// a band of `footer_band` points from the bottom of the sheet.
    ///
    /// The right half is re-based so that both logical pages present
    /// their content in an origin-0 horizontal frame, which is what the
    /// page pipeline's margin arithmetic expects. Both halves keep this
    /// page's number; the caller assigns the global numbering scheme.
    pub fn halves(&self, footer_band: f64) -> (Page, Page) {
        let cut = self.width / 2.0;
        let usable = self.height - footer_band;
        let left = self.crop(&BBox::new(0.0, 0.0, cut, usable));
        let mut right = self.crop(&BBox::new(cut, 0.0, self.width, usable));
        for object in &mut right.objects {
            object.shift_x(-cut);
        }
        (left, right)
    }
}
