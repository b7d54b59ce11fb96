//! Page objects: rendered glyphs and painted geometry.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// One rendered character with its geometry, font, and fill color.
///
/// Produced entirely by the external extractor and consumed read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    /// Character text; usually a single character, possibly a space.
    pub text: String,

    /// Font identifier as reported by the extractor, including the
    /// document-generation subset prefix (e.g. `FCVRLH+Alegreya-Bold`).
    pub font_name: String,

    /// Left edge.
    pub x0: f64,

    /// Right edge.
    pub x1: f64,

    /// Bottom edge in the y-up frame.
    pub y0: f64,

    /// Top edge in the y-up frame.
    pub y1: f64,

    /// Top edge, measured down from the page top.
    pub top: f64,

    /// Bottom edge, measured down from the page top.
    pub bottom: f64,

    /// Top edge, measured down from the top of the whole document. The
    /// line clusterer keys on this.
    pub doctop: f64,

    /// Glyph height.
    pub height: f64,

    /// Fill (non-stroking) color components. Exactly four components
    /// signals a fully opaque glyph; anything else marks a transparent or
    /// otherwise special glyph.
    #[serde(default)]
    pub fill_color: Vec<f64>,
}

impl Glyph {
    /// Whether this glyph is a single space.
    pub fn is_space(&self) -> bool {
        self.text == " "
    }

    /// Glyph width.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// A painted line object. Wide horizontal rules separate the body text
/// from the footnote band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnLine {
    /// Left end.
    pub x0: f64,
    /// Right end.
    pub x1: f64,
    /// Top edge, from the page top.
    pub top: f64,
    /// Bottom edge, from the page top.
    pub bottom: f64,
}

impl DrawnLine {
    /// Horizontal extent of the line.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// A painted rectangle object. Rects stroked with a positive line width
/// become exclusion regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnRect {
    /// Left edge.
    pub x0: f64,
    /// Bottom edge in the y-up frame.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Top edge in the y-up frame.
    pub y1: f64,
    /// Top edge, from the page top.
    pub top: f64,
    /// Bottom edge, from the page top.
    pub bottom: f64,
    /// Stroke width the rectangle was painted with.
    pub line_width: f64,
}

impl DrawnRect {
    /// The exclusion region this rectangle covers, in the y-up frame.
    pub fn region(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }
}

/// Any object the extractor reports on a page.
///
/// The glyph filters pass non-glyph objects through untouched; painted
/// geometry is still needed downstream for footer and exclusion handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageObject {
    /// A rendered character.
    Glyph(Glyph),

    /// A painted line.
    Line(DrawnLine),

    /// A painted rectangle.
    Rect(DrawnRect),
}

impl PageObject {
    /// The glyph inside, if this object is one.
    pub fn as_glyph(&self) -> Option<&Glyph> {
        match self {
            PageObject::Glyph(glyph) => Some(glyph),
            _ => None,
        }
    }

    /// Whether this object is a rendered character.
    pub fn is_glyph(&self) -> bool {
        matches!(self, PageObject::Glyph(_))
    }

    /// Object extent in the y-down frame: `(x0, top, x1, bottom)`.
    pub fn frame(&self) -> (f64, f64, f64, f64) {
        match self {
            PageObject::Glyph(g) => (g.x0, g.top, g.x1, g.bottom),
            PageObject::Line(l) => (l.x0, l.top, l.x1, l.bottom),
            PageObject::Rect(r) => (r.x0, r.top, r.x1, r.bottom),
        }
    }

    /// Shift the object horizontally by `dx`.
    pub fn shift_x(&mut self, dx: f64) {
        match self {
            PageObject::Glyph(g) => {
                g.x0 += dx;
                g.x1 += dx;
            }
            PageObject::Line(l) => {
                l.x0 += dx;
                l.x1 += dx;
            }
            PageObject::Rect(r) => {
                r.x0 += dx;
                r.x1 += dx;
            }
        }
    }
}
