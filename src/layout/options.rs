//! Layout thresholds.

use serde::{Deserialize, Serialize};

/// Numeric thresholds steering the layout stages.
///
/// The defaults match the document family this pipeline was tuned on;
/// every threshold has a builder setter so other documents can adjust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Vertical tolerance when clustering glyphs into lines. Glyphs whose
    /// baseline keys chain within this distance share one visual line.
    pub line_tolerance: f64,

    /// Minimum vertical gap between consecutive lines that starts a new
    /// paragraph.
    pub paragraph_gap: f64,

    /// Glyphs below this height are dropped as footnote text.
    pub min_glyph_height: f64,

    /// Glyphs above this height are dropped as oversized decoration.
    pub max_glyph_height: f64,

    /// Painted lines wider than this mark the footer boundary.
    pub rule_min_width: f64,

    /// Width of the binding margin reserved on the facing side.
    pub margin_width: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_tolerance: 3.0,
            paragraph_gap: 3.0,
            min_glyph_height: 6.0,
            max_glyph_height: 20.0,
            rule_min_width: 400.0,
            margin_width: 128.0,
        }
    }
}

impl LayoutOptions {
    /// Create layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line clustering tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f64) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the paragraph gap threshold.
    pub fn with_paragraph_gap(mut self, gap: f64) -> Self {
        self.paragraph_gap = gap;
        self
    }

    /// Set the footnote height floor.
    pub fn with_min_glyph_height(mut self, height: f64) -> Self {
        self.min_glyph_height = height;
        self
    }

    /// Set the decorative height ceiling.
    pub fn with_max_glyph_height(mut self, height: f64) -> Self {
        self.max_glyph_height = height;
        self
    }

    /// Set the footer rule width threshold.
    pub fn with_rule_min_width(mut self, width: f64) -> Self {
        self.rule_min_width = width;
        self
    }

    /// Set the binding margin width.
    pub fn with_margin_width(mut self, width: f64) -> Self {
        self.margin_width = width;
        self
    }
}
