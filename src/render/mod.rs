//! Markup rendering: style sheets, run rendering, line classification.

mod classify;
mod markup;
mod style;

pub use classify::{LineClassifier, LineRole};
pub use markup::RunRenderer;
pub use style::{MarkupClass, MarkupStyle, StyleSheet};
