//! Layout analysis: glyph filtering, line clustering, run collation.

mod cluster;
mod collate;
mod filter;
mod options;

pub use cluster::{cluster_by, lines_of};
pub use collate::{collate_line, Run};
pub use filter::{keeps_body_text, no_footnote, no_oversize, opaque_fill};
pub use options::LayoutOptions;
