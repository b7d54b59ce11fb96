//! Error types for the glyphdown library.

use std::io;
use thiserror::Error;

/// Result type alias for glyphdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while recovering markup from a glyph stream.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a page dump or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A page dump or style sheet could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A font identifier is missing from the style sheet.
    ///
    /// The style tables are contractually exhaustive for the document set
    /// being converted, so this is a configuration defect, not a
    /// recoverable condition.
    #[error("Unknown font style: {0:?}")]
    UnknownFont(String),

    /// A symbol-font character has no entry in the substitution map.
    #[error("No symbol substitution for {0:?}")]
    UnknownSymbol(char),

    /// A page set specification could not be parsed.
    #[error("Invalid page set: {0}")]
    InvalidPageSet(String),
}
