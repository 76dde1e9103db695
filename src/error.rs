//! Error types for font loading and glyph production.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations. Construction errors are fatal: a `Font` value
//! is only produced from a source that parsed and verified cleanly.

use crate::tables::TableTag;
use thiserror::Error;

/// Result type alias for font operations.
pub type Result<T> = std::result::Result<T, FontError>;

/// Errors surfaced while loading a font or producing a glyph.
#[derive(Error, Debug)]
pub enum FontError {
  /// Reading or seeking the byte source failed.
  #[error("font I/O failed: {0}")]
  Io(#[from] std::io::Error),

  /// A table's computed checksum disagreed with its directory record.
  ///
  /// The `head` table is exempt: its `checkSumAdjustment` field perturbs
  /// the sum by design of the format.
  #[error("checksum mismatch for table '{tag}'")]
  BadChecksum { tag: TableTag },

  /// One of the tables required for TrueType outlines is absent.
  #[error("required table '{tag}' is missing")]
  MissingTable { tag: TableTag },

  /// The font uses a feature outside the supported TrueType subset, or its
  /// internal cross-references are inconsistent.
  #[error("unsupported font data: {reason}")]
  Unsupported { reason: String },
}

impl FontError {
  pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
    FontError::Unsupported {
      reason: reason.into(),
    }
  }
}
