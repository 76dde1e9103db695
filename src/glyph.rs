//! The rasterized glyph bitmap a caller owns.

/// An 8-bit grayscale glyph bitmap.
///
/// Pixels are row-major with y increasing upward: row 0 is the bottom row of
/// the glyph, matching TrueType's y-up coordinate space. There is no padding
/// between rows. Value 0 is outside the outline, 255 inside.
///
/// The buffer is exclusively owned and independent of the `Font` that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
  extent: (u16, u16),
  pixels: Vec<u8>,
}

impl Glyph {
  pub(crate) fn new(extent: (u16, u16), pixels: Vec<u8>) -> Self {
    debug_assert_eq!(pixels.len(), extent.0 as usize * extent.1 as usize);
    Self { extent, pixels }
  }

  pub(crate) fn empty() -> Self {
    Self {
      extent: (0, 0),
      pixels: Vec::new(),
    }
  }

  /// Bitmap dimensions as `(width, height)` in pixels.
  pub fn extent(&self) -> (u16, u16) {
    self.extent
  }

  /// The pixel buffer, `width * height` bytes.
  pub fn data(&self) -> &[u8] {
    &self.pixels
  }

  /// True for glyphs with no ink, such as the space or an unmapped code
  /// point.
  pub fn is_empty(&self) -> bool {
    self.pixels.is_empty()
  }
}
