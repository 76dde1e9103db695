//! Glyph outline representation.
//!
//! An outline is one or more components, each holding closed contours of
//! points. The element type is generic over the two spaces the pipeline works
//! in: `i16` font units straight out of `glyf`, and `f32` device units after
//! scaling.

/// A single contour point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPoint<T> {
  /// True when the contour passes through the point; false for a quadratic
  /// Bezier control point.
  pub on_curve: bool,
  pub x: T,
  pub y: T,
}

/// One connected piece of a glyph.
///
/// `contour_ends[k]` is the index of the last point of contour `k`; contours
/// are implicitly closed back to their first point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Component<T> {
  pub contour_ends: Vec<u16>,
  pub points: Vec<GlyphPoint<T>>,
}

impl<T> Component<T> {
  /// Iterates `(first, last)` point-index pairs, one per contour.
  pub fn contour_ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut begin = 0usize;
    self.contour_ends.iter().map(move |&end| {
      let range = (begin, end as usize);
      begin = end as usize + 1;
      range
    })
  }
}

/// A complete glyph outline with its bounding box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline<T> {
  pub x_min: T,
  pub y_min: T,
  pub x_max: T,
  pub y_max: T,
  pub components: Vec<Component<T>>,
}

impl<T> Outline<T> {
  /// True when there is nothing to rasterize.
  pub fn is_empty(&self) -> bool {
    self.components.iter().all(|c| c.points.is_empty())
  }
}
