//! Winding-number rasterization of scaled outlines.
//!
//! The scaled outline is a pure polygon, so filling reduces to a point-in-
//! polygon test per pixel: cast a horizontal ray from the sample point and
//! accumulate the signed crossings of every contour segment. A nonzero total
//! means the point is inside. Points lying exactly on a segment count as
//! inside, and horizontal segments never contribute winding.

use crate::glyph::Glyph;
use crate::outline::Outline;

// Far enough right to leave any glyph's bounding box.
const RAY_REACH: f32 = 65535.0;

#[derive(Debug, Clone, Copy)]
struct Segment {
  x1: f32,
  y1: f32,
  x2: f32,
  y2: f32,
  /// +1 ascending in y, -1 descending, 0 horizontal.
  winding: i32,
}

impl Segment {
  fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
    let winding = if y1 < y2 {
      1
    } else if y1 > y2 {
      -1
    } else {
      0
    };
    Self {
      x1,
      y1,
      x2,
      y2,
      winding,
    }
  }

  /// True when `(px, py)` lies on the segment: collinear and within its
  /// bounding box.
  fn contains(&self, px: f32, py: f32) -> bool {
    orient(self.x1, self.y1, self.x2, self.y2, px, py) == 0.0
      && within(self.x1, self.y1, self.x2, self.y2, px, py)
  }

  /// Standard two-segment intersection test against the ray from `(px, py)`
  /// to `(px + RAY_REACH, py)`. Collinear endpoint touches count as
  /// crossings.
  fn crossed_by_ray(&self, px: f32, py: f32) -> bool {
    let qx = px + RAY_REACH;
    let qy = py;
    let d1 = orient(px, py, qx, qy, self.x1, self.y1);
    let d2 = orient(px, py, qx, qy, self.x2, self.y2);
    let d3 = orient(self.x1, self.y1, self.x2, self.y2, px, py);
    let d4 = orient(self.x1, self.y1, self.x2, self.y2, qx, qy);

    if ((d1 < 0.0 && d2 > 0.0) || (d1 > 0.0 && d2 < 0.0))
      && ((d3 < 0.0 && d4 > 0.0) || (d3 > 0.0 && d4 < 0.0))
    {
      return true;
    }
    d1 == 0.0 && within(px, py, qx, qy, self.x1, self.y1)
      || d2 == 0.0 && within(px, py, qx, qy, self.x2, self.y2)
      || d3 == 0.0 && within(self.x1, self.y1, self.x2, self.y2, px, py)
      || d4 == 0.0 && within(self.x1, self.y1, self.x2, self.y2, qx, qy)
  }
}

/// 2D orientation predicate: the cross product of `a->b` and `a->c`.
fn orient(ax: f32, ay: f32, bx: f32, by: f32, cx: f32, cy: f32) -> f32 {
  (cx - ax) * (by - ay) - (bx - ax) * (cy - ay)
}

fn within(ax: f32, ay: f32, bx: f32, by: f32, px: f32, py: f32) -> bool {
  ax.min(bx) <= px && ax.max(bx) >= px && ay.min(by) <= py && ay.max(by) >= py
}

/// Fills a scaled outline into an 8-bit bitmap.
///
/// The raster is `ceil(xMax - xMin)` by `ceil(yMax - yMin)` pixels; the
/// sample point for pixel `(x, y)` is world `(x + xMin, y + yMin)` with row 0
/// at the bottom. An outline with no segments produces a 0x0 glyph.
pub fn rasterize(outline: &Outline<f32>) -> Glyph {
  let segments = build_segments(outline);
  if segments.is_empty() {
    return Glyph::empty();
  }

  let width = (outline.x_max - outline.x_min).ceil().max(0.0) as u16;
  let height = (outline.y_max - outline.y_min).ceil().max(0.0) as u16;
  if width == 0 || height == 0 {
    return Glyph::empty();
  }

  let mut pixels = vec![0u8; width as usize * height as usize];
  for y in 0..height {
    for x in 0..width {
      let px = f32::from(x) + outline.x_min;
      let py = f32::from(y) + outline.y_min;

      let mut winding = 0i32;
      let mut on_boundary = false;
      for segment in &segments {
        if segment.contains(px, py) {
          on_boundary = true;
          break;
        }
        if segment.crossed_by_ray(px, py) {
          winding += segment.winding;
        }
      }

      if on_boundary || winding != 0 {
        pixels[y as usize * width as usize + x as usize] = 255;
      }
    }
  }

  Glyph::new((width, height), pixels)
}

/// One directed segment per consecutive point pair, plus the closing segment
/// of each contour.
fn build_segments(outline: &Outline<f32>) -> Vec<Segment> {
  let mut segments = Vec::new();
  for component in &outline.components {
    for (begin, end) in component.contour_ranges() {
      for cur in begin..end {
        let a = component.points[cur];
        let b = component.points[cur + 1];
        segments.push(Segment::new(a.x, a.y, b.x, b.y));
      }
      let a = component.points[end];
      let b = component.points[begin];
      segments.push(Segment::new(a.x, a.y, b.x, b.y));
    }
  }
  segments
}
