//! Scaling from font units to device units.
//!
//! The scale factor is `reso / (72 * upem)` where `reso` is the product of
//! point size and dots-per-inch. Scaling also flattens the outline: implied
//! on-curve points between consecutive off-curve points are resolved, and
//! every quadratic Bezier is tessellated into line segments, so the scaled
//! outline is a pure polygon.

use crate::outline::{Component, GlyphPoint, Outline};

/// Scales an integer outline to device units at resolution `reso`.
///
/// On-curve points map directly; each off-curve point becomes the interior
/// samples of its Bezier arc, with the endpoints contributed by the
/// neighboring on-curve points (explicit or implied) so contours stay
/// continuous without duplicate vertices.
pub fn scale_outline(source: &Outline<i16>, reso: u32, upem: u16) -> Outline<f32> {
  let factor = reso as f32 / (72.0 * f32::from(upem));

  let mut scaled = Outline {
    x_min: f32::from(source.x_min) * factor,
    y_min: f32::from(source.y_min) * factor,
    x_max: f32::from(source.x_max) * factor,
    y_max: f32::from(source.y_max) * factor,
    components: Vec::with_capacity(source.components.len()),
  };
  for component in &source.components {
    scaled.components.push(scale_component(component, factor));
  }
  scaled
}

fn scale_component(component: &Component<i16>, factor: f32) -> Component<f32> {
  let mut scaled = Component::default();

  for (begin, end) in component.contour_ranges() {
    let emitted_before = scaled.points.len();

    for cur in begin..=end {
      let p1 = component.points[cur];
      if p1.on_curve {
        scaled.points.push(GlyphPoint {
          on_curve: true,
          x: f32::from(p1.x) * factor,
          y: f32::from(p1.y) * factor,
        });
        continue;
      }

      // Neighbors wrap around the contour.
      let p0 = component.points[if cur == begin { end } else { cur - 1 }];
      let p2 = component.points[if cur == end { begin } else { cur + 1 }];

      let x1 = f32::from(p1.x) * factor;
      let y1 = f32::from(p1.y) * factor;
      // An off-curve neighbor contributes the implied on-curve midpoint.
      let (x0, y0) = if p0.on_curve {
        (f32::from(p0.x) * factor, f32::from(p0.y) * factor)
      } else {
        (
          (f32::from(p0.x) * factor + x1) * 0.5,
          (f32::from(p0.y) * factor + y1) * 0.5,
        )
      };
      let (x2, y2) = if p2.on_curve {
        (f32::from(p2.x) * factor, f32::from(p2.y) * factor)
      } else {
        (
          (x1 + f32::from(p2.x) * factor) * 0.5,
          (y1 + f32::from(p2.y) * factor) * 0.5,
        )
      };

      // Segment count scales with the control polygon length.
      let len01 = ((x1 - x0) * (x1 - x0) + (y1 - y0) * (y1 - y0)).sqrt();
      let len12 = ((x2 - x1) * (x2 - x1) + (y2 - y1) * (y2 - y1)).sqrt();
      let segments = ((len01 + len12) * 0.25).round().max(4.0) as u32;

      // B(t) = (1-t)^2 P0 + 2t(1-t) P1 + t^2 P2, interior samples only.
      for i in 1..segments {
        let t = i as f32 / segments as f32;
        let a = (1.0 - t) * (1.0 - t);
        let b = 2.0 * t * (1.0 - t);
        let c = t * t;
        scaled.points.push(GlyphPoint {
          on_curve: true,
          x: a * x0 + b * x1 + c * x2,
          y: a * y0 + b * y1 + c * y2,
        });
      }
    }

    if scaled.points.len() > emitted_before {
      scaled.contour_ends.push((scaled.points.len() - 1) as u16);
    }
  }

  scaled
}
