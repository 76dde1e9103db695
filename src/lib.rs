//! TrueType glyph rasterization
//!
//! This crate loads sfnt-container TrueType fonts and renders individual
//! characters into 8-bit grayscale bitmaps. The pipeline:
//!
//! 1. **Parse**: sfnt directory, checksum verification, and the five tables
//!    TrueType outlines require (`cmap`, `glyf`, `head`, `loca`, `maxp`)
//! 2. **Fetch**: decode a simple or compound glyph description into contours
//!    of on/off-curve points in font units
//! 3. **Scale**: map font units to device units, resolving implied on-curve
//!    points and tessellating quadratic Beziers into polygons
//! 4. **Rasterize**: fill the polygon with the nonzero winding rule
//!
//! Hinting, kerning, OpenType layout, and CFF outlines are out of scope.
//!
//! # Module Organization
//!
//! - `font` - `Font` loading and the glyph production entry point
//! - `tables` - sfnt directory, checksums, and per-table loaders
//! - `reader` - big-endian reads over a seekable source
//! - `glyf` - glyph description decoding
//! - `outline` - the contour data model shared across the pipeline
//! - `scale` - font-unit to device-unit conversion and tessellation
//! - `raster` - winding-number fill
//! - `glyph` - the bitmap value handed to callers
//!
//! # Example
//!
//! ```rust,ignore
//! use rastertype::Font;
//!
//! let font = Font::open("DejaVuSans.ttf")?;
//! let glyph = font.glyph('A' as u32, 24, 72)?;
//! let (width, height) = glyph.extent();
//! println!("{width}x{height}, {} bytes", glyph.data().len());
//! ```

pub mod error;
pub mod font;
pub mod glyf;
pub mod glyph;
pub mod outline;
pub mod raster;
pub mod reader;
pub mod scale;
pub mod tables;

pub use error::{FontError, Result};
pub use font::Font;
pub use glyph::Glyph;
pub use outline::{Component, GlyphPoint, Outline};
pub use tables::TableTag;
