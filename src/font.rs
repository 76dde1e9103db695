//! Font loading and the glyph production entry point.
//!
//! `Font::open` performs all I/O up front: it parses the sfnt directory,
//! verifies table checksums, and decodes the tables TrueType outlines need
//! into owned memory. The resulting value is immutable, so read-only glyph
//! queries may run concurrently from multiple threads.

use crate::error::{FontError, Result};
use crate::glyf::GlyphSource;
use crate::glyph::Glyph;
use crate::outline::Outline;
use crate::raster::rasterize;
use crate::reader::Stream;
use crate::scale::scale_outline;
use crate::tables::cmap::CharMap;
use crate::tables::head::HeadTable;
use crate::tables::maxp::{MaxpTable, ProfileLimits};
use crate::tables::{cmap, loca, TableDirectory, TableTag};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Tables required for TrueType outline support, in reporting order.
const REQUIRED_TABLES: [TableTag; 5] = [
  TableTag::CMAP,
  TableTag::GLYF,
  TableTag::HEAD,
  TableTag::LOCA,
  TableTag::MAXP,
];

/// A loaded TrueType font.
///
/// Construction reads and validates the whole font; afterwards glyph
/// production is pure computation over the in-memory tables.
///
/// # Examples
///
/// ```rust,ignore
/// use rastertype::Font;
///
/// let font = Font::open("DejaVuSans.ttf")?;
/// let glyph = font.glyph('g' as u32, 24, 96)?;
/// let (width, height) = glyph.extent();
/// ```
pub struct Font {
  units_per_em: u16,
  bbox: (i16, i16, i16, i16),
  glyph_count: u16,
  limits: ProfileLimits,
  cmap: CharMap,
  loca: Vec<u32>,
  glyf: Vec<u8>,
}

impl Font {
  /// Opens and loads a font file.
  pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
    let file = File::open(path)?;
    Self::from_reader(BufReader::new(file))
  }

  /// Loads a font from any seekable byte source.
  ///
  /// The source is read once, during this call.
  pub fn from_reader<R: Read + Seek>(source: R) -> Result<Self> {
    let mut stream = Stream::new(source);

    let directory = TableDirectory::parse(&mut stream)?;
    directory.verify_checksums(&mut stream)?;
    for tag in REQUIRED_TABLES {
      directory.require(tag)?;
    }

    let head_record = *directory.require(TableTag::HEAD)?;
    let maxp_record = *directory.require(TableTag::MAXP)?;
    let cmap_record = *directory.require(TableTag::CMAP)?;
    let glyf_record = *directory.require(TableTag::GLYF)?;
    let loca_record = *directory.require(TableTag::LOCA)?;

    let head = HeadTable::load(&mut stream, head_record.offset)?;
    let maxp = MaxpTable::load(&mut stream, maxp_record.offset)?;
    let cmap = cmap::load(&mut stream, cmap_record.offset)?;

    // Raw glyph descriptions, padded to an even length so 16-bit reads at
    // even offsets stay in bounds.
    stream.seek_to(glyf_record.offset)?;
    let mut glyf = stream.read_bytes(glyf_record.length as usize)?;
    if glyf.len() % 2 != 0 {
      glyf.push(0);
    }

    let loca = loca::load(
      &mut stream,
      loca_record.offset,
      maxp.num_glyphs,
      head.index_to_loc_format,
      glyf.len(),
    )?;

    if cmap.values().any(|&glyph| glyph >= maxp.num_glyphs) {
      return Err(FontError::unsupported(
        "cmap: mapping targets a glyph index past the glyph count",
      ));
    }

    Ok(Self {
      units_per_em: head.units_per_em,
      bbox: (head.x_min, head.y_min, head.x_max, head.y_max),
      glyph_count: maxp.num_glyphs,
      limits: maxp.limits,
      cmap,
      loca,
      glyf,
    })
  }

  /// Resolves a code point to its glyph index, if the selected encoding
  /// covers it.
  pub fn glyph_index(&self, code_point: u32) -> Option<u16> {
    let code = u16::try_from(code_point).ok()?;
    self.cmap.get(&code).copied()
  }

  /// Produces the bitmap of a character at `points` size and `dpi`
  /// resolution (72 dpi makes one point one pixel).
  ///
  /// An unmapped code point yields an empty 0x0 glyph. `Unsupported` is only
  /// returned for glyph descriptions outside the supported subset, such as
  /// point-match compound composition.
  pub fn glyph(&self, code_point: u32, points: u16, dpi: u16) -> Result<Glyph> {
    let outline = match self.glyph_index(code_point) {
      Some(glyph_id) => {
        let source = GlyphSource::new(&self.glyf, &self.loca, self.limits.max_component_depth);
        source.outline(glyph_id)?
      }
      None => Outline::default(),
    };

    let reso = u32::from(points) * u32::from(dpi);
    let scaled = scale_outline(&outline, reso, self.units_per_em);
    Ok(rasterize(&scaled))
  }

  /// Units per em, the design grid resolution.
  pub fn units_per_em(&self) -> u16 {
    self.units_per_em
  }

  /// Number of glyphs in the font.
  pub fn glyph_count(&self) -> u16 {
    self.glyph_count
  }

  /// Font-global bounding box as `(xMin, yMin, xMax, yMax)` in font units.
  pub fn bounding_box(&self) -> (i16, i16, i16, i16) {
    self.bbox
  }

  /// Number of code points the selected cmap encoding covers.
  pub fn mapped_chars(&self) -> usize {
    self.cmap.len()
  }

  /// Complexity limits from the `maxp` profile.
  pub fn limits(&self) -> &ProfileLimits {
    &self.limits
  }
}

impl std::fmt::Debug for Font {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Font")
      .field("units_per_em", &self.units_per_em)
      .field("bbox", &self.bbox)
      .field("glyph_count", &self.glyph_count)
      .field("mapped_chars", &self.cmap.len())
      .field("glyf_len", &self.glyf.len())
      .finish()
  }
}
