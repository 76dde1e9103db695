//! The `head` table: global font header.

use crate::error::{FontError, Result};
use crate::reader::Stream;
use std::io::{Read, Seek};

/// Fields of `head` the glyph pipeline needs.
#[derive(Clone, Copy, Debug)]
pub struct HeadTable {
  /// Units per em, the font's design grid resolution. Nonzero.
  pub units_per_em: u16,
  pub x_min: i16,
  pub y_min: i16,
  pub x_max: i16,
  pub y_max: i16,
  /// 0: `loca` stores u16 half-offsets; 1: u32 byte offsets.
  pub index_to_loc_format: i16,
}

impl HeadTable {
  /// Loads the table from its absolute offset in the source.
  pub fn load<R: Read + Seek>(stream: &mut Stream<R>, offset: u32) -> Result<Self> {
    stream.seek_to(offset)?;

    let _version = stream.read_i32()?;
    let _revision = stream.read_i32()?;
    let _checksum_adjustment = stream.read_u32()?;
    let _magic = stream.read_u32()?;
    let _flags = stream.read_u16()?;
    let units_per_em = stream.read_u16()?;
    stream.skip(16)?; // created + modified timestamps
    let x_min = stream.read_i16()?;
    let y_min = stream.read_i16()?;
    let x_max = stream.read_i16()?;
    let y_max = stream.read_i16()?;
    let _mac_style = stream.read_u16()?;
    let _lowest_rec_ppem = stream.read_u16()?;
    let _font_direction_hint = stream.read_i16()?;
    let index_to_loc_format = stream.read_i16()?;
    let _glyph_data_format = stream.read_i16()?;

    if units_per_em == 0 {
      return Err(FontError::unsupported("head: units-per-em is zero"));
    }
    if index_to_loc_format != 0 && index_to_loc_format != 1 {
      return Err(FontError::unsupported(format!(
        "head: unknown loca format {index_to_loc_format}"
      )));
    }

    Ok(Self {
      units_per_em,
      x_min,
      y_min,
      x_max,
      y_max,
      index_to_loc_format,
    })
  }
}
