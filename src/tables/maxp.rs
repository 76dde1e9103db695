//! The `maxp` table: glyph count and complexity limits.

use crate::error::Result;
use crate::reader::Stream;
use std::io::{Read, Seek};

const VERSION_FULL: i32 = 0x0001_0000;

/// Compound recursion bound when the table predates the field or stores zero.
const DEFAULT_COMPONENT_DEPTH: u16 = 16;

/// Complexity limits from the version 1.0 profile.
///
/// A version 0.5 table (CFF fonts, or minimal test fonts) carries none of
/// these; defaults keep the pipeline bounded.
#[derive(Clone, Copy, Debug)]
pub struct ProfileLimits {
  pub max_points: u16,
  pub max_contours: u16,
  pub max_component_points: u16,
  pub max_component_contours: u16,
  /// Maximum nesting of compound glyph references.
  pub max_component_depth: u16,
}

impl Default for ProfileLimits {
  fn default() -> Self {
    Self {
      max_points: 0,
      max_contours: 0,
      max_component_points: 0,
      max_component_contours: 0,
      max_component_depth: DEFAULT_COMPONENT_DEPTH,
    }
  }
}

/// Fields of `maxp` the glyph pipeline needs.
#[derive(Clone, Copy, Debug)]
pub struct MaxpTable {
  pub num_glyphs: u16,
  pub limits: ProfileLimits,
}

impl MaxpTable {
  /// Loads the table from its absolute offset in the source.
  pub fn load<R: Read + Seek>(stream: &mut Stream<R>, offset: u32) -> Result<Self> {
    stream.seek_to(offset)?;

    let version = stream.read_i32()?;
    let num_glyphs = stream.read_u16()?;

    if version != VERSION_FULL {
      return Ok(Self {
        num_glyphs,
        limits: ProfileLimits::default(),
      });
    }

    let max_points = stream.read_u16()?;
    let max_contours = stream.read_u16()?;
    let max_component_points = stream.read_u16()?;
    let max_component_contours = stream.read_u16()?;
    let _max_zones = stream.read_u16()?;
    let _max_twilight_points = stream.read_u16()?;
    let _max_storage = stream.read_u16()?;
    let _max_function_defs = stream.read_u16()?;
    let _max_instruction_defs = stream.read_u16()?;
    let _max_stack_elements = stream.read_u16()?;
    let _max_instruction_size = stream.read_u16()?;
    let _max_component_elements = stream.read_u16()?;
    let mut max_component_depth = stream.read_u16()?;
    if max_component_depth == 0 {
      max_component_depth = DEFAULT_COMPONENT_DEPTH;
    }

    Ok(Self {
      num_glyphs,
      limits: ProfileLimits {
        max_points,
        max_contours,
        max_component_points,
        max_component_contours,
        max_component_depth,
      },
    })
  }
}
