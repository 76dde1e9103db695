//! The `loca` table: per-glyph byte ranges inside `glyf`.

use crate::error::{FontError, Result};
use crate::reader::Stream;
use std::io::{Read, Seek};

/// Loads `num_glyphs + 1` offsets; entry `i..i+1` delimits glyph `i`.
///
/// Format 0 stores u16 half-offsets (doubled on read), format 1 stores u32
/// byte offsets. Offsets must be monotonically non-decreasing and bounded by
/// the `glyf` blob length; a violation is `Unsupported` rather than a later
/// out-of-bounds access.
pub fn load<R: Read + Seek>(
  stream: &mut Stream<R>,
  offset: u32,
  num_glyphs: u16,
  format: i16,
  glyf_len: usize,
) -> Result<Vec<u32>> {
  stream.seek_to(offset)?;

  let count = num_glyphs as usize + 1;
  let mut offsets = Vec::with_capacity(count);
  if format == 0 {
    for _ in 0..count {
      offsets.push(u32::from(stream.read_u16()?) * 2);
    }
  } else {
    for _ in 0..count {
      offsets.push(stream.read_u32()?);
    }
  }

  let mut previous = 0u32;
  for &entry in &offsets {
    if entry < previous {
      return Err(FontError::unsupported("loca: offsets are not monotonic"));
    }
    if entry as usize > glyf_len {
      return Err(FontError::unsupported("loca: offset exceeds glyf length"));
    }
    previous = entry;
  }

  Ok(offsets)
}
