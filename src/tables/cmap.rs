//! The `cmap` table: character code to glyph index mapping.
//!
//! Only the subset needed for TrueType-outline text is decoded: format 4
//! (segmented, sparse BMP coverage) and format 6 (trimmed dense array). The
//! encoding records are walked in a fixed preference order and the first
//! subtable that yields a non-empty mapping wins.

use crate::error::{FontError, Result};
use crate::reader::Stream;
use rustc_hash::FxHashMap;
use std::io::{Read, Seek};

/// Decoded character-to-glyph mapping. Keys are the code points the selected
/// encoding covers, not necessarily dense.
pub type CharMap = FxHashMap<u16, u16>;

/// Accepted encodings, in preference order:
/// Unicode BMP (format 4), Macintosh Roman (format 6), Windows BMP (format 4).
const PREFERENCES: [(u16, u16, u16, u16); 3] = [(0, 3, 4, 0), (1, 0, 6, 0), (3, 1, 4, 0)];

struct EncodingRecord {
  platform_id: u16,
  encoding_id: u16,
  offset: u32,
}

/// Selects an encoding and decodes its subtable into a `CharMap`.
///
/// Fails with `Unsupported` when no acceptable encoding produces a non-empty
/// mapping.
pub fn load<R: Read + Seek>(stream: &mut Stream<R>, table_offset: u32) -> Result<CharMap> {
  stream.seek_to(table_offset)?;
  let _version = stream.read_u16()?;
  let record_count = stream.read_u16()?;

  let mut records = Vec::with_capacity(record_count as usize);
  for _ in 0..record_count {
    records.push(EncodingRecord {
      platform_id: stream.read_u16()?,
      encoding_id: stream.read_u16()?,
      offset: stream.read_u32()?,
    });
  }

  for (platform_id, encoding_id, format, language) in PREFERENCES {
    for record in &records {
      if record.platform_id != platform_id || record.encoding_id != encoding_id {
        continue;
      }
      let Some(subtable_offset) = table_offset.checked_add(record.offset) else {
        continue;
      };
      stream.seek_to(subtable_offset)?;
      let subtable_format = stream.read_u16()?;
      let length = stream.read_u16()?;
      let subtable_language = stream.read_u16()?;
      if subtable_format != format || subtable_language != language {
        continue;
      }

      let map = match subtable_format {
        4 => decode_format4(stream, length)?,
        6 => decode_format6(stream)?,
        _ => continue,
      };
      if !map.is_empty() {
        return Ok(map);
      }
    }
  }

  Err(FontError::unsupported("cmap: no acceptable encoding found"))
}

/// Segmented sparse mapping. The stream is positioned right after the
/// format/length/language header words.
fn decode_format4<R: Read + Seek>(stream: &mut Stream<R>, length: u16) -> Result<CharMap> {
  let seg_count_x2 = stream.read_u16()?;
  let _search_range = stream.read_u16()?;
  let _entry_selector = stream.read_u16()?;
  let _range_shift = stream.read_u16()?;
  let seg_count = (seg_count_x2 / 2) as usize;

  // Everything past the 14-byte header is one u16 array: endCode[segCount],
  // a reserved pad, startCode[segCount], idDelta[segCount],
  // idRangeOffset[segCount], then glyphIdArray.
  let var_len = (length as usize).saturating_sub(14) / 2;
  let mut var = Vec::with_capacity(var_len);
  for _ in 0..var_len {
    var.push(stream.read_u16()?);
  }
  let word = |index: usize| -> Result<u16> {
    var
      .get(index)
      .copied()
      .ok_or_else(|| FontError::unsupported("cmap: truncated format 4 subtable"))
  };

  let mut map = CharMap::default();
  for i in 0..seg_count {
    let end_code = word(i)?;
    if end_code == 0xFFFF {
      continue;
    }
    let start_code = word(seg_count + 1 + i)?;
    let id_delta = word(2 * seg_count + 1 + i)?;
    let id_range_offset = word(3 * seg_count + 1 + i)?;
    if start_code > end_code {
      continue;
    }

    for code in start_code..=end_code {
      let glyph = if id_range_offset == 0 {
        // idDelta addition is modulo 65536, so unsigned wrapping works.
        code.wrapping_add(id_delta)
      } else {
        // The offset is relative to the idRangeOffset entry itself.
        let index =
          3 * seg_count + 1 + i + (id_range_offset / 2) as usize + (code - start_code) as usize;
        word(index)?
      };
      if glyph != 0 {
        map.entry(code).or_insert(glyph);
      }
    }
  }

  Ok(map)
}

/// Trimmed dense mapping. The stream is positioned right after the
/// format/length/language header words.
fn decode_format6<R: Read + Seek>(stream: &mut Stream<R>) -> Result<CharMap> {
  let first_code = stream.read_u16()?;
  let entry_count = stream.read_u16()?;

  let mut map = CharMap::default();
  for k in 0..entry_count {
    let glyph = stream.read_u16()?;
    let code = u32::from(first_code) + u32::from(k);
    let Ok(code) = u16::try_from(code) else {
      break;
    };
    if glyph != 0 {
      map.entry(code).or_insert(glyph);
    }
  }

  Ok(map)
}
