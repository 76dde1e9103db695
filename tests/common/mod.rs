//! Shared fixture builder: synthesizes complete TrueType fonts in memory.
//!
//! The built files carry the five required tables with correct directory
//! checksums, so they pass `Font::open` verification unmodified. Glyph
//! records use explicit word coordinates throughout; compact encodings are
//! covered by the unit tests against hand-written byte vectors.

#![allow(dead_code)]

use rastertype::tables::checksum;

pub fn be16(out: &mut Vec<u8>, value: u16) {
  out.extend_from_slice(&value.to_be_bytes());
}

pub fn be32(out: &mut Vec<u8>, value: u32) {
  out.extend_from_slice(&value.to_be_bytes());
}

/// Encodes a simple glyph from closed contours of `(on_curve, x, y)` points.
pub fn simple_glyph(contours: &[&[(bool, i16, i16)]]) -> Vec<u8> {
  let points: Vec<(bool, i16, i16)> = contours.iter().flat_map(|c| c.iter().copied()).collect();
  assert!(!points.is_empty());

  let x_min = points.iter().map(|p| p.1).min().unwrap();
  let y_min = points.iter().map(|p| p.2).min().unwrap();
  let x_max = points.iter().map(|p| p.1).max().unwrap();
  let y_max = points.iter().map(|p| p.2).max().unwrap();

  let mut out = Vec::new();
  be16(&mut out, contours.len() as u16);
  for value in [x_min, y_min, x_max, y_max] {
    be16(&mut out, value as u16);
  }

  let mut last = -1i32;
  for contour in contours {
    last += contour.len() as i32;
    be16(&mut out, last as u16);
  }
  be16(&mut out, 0); // no instructions

  // One flag byte per point: on-curve bit only, word deltas for x and y.
  for &(on_curve, _, _) in &points {
    out.push(if on_curve { 0x01 } else { 0x00 });
  }
  let mut prev = 0i16;
  for &(_, x, _) in &points {
    be16(&mut out, x.wrapping_sub(prev) as u16);
    prev = x;
  }
  prev = 0;
  for &(_, _, y) in &points {
    be16(&mut out, y.wrapping_sub(prev) as u16);
    prev = y;
  }

  if out.len() % 2 != 0 {
    out.push(0);
  }
  out
}

/// Encodes a compound glyph referencing `children` with word XY offsets.
pub fn compound_glyph(bbox: (i16, i16, i16, i16), children: &[(u16, i16, i16)]) -> Vec<u8> {
  let mut out = Vec::new();
  be16(&mut out, 0xFFFF); // numberOfContours = -1
  for value in [bbox.0, bbox.1, bbox.2, bbox.3] {
    be16(&mut out, value as u16);
  }
  for (i, &(glyph_id, dx, dy)) in children.iter().enumerate() {
    let more = if i + 1 < children.len() { 0x0020 } else { 0 };
    be16(&mut out, 0x0003 | more); // words, xy values
    be16(&mut out, glyph_id);
    be16(&mut out, dx as u16);
    be16(&mut out, dy as u16);
  }
  out
}

/// Builds a `cmap` table with one Unicode BMP format 4 subtable. Segments are
/// `(start, end, delta)`; the terminal 0xFFFF segment is appended.
pub fn format4_cmap(segments: &[(u16, u16, u16)]) -> Vec<u8> {
  let seg_count = segments.len() as u16 + 1;

  let mut sub = Vec::new();
  be16(&mut sub, 4); // format
  let length = 14 + (4 * seg_count + 1) * 2;
  be16(&mut sub, length);
  be16(&mut sub, 0); // language
  be16(&mut sub, seg_count * 2);
  for value in [0u16, 0, 0] {
    be16(&mut sub, value); // searchRange, entrySelector, rangeShift
  }
  for &(_, end, _) in segments {
    be16(&mut sub, end);
  }
  be16(&mut sub, 0xFFFF);
  be16(&mut sub, 0); // reservedPad
  for &(start, _, _) in segments {
    be16(&mut sub, start);
  }
  be16(&mut sub, 0xFFFF);
  for &(_, _, delta) in segments {
    be16(&mut sub, delta);
  }
  be16(&mut sub, 1);
  for _ in 0..seg_count {
    be16(&mut sub, 0); // idRangeOffset, delta path only
  }

  cmap_with_subtable(0, 3, sub)
}

/// Builds a `cmap` table with one Macintosh Roman format 6 subtable.
pub fn format6_cmap(first_code: u16, glyph_ids: &[u16]) -> Vec<u8> {
  let mut sub = Vec::new();
  be16(&mut sub, 6); // format
  be16(&mut sub, 10 + glyph_ids.len() as u16 * 2);
  be16(&mut sub, 0); // language
  be16(&mut sub, first_code);
  be16(&mut sub, glyph_ids.len() as u16);
  for &glyph_id in glyph_ids {
    be16(&mut sub, glyph_id);
  }

  cmap_with_subtable(1, 0, sub)
}

pub fn cmap_with_subtable(platform_id: u16, encoding_id: u16, subtable: Vec<u8>) -> Vec<u8> {
  let mut table = Vec::new();
  be16(&mut table, 0); // version
  be16(&mut table, 1); // one encoding record
  be16(&mut table, platform_id);
  be16(&mut table, encoding_id);
  be32(&mut table, 12);
  table.extend_from_slice(&subtable);
  table
}

pub fn head_table(upem: u16, loca_format: i16) -> Vec<u8> {
  let mut table = vec![0u8; 54];
  table[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes()); // version 1.0
  table[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magic
  table[18..20].copy_from_slice(&upem.to_be_bytes());
  table[40..42].copy_from_slice(&(upem as i16).to_be_bytes()); // xMax
  table[42..44].copy_from_slice(&(upem as i16).to_be_bytes()); // yMax
  table[50..52].copy_from_slice(&loca_format.to_be_bytes());
  table
}

pub fn maxp_table(num_glyphs: u16) -> Vec<u8> {
  let mut table = Vec::new();
  be32(&mut table, 0x0001_0000);
  be16(&mut table, num_glyphs);
  for value in [64u16, 8, 128, 16, 2, 0, 0, 0, 0, 64, 0, 4] {
    be16(&mut table, value);
  }
  be16(&mut table, 8); // maxComponentDepth
  table
}

pub fn loca_table(offsets: &[u32], format: i16) -> Vec<u8> {
  let mut table = Vec::new();
  for &offset in offsets {
    if format == 0 {
      be16(&mut table, (offset / 2) as u16);
    } else {
      be32(&mut table, offset);
    }
  }
  table
}

/// Assembles tagged tables into a complete sfnt file with a correct
/// directory. Tables are padded to 4-byte boundaries; checksums are computed
/// over the unpadded bytes as the verifier does.
pub fn assemble(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
  let num_tables = tables.len() as u16;
  let mut entry_selector = 0u16;
  while (2u16 << entry_selector) <= num_tables {
    entry_selector += 1;
  }
  let search_range = 16 * (1u16 << entry_selector);
  let range_shift = num_tables * 16 - search_range;

  let mut font = Vec::new();
  be32(&mut font, 0x0001_0000); // scaler type
  be16(&mut font, num_tables);
  be16(&mut font, search_range);
  be16(&mut font, entry_selector);
  be16(&mut font, range_shift);

  let mut offset = 12 + tables.len() as u32 * 16;
  for (tag, data) in tables {
    font.extend_from_slice(tag);
    be32(&mut font, checksum(data));
    be32(&mut font, offset);
    be32(&mut font, data.len() as u32);
    offset += (data.len() as u32 + 3) & !3;
  }
  for (_, data) in tables {
    font.extend_from_slice(data);
    while font.len() % 4 != 0 {
      font.push(0);
    }
  }
  font
}

/// Builds a complete font from glyph records and a prebuilt `cmap` table.
pub fn build_font(
  upem: u16,
  loca_format: i16,
  glyph_records: &[Vec<u8>],
  cmap: Vec<u8>,
) -> Vec<u8> {
  let mut glyf = Vec::new();
  let mut offsets = vec![0u32];
  for record in glyph_records {
    glyf.extend_from_slice(record);
    offsets.push(glyf.len() as u32);
  }

  assemble(&[
    (*b"cmap", cmap),
    (*b"glyf", glyf),
    (*b"head", head_table(upem, loca_format)),
    (*b"loca", loca_table(&offsets, loca_format)),
    (*b"maxp", maxp_table(glyph_records.len() as u16)),
  ])
}

/// Locates a table's `(offset, length)` in an assembled font by reading its
/// directory.
pub fn table_range(font: &[u8], tag: [u8; 4]) -> Option<(usize, usize)> {
  let num_tables = u16::from_be_bytes([font[4], font[5]]) as usize;
  for i in 0..num_tables {
    let record = 12 + i * 16;
    if font[record..record + 4] == tag {
      let offset = u32::from_be_bytes([
        font[record + 8],
        font[record + 9],
        font[record + 10],
        font[record + 11],
      ]) as usize;
      let length = u32::from_be_bytes([
        font[record + 12],
        font[record + 13],
        font[record + 14],
        font[record + 15],
      ]) as usize;
      return Some((offset, length));
    }
  }
  None
}

/// The S2 fixture: 1000 upem, glyph 1 is a 500-unit square, 'A' maps to it.
pub fn square_font() -> Vec<u8> {
  let square = simple_glyph(&[&[
    (true, 0, 0),
    (true, 500, 0),
    (true, 500, 500),
    (true, 0, 500),
  ]]);
  build_font(
    1000,
    1,
    &[Vec::new(), square],
    format4_cmap(&[(0x41, 0x41, 0xFFC0)]),
  )
}
