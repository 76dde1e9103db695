//! sfnt table directory parsing and integrity verification.
//!
//! An sfnt file begins with a 12-byte offset subtable followed by one 16-byte
//! record per table. Individual table loaders live in the submodules:
//!
//! - `head` - font header (units per em, global bbox, loca format)
//! - `maxp` - maximum profile (glyph count, complexity limits)
//! - `cmap` - character to glyph index mapping
//! - `loca` - per-glyph offsets into `glyf`

pub mod cmap;
pub mod head;
pub mod loca;
pub mod maxp;

use crate::error::{FontError, Result};
use crate::reader::Stream;
use std::io::{Read, Seek};

/// A 4-byte tag identifying an sfnt table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableTag(pub [u8; 4]);

impl TableTag {
  pub const CMAP: Self = Self(*b"cmap");
  pub const GLYF: Self = Self(*b"glyf");
  pub const HEAD: Self = Self(*b"head");
  pub const HHEA: Self = Self(*b"hhea");
  pub const HMTX: Self = Self(*b"hmtx");
  pub const LOCA: Self = Self(*b"loca");
  pub const MAXP: Self = Self(*b"maxp");
  pub const NAME: Self = Self(*b"name");
  pub const POST: Self = Self(*b"post");

  pub const fn from_u32(value: u32) -> Self {
    Self(value.to_be_bytes())
  }

  pub const fn as_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
}

impl std::fmt::Display for TableTag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = std::str::from_utf8(&self.0).unwrap_or("????");
    write!(f, "{s}")
  }
}

impl std::fmt::Debug for TableTag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "TableTag('{self}')")
  }
}

/// A single entry in the sfnt table directory.
#[derive(Clone, Copy, Debug)]
pub struct TableRecord {
  pub tag: TableTag,
  pub checksum: u32,
  pub offset: u32,
  pub length: u32,
}

/// The parsed table directory of an sfnt container.
#[derive(Debug)]
pub struct TableDirectory {
  records: Vec<TableRecord>,
}

// Accepted scaler types. 'OTTO' and 'ttcf' are recognized but rejected.
const SCALER_TRUETYPE: u32 = 0x0001_0000;
const SCALER_TRUE: u32 = u32::from_be_bytes(*b"true");
const SCALER_OTTO: u32 = u32::from_be_bytes(*b"OTTO");
const SCALER_TTCF: u32 = u32::from_be_bytes(*b"ttcf");

impl TableDirectory {
  /// Parses the offset subtable and all table records from the start of the
  /// source.
  pub fn parse<R: Read + Seek>(stream: &mut Stream<R>) -> Result<Self> {
    stream.seek_to(0)?;

    let scaler = stream.read_u32()?;
    match scaler {
      SCALER_TRUETYPE | SCALER_TRUE => {}
      SCALER_OTTO => {
        return Err(FontError::unsupported("CFF outlines ('OTTO') are not supported"));
      }
      SCALER_TTCF => {
        return Err(FontError::unsupported("font collections ('ttcf') are not supported"));
      }
      other => {
        return Err(FontError::unsupported(format!(
          "not an sfnt font (scaler type 0x{other:08X})"
        )));
      }
    }

    let num_tables = stream.read_u16()?;
    let _search_range = stream.read_u16()?;
    let _entry_selector = stream.read_u16()?;
    let _range_shift = stream.read_u16()?;

    let mut records = Vec::with_capacity(num_tables as usize);
    for _ in 0..num_tables {
      let tag = TableTag::from_u32(stream.read_u32()?);
      let checksum = stream.read_u32()?;
      let offset = stream.read_u32()?;
      let length = stream.read_u32()?;
      records.push(TableRecord {
        tag,
        checksum,
        offset,
        length,
      });
    }

    Ok(Self { records })
  }

  /// Finds a table record by tag.
  pub fn find(&self, tag: TableTag) -> Option<&TableRecord> {
    self.records.iter().find(|record| record.tag == tag)
  }

  /// Finds a required table record, failing with `MissingTable`.
  pub fn require(&self, tag: TableTag) -> Result<&TableRecord> {
    self.find(tag).ok_or(FontError::MissingTable { tag })
  }

  pub fn records(&self) -> &[TableRecord] {
    &self.records
  }

  /// Recomputes every table's checksum and compares it against the directory.
  ///
  /// The `head` table is skipped; its `checkSumAdjustment` field makes the
  /// stored value unverifiable by the plain word sum.
  pub fn verify_checksums<R: Read + Seek>(&self, stream: &mut Stream<R>) -> Result<()> {
    for record in &self.records {
      if record.tag == TableTag::HEAD {
        continue;
      }
      stream.seek_to(record.offset)?;
      let bytes = stream.read_bytes(record.length as usize)?;
      if checksum(&bytes) != record.checksum {
        return Err(FontError::BadChecksum { tag: record.tag });
      }
    }
    Ok(())
  }
}

/// Sums a table's bytes as big-endian u32 words with wrap-around addition.
///
/// The table is zero-padded to a 4-byte boundary, matching how conforming
/// fonts pad tables in the file.
pub fn checksum(bytes: &[u8]) -> u32 {
  let mut sum = 0u32;
  let mut chunks = bytes.chunks_exact(4);
  for chunk in &mut chunks {
    let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    sum = sum.wrapping_add(word);
  }
  let rest = chunks.remainder();
  if !rest.is_empty() {
    let mut tail = [0u8; 4];
    tail[..rest.len()].copy_from_slice(rest);
    sum = sum.wrapping_add(u32::from_be_bytes(tail));
  }
  sum
}
