//! Big-endian reading over a seekable byte source.
//!
//! All multi-byte sfnt values are stored big-endian. The stream assembles
//! host values with `from_be_bytes` so behavior is identical on any platform.
//! Short reads and failed seeks surface as [`FontError::Io`].

use crate::error::Result;
use std::io::{Read, Seek, SeekFrom};

/// A positioned big-endian reader over any `Read + Seek` source.
///
/// All I/O for a font happens through this type during construction; glyph
/// production afterwards works on in-memory tables only.
pub struct Stream<R> {
  inner: R,
}

impl<R: Read + Seek> Stream<R> {
  pub fn new(inner: R) -> Self {
    Self { inner }
  }

  /// Seeks to an absolute byte offset from the start of the source.
  pub fn seek_to(&mut self, offset: u32) -> Result<()> {
    self.inner.seek(SeekFrom::Start(u64::from(offset)))?;
    Ok(())
  }

  /// Skips `count` bytes forward from the current position.
  pub fn skip(&mut self, count: u32) -> Result<()> {
    self.inner.seek(SeekFrom::Current(i64::from(count)))?;
    Ok(())
  }

  pub fn read_u8(&mut self) -> Result<u8> {
    let mut buf = [0u8; 1];
    self.inner.read_exact(&mut buf)?;
    Ok(buf[0])
  }

  pub fn read_u16(&mut self) -> Result<u16> {
    let mut buf = [0u8; 2];
    self.inner.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
  }

  pub fn read_i16(&mut self) -> Result<i16> {
    let mut buf = [0u8; 2];
    self.inner.read_exact(&mut buf)?;
    Ok(i16::from_be_bytes(buf))
  }

  pub fn read_u32(&mut self) -> Result<u32> {
    let mut buf = [0u8; 4];
    self.inner.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
  }

  pub fn read_i32(&mut self) -> Result<i32> {
    let mut buf = [0u8; 4];
    self.inner.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
  }

  /// Reads exactly `len` bytes into a fresh buffer.
  pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    self.inner.read_exact(&mut buf)?;
    Ok(buf)
  }
}
