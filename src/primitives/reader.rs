// src/primitives/reader.rs
use crate::error::{JtError, Result};
use crate::primitives::options::{Int64Assembly, ReaderOptions};
use crate::primitives::Decode;
use crate::types::ByteOrder;
use crate::utils::{decode_latin1, decode_utf16_lossy};
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use std::io::{ErrorKind, Read, Seek, SeekFrom};

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Position-tracked, byte-order aware reader over a seekable source.
///
/// The cursor is the source's own stream position. The source length is
/// taken once at construction and every read is checked against it, so a
/// read that would run off the end fails without moving the cursor.
///
/// # Example
///
/// ```
/// use jt_rs::{ByteOrder, PrimitiveReader};
/// use std::io::Cursor;
///
/// let mut reader = PrimitiveReader::new(Cursor::new(vec![1u8, 0, 1, 0])).unwrap();
/// assert_eq!(reader.read_u16().unwrap(), 1);
///
/// reader.set_byte_order(ByteOrder::MostSignificantFirst);
/// assert_eq!(reader.read_u16().unwrap(), 256);
/// ```
#[derive(Debug)]
pub struct PrimitiveReader<R> {
    source: R,
    len: u64,
    byte_order: ByteOrder,
    options: ReaderOptions,
}

impl<R: ReadSeek> PrimitiveReader<R> {
    pub fn new(source: R) -> Result<Self> {
        Self::with_options(source, ReaderOptions::default())
    }

    pub fn with_options(mut source: R, options: ReaderOptions) -> Result<Self> {
        let start = source.stream_position()?;
        let len = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(start))?;

        Ok(PrimitiveReader {
            source,
            len,
            byte_order: ByteOrder::default(),
            options,
        })
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Switch the byte order for every following multi-byte read.
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Total length of the source in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current byte offset from the start of the source.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.source.stream_position()?)
    }

    pub fn remaining(&mut self) -> Result<u64> {
        Ok(self.len.saturating_sub(self.position()?))
    }

    /// Move to an absolute offset. Offsets past the end are rejected.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            let current = self.position()?;
            return Err(JtError::UnexpectedEndOfInput {
                offset: current,
                requested: offset.saturating_sub(current),
                available: self.len.saturating_sub(current),
            });
        }
        self.source.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Move by a signed distance from the current position.
    pub fn skip(&mut self, distance: i64) -> Result<()> {
        let current = self.position()?;
        let target = (current as i64).checked_add(distance).filter(|t| *t >= 0);
        match target {
            Some(target) => self.seek(target as u64),
            None => Err(JtError::MalformedSegment {
                offset: current,
                reason: format!("skip of {} bytes moves before the start of input", distance),
            }),
        }
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Fill `buf` completely or fail, leaving the cursor where it was.
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let start = self.position()?;
        let available = self.len.saturating_sub(start);
        if buf.len() as u64 > available {
            return Err(JtError::UnexpectedEndOfInput {
                offset: start,
                requested: buf.len() as u64,
                available,
            });
        }

        match self.source.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                // Source shrank since construction
                self.source.seek(SeekFrom::Start(start))?;
                Err(JtError::UnexpectedEndOfInput {
                    offset: start,
                    requested: buf.len() as u64,
                    available,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let start = self.position()?;
        let available = self.len.saturating_sub(start);
        if count as u64 > available {
            return Err(JtError::UnexpectedEndOfInput {
                offset: start,
                requested: count as u64,
                available,
            });
        }
        let mut bytes = vec![0u8; count];
        self.read_exact_bytes(&mut bytes)?;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact_bytes(&mut buf)?;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let buf = self.read_array::<2>()?;
        Ok(match self.byte_order {
            ByteOrder::MostSignificantFirst => BigEndian::read_u16(&buf),
            ByteOrder::LeastSignificantFirst => LittleEndian::read_u16(&buf),
        })
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let buf = self.read_array::<4>()?;
        Ok(match self.byte_order {
            ByteOrder::MostSignificantFirst => BigEndian::read_u32(&buf),
            ByteOrder::LeastSignificantFirst => LittleEndian::read_u32(&buf),
        })
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read both 32-bit halves of a 64-bit value as (high, low).
    fn read_halves(&mut self) -> Result<(u32, u32)> {
        let buf = self.read_array::<8>()?;
        Ok(match self.byte_order {
            ByteOrder::MostSignificantFirst => {
                (BigEndian::read_u32(&buf[0..4]), BigEndian::read_u32(&buf[4..8]))
            }
            ByteOrder::LeastSignificantFirst => {
                (LittleEndian::read_u32(&buf[4..8]), LittleEndian::read_u32(&buf[0..4]))
            }
        })
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let (high, low) = self.read_halves()?;
        Ok(match self.options.int64_assembly {
            Int64Assembly::FullWidth => (high as u64) << 32 | low as u64,
            Int64Assembly::Legacy24Bit => {
                ((high & 0x00FF_FFFF) as u64) << 32 | (low & 0x00FF_FFFF) as u64
            }
        })
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let (high, low) = self.read_halves()?;
        let value = match self.options.int64_assembly {
            Int64Assembly::FullWidth => (high as u64) << 32 | low as u64,
            Int64Assembly::Legacy24Bit => (high as u64) << 32 | (low & 0x00FF_FFFF) as u64,
        };
        Ok(value as i64)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read an i32 length prefix, rejecting negative values.
    pub fn read_length(&mut self) -> Result<usize> {
        let offset = self.position()?;
        let length = self.read_i32()?;
        usize::try_from(length).map_err(|_| JtError::MalformedSegment {
            offset,
            reason: format!("negative length prefix {}", length),
        })
    }

    /// Fixed-length single-byte string; each byte maps to one char.
    pub fn read_fixed_string(&mut self, length: usize) -> Result<String> {
        let bytes = self.read_bytes(length)?;
        Ok(decode_latin1(&bytes))
    }

    /// Single-byte string preceded by an i32 length.
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_length()?;
        self.read_fixed_string(length)
    }

    /// UTF-16 string preceded by an i32 count of 16-bit units.
    pub fn read_mb_string(&mut self) -> Result<String> {
        let count = self.read_length()?;
        let start = self.position()?;
        let available = self.len.saturating_sub(start);
        if (count as u64).saturating_mul(2) > available {
            return Err(JtError::UnexpectedEndOfInput {
                offset: start,
                requested: count as u64 * 2,
                available,
            });
        }

        let mut units = Vec::with_capacity(count);
        for _ in 0..count {
            units.push(self.read_u16()?);
        }
        Ok(decode_utf16_lossy(&units))
    }

    /// Decode any [`Decode`] value at the cursor.
    pub fn read<T: Decode>(&mut self) -> Result<T> {
        T::decode(self)
    }
}
