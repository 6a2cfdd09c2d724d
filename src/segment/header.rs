// src/segment/header.rs
use crate::error::Result;
use crate::guid::Guid;
use crate::primitives::{PrimitiveReader, ReadSeek};
use crate::types::SegmentType;
use std::fmt;

/// Header that starts every data segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentHeader {
    pub segment_id: Guid,
    pub segment_type: SegmentType,
    /// Total segment size in bytes, this header included.
    pub segment_length: i32,
}

impl SegmentHeader {
    pub const LENGTH: usize = Guid::LENGTH + 4 + 4;

    pub fn read<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let segment_id = Guid::read(reader)?;
        let type_offset = reader.position()?;
        let segment_type = SegmentType::resolve(reader.read_i32()? as u32, type_offset)?;
        let segment_length = reader.read_i32()?;

        Ok(SegmentHeader {
            segment_id,
            segment_type,
            segment_length,
        })
    }
}

impl fmt::Display for SegmentHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({} bytes)", self.segment_id, self.segment_type, self.segment_length)
    }
}
