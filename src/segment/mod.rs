// src/segment/mod.rs
mod file_header;
mod header;
mod toc;

pub use file_header::{FileHeader, HeaderSegmentRef};
pub use header::SegmentHeader;
pub use toc::{TocEntry, TocSegment};

use crate::error::{JtError, Result};
use crate::primitives::{PrimitiveReader, ReadSeek};
use log::trace;
use std::fmt;
use std::ops::Range;

/// A data segment: its header plus the location of its payload.
///
/// The payload is skipped on read and never held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSegment {
    pub header: SegmentHeader,
    /// Absolute offset of the segment header.
    pub offset: u64,
    pub payload_length: u64,
}

impl DataSegment {
    /// Read the header at the cursor and move past the payload.
    pub fn read<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let offset = reader.position()?;
        let header = SegmentHeader::read(reader)?;

        let payload_length = header.segment_length as i64 - SegmentHeader::LENGTH as i64;
        if payload_length < 0 {
            return Err(JtError::MalformedSegment {
                offset,
                reason: format!(
                    "segment length {} is shorter than its {}-byte header",
                    header.segment_length,
                    SegmentHeader::LENGTH
                ),
            });
        }
        reader.skip(payload_length)?;

        trace!("Data segment {} at offset {}", header, offset);
        Ok(DataSegment {
            header,
            offset,
            payload_length: payload_length as u64,
        })
    }

    pub fn payload_offset(&self) -> u64 {
        self.offset + SegmentHeader::LENGTH as u64
    }

    /// Byte range of the opaque payload within the file.
    pub fn payload_range(&self) -> Range<u64> {
        let start = self.payload_offset();
        start..start + self.payload_length
    }

    pub fn total_length(&self) -> u64 {
        SegmentHeader::LENGTH as u64 + self.payload_length
    }
}

impl fmt::Display for DataSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.header, f)
    }
}
