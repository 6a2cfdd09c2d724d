// src/segment/toc.rs
use crate::error::{JtError, Result};
use crate::guid::Guid;
use crate::primitives::{PrimitiveReader, ReadSeek};
use crate::types::{SegmentAttributes, SegmentType};
use log::trace;

/// Maps one segment ID to its absolute location in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub segment_id: Guid,
    /// Byte offset from the start of the file.
    pub segment_offset: i32,
    /// Declared total segment length, header included.
    pub segment_length: i32,
    pub attributes: SegmentAttributes,
    pub segment_type: SegmentType,
}

impl TocEntry {
    pub const LENGTH: usize = Guid::LENGTH + 4 + 4 + 4;

    pub fn read<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let segment_id = Guid::read(reader)?;
        let segment_offset = reader.read_i32()?;
        let segment_length = reader.read_i32()?;

        let attributes_offset = reader.position()?;
        let attributes = SegmentAttributes::new(reader.read_u32()?);
        let segment_type = SegmentType::resolve(attributes.type_code(), attributes_offset)?;

        Ok(TocEntry {
            segment_id,
            segment_offset,
            segment_length,
            attributes,
            segment_type,
        })
    }

    /// The low 23 bits of the attributes word.
    pub fn reserved(&self) -> u32 {
        self.attributes.reserved()
    }
}

/// Directory of every individually addressable data segment, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TocSegment {
    pub entries: Vec<TocEntry>,
}

impl TocSegment {
    pub fn read<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let offset = reader.position()?;
        let count = reader.read_i32()?;
        if count < 0 {
            return Err(JtError::MalformedSegment {
                offset,
                reason: format!("negative TOC entry count {}", count),
            });
        }

        let needed = count as u64 * TocEntry::LENGTH as u64;
        let available = reader.remaining()?;
        if needed > available {
            return Err(JtError::UnexpectedEndOfInput {
                offset: offset + 4,
                requested: needed,
                available,
            });
        }

        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let entry = TocEntry::read(reader)?;
            trace!(
                "TOC entry {}: {} at offset {} ({} bytes)",
                entry.segment_id, entry.segment_type, entry.segment_offset, entry.segment_length
            );
            entries.push(entry);
        }

        Ok(TocSegment { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TocEntry> {
        self.entries.iter()
    }

    /// First entry with the given segment ID.
    pub fn find(&self, segment_id: &Guid) -> Option<&TocEntry> {
        self.entries.iter().find(|e| &e.segment_id == segment_id)
    }
}

impl<'a> IntoIterator for &'a TocSegment {
    type Item = &'a TocEntry;
    type IntoIter = std::slice::Iter<'a, TocEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
