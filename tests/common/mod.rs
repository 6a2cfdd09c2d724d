// tests/common/mod.rs
#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use jt_rs::{ByteOrder, FileHeader, Guid, SegmentAttributes, SegmentHeader, SegmentType, TocEntry};
use std::io::Write;

/// Where the TOC is placed relative to the data segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocPlacement {
    AfterHeader,
    AtEnd,
}

#[derive(Debug, Clone)]
pub struct SyntheticSegment {
    pub id: Guid,
    pub segment_type: SegmentType,
    pub payload: Vec<u8>,
    /// Overrides for what the TOC declares about this segment.
    pub toc_length: Option<i32>,
    pub toc_type: Option<SegmentType>,
    pub toc_reserved: u32,
}

impl SyntheticSegment {
    pub fn new(id: Guid, segment_type: SegmentType, payload_len: usize) -> Self {
        SyntheticSegment {
            id,
            segment_type,
            payload: (0..payload_len).map(|i| i as u8).collect(),
            toc_length: None,
            toc_type: None,
            toc_reserved: 0,
        }
    }

    pub fn length(&self) -> i32 {
        (SegmentHeader::LENGTH + self.payload.len()) as i32
    }
}

/// Builds JT byte streams in memory for tests and benchmarks.
#[derive(Debug, Clone)]
pub struct JtFileBuilder {
    pub version: String,
    pub byte_order: ByteOrder,
    pub reserved: i32,
    pub header_guid: Guid,
    pub toc_placement: TocPlacement,
    pub segments: Vec<SyntheticSegment>,
    /// Write segments in reverse of TOC order.
    pub reverse_layout: bool,
}

impl Default for JtFileBuilder {
    fn default() -> Self {
        JtFileBuilder {
            version: "TEST".to_string(),
            byte_order: ByteOrder::LeastSignificantFirst,
            reserved: 0,
            header_guid: Guid::NIL,
            toc_placement: TocPlacement::AfterHeader,
            segments: Vec::new(),
            reverse_layout: false,
        }
    }
}

impl JtFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn reserved(mut self, reserved: i32) -> Self {
        self.reserved = reserved;
        self
    }

    pub fn header_guid(mut self, guid: Guid) -> Self {
        self.header_guid = guid;
        self
    }

    pub fn toc_placement(mut self, placement: TocPlacement) -> Self {
        self.toc_placement = placement;
        self
    }

    pub fn reverse_layout(mut self, reverse: bool) -> Self {
        self.reverse_layout = reverse;
        self
    }

    pub fn segment(mut self, segment: SyntheticSegment) -> Self {
        self.segments.push(segment);
        self
    }

    fn toc_length(&self) -> usize {
        4 + self.segments.len() * TocEntry::LENGTH
    }

    /// Absolute offset of every segment, in TOC order.
    pub fn segment_offsets(&self) -> Vec<u64> {
        let mut cursor = FileHeader::LENGTH as u64;
        if self.toc_placement == TocPlacement::AfterHeader {
            cursor += self.toc_length() as u64;
        }

        let mut offsets = vec![0u64; self.segments.len()];
        for i in self.layout_order() {
            offsets[i] = cursor;
            cursor += self.segments[i].length() as u64;
        }
        offsets
    }

    pub fn toc_offset(&self) -> u64 {
        match self.toc_placement {
            TocPlacement::AfterHeader => FileHeader::LENGTH as u64,
            TocPlacement::AtEnd => {
                FileHeader::LENGTH as u64
                    + self.segments.iter().map(|s| s.length() as u64).sum::<u64>()
            }
        }
    }

    fn layout_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.segments.len()).collect();
        if self.reverse_layout {
            order.reverse();
        }
        order
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let written = match self.byte_order {
            ByteOrder::LeastSignificantFirst => self.write_file::<LittleEndian>(&mut out),
            ByteOrder::MostSignificantFirst => self.write_file::<BigEndian>(&mut out),
        };
        written.expect("writing to a Vec cannot fail");
        out
    }

    fn write_file<E: byteorder::ByteOrder>(&self, out: &mut Vec<u8>) -> std::io::Result<()> {
        let mut version = vec![b' '; FileHeader::VERSION_LENGTH];
        let text = self.version.as_bytes();
        let n = text.len().min(FileHeader::VERSION_LENGTH);
        version[..n].copy_from_slice(&text[..n]);
        out.write_all(&version)?;
        out.write_u8(self.byte_order.flag())?;
        out.write_i32::<E>(self.reserved)?;
        out.write_i32::<E>(self.toc_offset() as i32)?;
        out.write_all(&self.header_guid.to_bytes(self.byte_order))?;

        if self.toc_placement == TocPlacement::AfterHeader {
            self.write_toc::<E>(out)?;
        }
        for i in self.layout_order() {
            self.write_segment::<E>(out, &self.segments[i])?;
        }
        if self.toc_placement == TocPlacement::AtEnd {
            self.write_toc::<E>(out)?;
        }
        Ok(())
    }

    fn write_toc<E: byteorder::ByteOrder>(&self, out: &mut Vec<u8>) -> std::io::Result<()> {
        let offsets = self.segment_offsets();
        out.write_i32::<E>(self.segments.len() as i32)?;
        for (segment, offset) in self.segments.iter().zip(offsets) {
            let toc_type = segment.toc_type.unwrap_or(segment.segment_type);
            let attributes = SegmentAttributes::from_parts(toc_type.code(), segment.toc_reserved);
            out.write_all(&segment.id.to_bytes(self.byte_order))?;
            out.write_i32::<E>(offset as i32)?;
            out.write_i32::<E>(segment.toc_length.unwrap_or_else(|| segment.length()))?;
            out.write_u32::<E>(attributes.raw_value())?;
        }
        Ok(())
    }

    fn write_segment<E: byteorder::ByteOrder>(
        &self,
        out: &mut Vec<u8>,
        segment: &SyntheticSegment,
    ) -> std::io::Result<()> {
        out.write_all(&segment.id.to_bytes(self.byte_order))?;
        out.write_i32::<E>(segment.segment_type.code() as i32)?;
        out.write_i32::<E>(segment.length())?;
        out.write_all(&segment.payload)
    }
}

pub fn guid(n: u32) -> Guid {
    Guid::from_parts(n, 0x1234, 0xABCD, [1, 2, 3, 4, 5, 6, 7, n as u8])
}
