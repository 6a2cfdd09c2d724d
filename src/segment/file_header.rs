// src/segment/file_header.rs
use crate::error::{JtError, Result};
use crate::guid::Guid;
use crate::primitives::{PrimitiveReader, ReadSeek};
use crate::types::ByteOrder;
use crate::utils::trim_padding;
use log::{debug, warn};
use std::fmt;

/// Identifier carried at the end of the file header. Which one it is
/// depends on the header's reserved flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderSegmentRef {
    /// Root Logical Scene Graph segment (reserved flag is zero).
    LsgSegment(Guid),
    /// Opaque reserved-field identifier (reserved flag is non-zero).
    Reserved(Guid),
}

impl HeaderSegmentRef {
    pub fn guid(&self) -> &Guid {
        match self {
            HeaderSegmentRef::LsgSegment(guid) | HeaderSegmentRef::Reserved(guid) => guid,
        }
    }
}

/// The first block of every JT file: version text, byte order and the
/// location of the TOC segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Raw 80-character version text including its padding.
    pub version: String,
    pub byte_order: ByteOrder,
    /// Canonically zero.
    pub reserved: i32,
    /// Absolute byte offset of the TOC segment.
    pub toc_offset: i32,
    pub segment_ref: HeaderSegmentRef,
}

impl FileHeader {
    pub const VERSION_LENGTH: usize = 80;
    pub const LENGTH: usize = Self::VERSION_LENGTH + 1 + 4 + 4 + Guid::LENGTH;

    /// Read the header and switch `reader` to the declared byte order
    /// before any multi-byte field is decoded.
    pub fn read<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let version = reader.read_fixed_string(Self::VERSION_LENGTH)?;

        let flag_offset = reader.position()?;
        let flag = reader.read_u8()?;
        let byte_order = ByteOrder::from_flag(flag).ok_or_else(|| JtError::InvalidHeader {
            offset: flag_offset,
            reason: format!("byte order flag must be 0 or 1, found {}", flag),
        })?;
        reader.set_byte_order(byte_order);

        let reserved = reader.read_i32()?;
        let toc_offset = reader.read_i32()?;
        let guid = Guid::read(reader)?;

        let segment_ref = if reserved != 0 {
            warn!("File header reserved flag is {}, treating trailing GUID as reserved field", reserved);
            HeaderSegmentRef::Reserved(guid)
        } else {
            HeaderSegmentRef::LsgSegment(guid)
        };

        let header = FileHeader {
            version,
            byte_order,
            reserved,
            toc_offset,
            segment_ref,
        };
        debug!("File header: {}, TOC at offset {}", header, toc_offset);
        Ok(header)
    }

    /// Version text without its space/NUL padding.
    pub fn version_str(&self) -> &str {
        trim_padding(&self.version)
    }

    /// Major and minor number from version text such as `"Version 9.5 JT"`.
    pub fn format_version(&self) -> Option<(u32, u32)> {
        let mut words = self.version_str().split_whitespace();
        words.find(|w| w.eq_ignore_ascii_case("version"))?;
        let number = words.next()?;
        let (major, minor) = number.split_once('.')?;
        Some((major.parse().ok()?, minor.parse().ok()?))
    }

    pub fn lsg_segment_id(&self) -> Option<&Guid> {
        match &self.segment_ref {
            HeaderSegmentRef::LsgSegment(guid) => Some(guid),
            HeaderSegmentRef::Reserved(_) => None,
        }
    }

    pub fn reserved_field(&self) -> Option<&Guid> {
        match &self.segment_ref {
            HeaderSegmentRef::Reserved(guid) => Some(guid),
            HeaderSegmentRef::LsgSegment(_) => None,
        }
    }
}

impl fmt::Display for FileHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version_str(), self.byte_order)
    }
}
