// src/types.rs
use crate::error::{JtError, Result};
use std::fmt;

/// Byte order of every multi-byte value that follows the file header's
/// byte-order flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    LeastSignificantFirst,
    MostSignificantFirst,
}

impl ByteOrder {
    /// Map the header flag byte: 0 is LSB-first, 1 is MSB-first.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(ByteOrder::LeastSignificantFirst),
            1 => Some(ByteOrder::MostSignificantFirst),
            _ => None,
        }
    }

    pub fn flag(&self) -> u8 {
        match self {
            ByteOrder::LeastSignificantFirst => 0,
            ByteOrder::MostSignificantFirst => 1,
        }
    }

    pub fn is_big_endian(&self) -> bool {
        *self == ByteOrder::MostSignificantFirst
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::LeastSignificantFirst => write!(f, "LsbFirst"),
            ByteOrder::MostSignificantFirst => write!(f, "MsbFirst"),
        }
    }
}

/// Broad classification of a data segment's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SegmentType {
    LogicalSceneGraph = 1,
    JtBRep = 2,
    PmiData = 3,
    MetaData = 4,
    Shape = 6,
    ShapeLod0 = 7,
    ShapeLod1 = 8,
    ShapeLod2 = 9,
    ShapeLod3 = 10,
    ShapeLod4 = 11,
    ShapeLod5 = 12,
    ShapeLod6 = 13,
    ShapeLod7 = 14,
    ShapeLod8 = 15,
    ShapeLod9 = 16,
    XtBRep = 17,
    WireframeRepresentation = 18,
    Ulp = 20,
    Lwpa = 24,
}

impl SegmentType {
    /// Every defined type, in code order.
    pub const ALL: [SegmentType; 19] = [
        SegmentType::LogicalSceneGraph,
        SegmentType::JtBRep,
        SegmentType::PmiData,
        SegmentType::MetaData,
        SegmentType::Shape,
        SegmentType::ShapeLod0,
        SegmentType::ShapeLod1,
        SegmentType::ShapeLod2,
        SegmentType::ShapeLod3,
        SegmentType::ShapeLod4,
        SegmentType::ShapeLod5,
        SegmentType::ShapeLod6,
        SegmentType::ShapeLod7,
        SegmentType::ShapeLod8,
        SegmentType::ShapeLod9,
        SegmentType::XtBRep,
        SegmentType::WireframeRepresentation,
        SegmentType::Ulp,
        SegmentType::Lwpa,
    ];

    pub fn code(&self) -> u32 {
        *self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(SegmentType::LogicalSceneGraph),
            2 => Some(SegmentType::JtBRep),
            3 => Some(SegmentType::PmiData),
            4 => Some(SegmentType::MetaData),
            6 => Some(SegmentType::Shape),
            7 => Some(SegmentType::ShapeLod0),
            8 => Some(SegmentType::ShapeLod1),
            9 => Some(SegmentType::ShapeLod2),
            10 => Some(SegmentType::ShapeLod3),
            11 => Some(SegmentType::ShapeLod4),
            12 => Some(SegmentType::ShapeLod5),
            13 => Some(SegmentType::ShapeLod6),
            14 => Some(SegmentType::ShapeLod7),
            15 => Some(SegmentType::ShapeLod8),
            16 => Some(SegmentType::ShapeLod9),
            17 => Some(SegmentType::XtBRep),
            18 => Some(SegmentType::WireframeRepresentation),
            20 => Some(SegmentType::Ulp),
            24 => Some(SegmentType::Lwpa),
            _ => None,
        }
    }

    /// Resolve a type code read at `offset`, failing with
    /// [`JtError::UnknownSegmentType`] for codes outside the table.
    pub fn resolve(code: u32, offset: u64) -> Result<Self> {
        Self::from_code(code).ok_or(JtError::UnknownSegmentType { code, offset })
    }

    /// Whether ZLIB compression may be applied to the whole segment payload.
    /// Descriptive only; payloads are never decompressed here.
    pub fn is_zlib_applicable(&self) -> bool {
        !self.is_shape()
    }

    /// Shape and shape LOD segments.
    pub fn is_shape(&self) -> bool {
        matches!(self.code(), 6..=16)
    }

    /// LOD level for `ShapeLod0..=ShapeLod9`.
    pub fn lod_level(&self) -> Option<u8> {
        match self.code() {
            c @ 7..=16 => Some((c - 7) as u8),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SegmentType::LogicalSceneGraph => "LogicalSceneGraph",
            SegmentType::JtBRep => "JTBRep",
            SegmentType::PmiData => "PMIData",
            SegmentType::MetaData => "MetaData",
            SegmentType::Shape => "Shape",
            SegmentType::ShapeLod0 => "ShapeLOD0",
            SegmentType::ShapeLod1 => "ShapeLOD1",
            SegmentType::ShapeLod2 => "ShapeLOD2",
            SegmentType::ShapeLod3 => "ShapeLOD3",
            SegmentType::ShapeLod4 => "ShapeLOD4",
            SegmentType::ShapeLod5 => "ShapeLOD5",
            SegmentType::ShapeLod6 => "ShapeLOD6",
            SegmentType::ShapeLod7 => "ShapeLOD7",
            SegmentType::ShapeLod8 => "ShapeLOD8",
            SegmentType::ShapeLod9 => "ShapeLOD9",
            SegmentType::XtBRep => "XTBRep",
            SegmentType::WireframeRepresentation => "WireframeRepresentation",
            SegmentType::Ulp => "ULP",
            SegmentType::Lwpa => "LWPA",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Packed TOC entry attributes word.
///
/// Bits 0..23 are reserved, bits 23..32 hold the segment type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentAttributes(u32);

impl SegmentAttributes {
    pub const TYPE_SHIFT: u32 = 23;
    pub const RESERVED_MASK: u32 = (1 << Self::TYPE_SHIFT) - 1;
    pub const TYPE_MASK: u32 = !Self::RESERVED_MASK;

    pub fn new(raw: u32) -> Self {
        SegmentAttributes(raw)
    }

    /// Pack a type code and reserved bits. Excess bits of either are dropped.
    pub fn from_parts(type_code: u32, reserved: u32) -> Self {
        SegmentAttributes(
            ((type_code << Self::TYPE_SHIFT) & Self::TYPE_MASK) | (reserved & Self::RESERVED_MASK),
        )
    }

    pub fn type_code(&self) -> u32 {
        (self.0 & Self::TYPE_MASK) >> Self::TYPE_SHIFT
    }

    pub fn reserved(&self) -> u32 {
        self.0 & Self::RESERVED_MASK
    }

    pub fn raw_value(&self) -> u32 {
        self.0
    }
}
