// src/guid.rs
use crate::error::{JtError, Result};
use crate::primitives::{Decode, PrimitiveReader, ReadSeek};
use crate::types::ByteOrder;
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use std::fmt;
use std::str::FromStr;

/// 128-bit identifier naming a segment (and other objects) in a JT file.
///
/// Stored as one U32, two U16 and eight U8. The two U16 share `data2`
/// (first one in the high half); the eight bytes are split 4+4 into
/// `data3` and `data4`, first byte most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Guid {
    pub data1: u32,
    pub data2: u32,
    pub data3: u32,
    pub data4: u32,
}

impl Guid {
    pub const LENGTH: usize = 16;

    pub const NIL: Guid = Guid { data1: 0, data2: 0, data3: 0, data4: 0 };

    // Hex digits per group in the canonical text form.
    const GROUP_WIDTHS: [usize; 11] = [8, 4, 4, 2, 2, 2, 2, 2, 2, 2, 2];

    pub fn from_parts(data1: u32, short1: u16, short2: u16, bytes: [u8; 8]) -> Self {
        Guid {
            data1,
            data2: (short1 as u32) << 16 | short2 as u32,
            data3: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data4: u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    pub fn is_nil(&self) -> bool {
        *self == Guid::NIL
    }

    /// The eight trailing bytes in stored order.
    pub fn tail_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&self.data3.to_be_bytes());
        bytes[4..].copy_from_slice(&self.data4.to_be_bytes());
        bytes
    }

    /// Encode as the 16 bytes `read` would decode under `byte_order`.
    pub fn to_bytes(&self, byte_order: ByteOrder) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        let short1 = (self.data2 >> 16) as u16;
        let short2 = self.data2 as u16;
        match byte_order {
            ByteOrder::MostSignificantFirst => {
                BigEndian::write_u32(&mut bytes[0..4], self.data1);
                BigEndian::write_u16(&mut bytes[4..6], short1);
                BigEndian::write_u16(&mut bytes[6..8], short2);
            }
            ByteOrder::LeastSignificantFirst => {
                LittleEndian::write_u32(&mut bytes[0..4], self.data1);
                LittleEndian::write_u16(&mut bytes[4..6], short1);
                LittleEndian::write_u16(&mut bytes[6..8], short2);
            }
        }
        bytes[8..].copy_from_slice(&self.tail_bytes());
        bytes
    }

    /// Decode 16 bytes. The U32 and U16 words follow the reader's byte
    /// order; the trailing eight bytes are taken as they appear.
    pub fn read<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let data1 = reader.read_u32()?;
        let short1 = reader.read_u16()?;
        let short2 = reader.read_u16()?;
        let mut bytes = [0u8; 8];
        reader.read_exact_bytes(&mut bytes)?;
        Ok(Guid::from_parts(data1, short1, short2, bytes))
    }
}

impl Decode for Guid {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Guid::read(reader)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.tail_bytes();
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}-{:02X}-{:02X}-{:02X}-{:02X}-{:02X}-{:02X}-{:02X}}}",
            self.data1,
            self.data2 >> 16,
            self.data2 & 0xFFFF,
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        )
    }
}

impl FromStr for Guid {
    type Err = JtError;

    /// Parse the canonical `{XXXXXXXX-XXXX-XXXX-XX-XX-XX-XX-XX-XX-XX-XX}` form.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || JtError::InvalidGuid(s.to_string());

        let inner = s
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(invalid)?;

        let groups: Vec<&str> = inner.split('-').collect();
        if groups.len() != Self::GROUP_WIDTHS.len() {
            return Err(invalid());
        }

        let mut values = [0u32; 11];
        for ((group, &width), value) in groups.iter().zip(Self::GROUP_WIDTHS.iter()).zip(values.iter_mut()) {
            if group.len() != width || !group.bytes().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *value = u32::from_str_radix(group, 16).map_err(|_| invalid())?;
        }

        let mut bytes = [0u8; 8];
        for (byte, value) in bytes.iter_mut().zip(&values[3..]) {
            *byte = *value as u8;
        }

        Ok(Guid::from_parts(values[0], values[1] as u16, values[2] as u16, bytes))
    }
}
