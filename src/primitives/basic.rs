// src/primitives/basic.rs
//! Basic JT data types built from primitive reads.
//!
//! The container layer never decodes payloads, but these are what a payload
//! decoder is assembled from, and they follow the same byte-order rules.
use crate::error::Result;
use crate::primitives::{Decode, PrimitiveReader, ReadSeek};

/// Point in 3D space, single precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordF32 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Point in 3D space, double precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordF64 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirF32 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Homogeneous coordinate, single precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HCoordF32 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Homogeneous coordinate, double precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HCoordF64 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBoxF32 {
    pub min_corner: CoordF32,
    pub max_corner: CoordF32,
}

impl BBoxF32 {
    pub fn is_empty(&self) -> bool {
        self.min_corner.x > self.max_corner.x
            || self.min_corner.y > self.max_corner.y
            || self.min_corner.z > self.max_corner.z
    }
}

/// Plane `a*x + b*y + c*z + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaneF32 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

/// 4x4 matrix, sixteen values in stored order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mx4F32(pub [f32; 16]);

impl Mx4F32 {
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row * 4 + col]
    }
}

/// Count-prefixed vectors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VecF32(pub Vec<f32>);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VecF64(pub Vec<f64>);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VecU32(pub Vec<u32>);

impl Decode for CoordF32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(CoordF32 {
            x: reader.read_f32()?,
            y: reader.read_f32()?,
            z: reader.read_f32()?,
        })
    }
}

impl Decode for CoordF64 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(CoordF64 {
            x: reader.read_f64()?,
            y: reader.read_f64()?,
            z: reader.read_f64()?,
        })
    }
}

impl Decode for DirF32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(DirF32 {
            x: reader.read_f32()?,
            y: reader.read_f32()?,
            z: reader.read_f32()?,
        })
    }
}

impl Decode for HCoordF32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(HCoordF32 {
            x: reader.read_f32()?,
            y: reader.read_f32()?,
            z: reader.read_f32()?,
            w: reader.read_f32()?,
        })
    }
}

impl Decode for HCoordF64 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(HCoordF64 {
            x: reader.read_f64()?,
            y: reader.read_f64()?,
            z: reader.read_f64()?,
            w: reader.read_f64()?,
        })
    }
}

impl Decode for BBoxF32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(BBoxF32 {
            min_corner: reader.read()?,
            max_corner: reader.read()?,
        })
    }
}

impl Decode for PlaneF32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(PlaneF32 {
            a: reader.read_f32()?,
            b: reader.read_f32()?,
            c: reader.read_f32()?,
            d: reader.read_f32()?,
        })
    }
}

impl Decode for Quaternion {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(Quaternion {
            a: reader.read_f32()?,
            b: reader.read_f32()?,
            c: reader.read_f32()?,
            d: reader.read_f32()?,
        })
    }
}

impl Decode for Rgb {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(Rgb {
            red: reader.read_f32()?,
            green: reader.read_f32()?,
            blue: reader.read_f32()?,
        })
    }
}

impl Decode for Rgba {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        Ok(Rgba {
            red: reader.read_f32()?,
            green: reader.read_f32()?,
            blue: reader.read_f32()?,
            alpha: reader.read_f32()?,
        })
    }
}

impl Decode for Mx4F32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let mut values = [0f32; 16];
        for value in values.iter_mut() {
            *value = reader.read_f32()?;
        }
        Ok(Mx4F32(values))
    }
}

impl Decode for VecF32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let count = reader.read_length()?;
        let mut values = Vec::with_capacity(count.min(reader.remaining()? as usize / 4));
        for _ in 0..count {
            values.push(reader.read_f32()?);
        }
        Ok(VecF32(values))
    }
}

impl Decode for VecF64 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let count = reader.read_length()?;
        let mut values = Vec::with_capacity(count.min(reader.remaining()? as usize / 8));
        for _ in 0..count {
            values.push(reader.read_f64()?);
        }
        Ok(VecF64(values))
    }
}

impl Decode for VecU32 {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let count = reader.read_length()?;
        let mut values = Vec::with_capacity(count.min(reader.remaining()? as usize / 4));
        for _ in 0..count {
            values.push(reader.read_u32()?);
        }
        Ok(VecU32(values))
    }
}
