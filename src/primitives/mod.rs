// src/primitives/mod.rs
mod basic;
mod options;
mod reader;

use crate::error::Result;

pub use basic::{
    BBoxF32, CoordF32, CoordF64, DirF32, HCoordF32, HCoordF64, Mx4F32, PlaneF32, Quaternion, Rgb,
    Rgba, VecF32, VecF64, VecU32,
};
pub use options::{Int64Assembly, ReaderOptions};
pub use reader::{PrimitiveReader, ReadSeek};

/// A value that can be decoded at the cursor of a [`PrimitiveReader`].
pub trait Decode: Sized {
    fn decode<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self>;
}
