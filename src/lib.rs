// src/lib.rs
//! # jt-rs
//!
//! A Rust library for reading the container layer of JT (Jupiter Tessellation)
//! files, the CAD/3D exchange format.
//!
//! A JT file is a fixed header, a table of contents (TOC) and a set of data
//! segments located by absolute byte offsets. This crate decodes the header
//! (including the byte order it declares for the rest of the file), the TOC
//! with its bit-packed segment attributes, and every data segment header. The
//! segment payloads (scene graph, B-Rep, compressed meshes) are skipped and
//! left to higher layers.
//!
//! ## Features
//!
//! - **Byte-order aware**: LSB-first and MSB-first files, switched after the header flag
//! - **Random access**: each segment is reached by an absolute seek from its TOC entry
//! - **Strict errors**: malformed or truncated files fail with the byte offset involved
//! - **Legacy compatible**: optional 64-bit truncation matching older loaders
//! - **Memory mapped**: optional `mmap` feature
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jt_rs::*;
//!
//! fn main() -> Result<()> {
//!     let jt = JtFile::open("model.jt")?;
//!
//!     println!("{}", jt.header());
//!     for entry in jt.toc() {
//!         let segment = jt.get_segment(&entry.segment_id)?;
//!         println!("{} -> {} payload bytes", entry.segment_id, segment.payload_length);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Reading from memory
//!
//! ```rust,no_run
//! use jt_rs::*;
//! use std::io::Cursor;
//!
//! fn load(bytes: Vec<u8>) -> Result<JtFile> {
//!     let options = ReaderOptions::legacy();
//!     JtFile::from_reader_with_options(Cursor::new(bytes), options)
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod guid;
pub mod primitives;
pub mod segment;
pub mod reader;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{JtError, Result};

// Type exports
pub use types::{
    ByteOrder,
    SegmentType,
    SegmentAttributes,
};

pub use guid::Guid;

// Primitive reader exports
pub use primitives::{
    Decode,
    PrimitiveReader,
    ReadSeek,
    ReaderOptions,
    Int64Assembly,
};

// Segment exports
pub use segment::{
    DataSegment,
    FileHeader,
    HeaderSegmentRef,
    SegmentHeader,
    TocEntry,
    TocSegment,
};

// Reader exports
pub use reader::JtFile;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use jt_rs::prelude::*;
    //! ```

    pub use crate::error::{JtError, Result};
    pub use crate::guid::Guid;
    pub use crate::types::{ByteOrder, SegmentType};
    pub use crate::primitives::ReaderOptions;
    pub use crate::reader::JtFile;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
