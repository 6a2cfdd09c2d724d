// src/primitives/options.rs

/// How 64-bit integers are assembled from their two 32-bit halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Int64Assembly {
    /// All 64 bits, both halves in the active byte order.
    #[default]
    FullWidth,
    /// Bit-compatible with legacy JT loaders: unsigned reads keep only the
    /// low 24 bits of each half, signed reads keep only the low 24 bits of
    /// the low half.
    Legacy24Bit,
}

/// Options controlling how a JT file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    pub int64_assembly: Int64Assembly,
    /// Capacity of the `BufReader` used when opening a path.
    pub buffer_capacity: usize,
    /// Fail when a TOC entry's length differs from its segment header.
    pub strict_segment_lengths: bool,
}

impl ReaderOptions {
    pub const DEFAULT_BUFFER_CAPACITY: usize = 65536;

    /// Options reproducing legacy loader output byte for byte.
    pub fn legacy() -> Self {
        ReaderOptions::default().with_int64_assembly(Int64Assembly::Legacy24Bit)
    }

    pub fn with_int64_assembly(mut self, assembly: Int64Assembly) -> Self {
        self.int64_assembly = assembly;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }

    pub fn with_strict_segment_lengths(mut self, strict: bool) -> Self {
        self.strict_segment_lengths = strict;
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            int64_assembly: Int64Assembly::FullWidth,
            buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY,
            strict_segment_lengths: false,
        }
    }
}
