// src/error.rs
use crate::guid::Guid;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JtError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unexpected end of input at offset {offset}: needed {requested} bytes, {available} available")]
    UnexpectedEndOfInput { offset: u64, requested: u64, available: u64 },

    #[error("Unknown segment type {code} at offset {offset}")]
    UnknownSegmentType { code: u32, offset: u64 },

    #[error("Malformed segment at offset {offset}: {reason}")]
    MalformedSegment { offset: u64, reason: String },

    #[error("Invalid file header at offset {offset}: {reason}")]
    InvalidHeader { offset: u64, reason: String },

    #[error("Invalid GUID text: {0}")]
    InvalidGuid(String),

    #[error("Segment not found: {0}")]
    SegmentNotFound(Guid),
}

impl JtError {
    /// True for the lookup failure, which leaves the parsed file usable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, JtError::SegmentNotFound(_))
    }

    /// Byte offset the error refers to, when it carries one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            JtError::UnexpectedEndOfInput { offset, .. }
            | JtError::UnknownSegmentType { offset, .. }
            | JtError::MalformedSegment { offset, .. }
            | JtError::InvalidHeader { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, JtError>;
