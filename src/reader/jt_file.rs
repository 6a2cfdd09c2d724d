// src/reader/jt_file.rs
use crate::error::{JtError, Result};
use crate::guid::Guid;
use crate::primitives::{PrimitiveReader, ReadSeek, ReaderOptions};
use crate::segment::{DataSegment, FileHeader, TocEntry, TocSegment};
use crate::types::SegmentType;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::io::Cursor;

/// A fully read JT file: header, TOC and one data segment per TOC entry.
///
/// Built in one pass from a single source and never modified afterwards.
/// The source is only borrowed while reading.
#[derive(Debug, Clone)]
pub struct JtFile {
    header: FileHeader,
    toc: TocSegment,
    segments: Vec<DataSegment>,
    // Segment ID -> first position in `segments`
    index: HashMap<Guid, usize>,
}

/// Constructors for standard file I/O
impl JtFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, ReaderOptions::default())
    }

    pub fn open_with_options(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening JT file: {}", path.display());
        let file = File::open(path)?;
        let source = BufReader::with_capacity(options.buffer_capacity, file);
        let mut reader = PrimitiveReader::with_options(source, options)?;
        Self::read(&mut reader)
    }

    /// Read from any seekable source, e.g. an in-memory `Cursor`.
    pub fn from_reader<R: ReadSeek>(source: R) -> Result<Self> {
        Self::from_reader_with_options(source, ReaderOptions::default())
    }

    pub fn from_reader_with_options<R: ReadSeek>(source: R, options: ReaderOptions) -> Result<Self> {
        let mut reader = PrimitiveReader::with_options(source, options)?;
        Self::read(&mut reader)
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl JtFile {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Memory-mapping JT file: {}", path.display());
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_reader(Cursor::new(mmap))
    }
}

impl JtFile {
    /// Read header, TOC and every data segment the TOC lists.
    ///
    /// Each segment is reached by an absolute seek to its TOC offset, so
    /// `segments()` follows TOC order rather than file order. Any decode
    /// error aborts the whole read.
    pub fn read<R: ReadSeek>(reader: &mut PrimitiveReader<R>) -> Result<Self> {
        let header = FileHeader::read(reader)?;

        if header.toc_offset < 0 {
            return Err(JtError::MalformedSegment {
                offset: reader.position()?,
                reason: format!("negative TOC offset {}", header.toc_offset),
            });
        }
        let distance = header.toc_offset as i64 - reader.position()? as i64;
        reader.skip(distance)?;

        let toc = TocSegment::read(reader)?;
        debug!("TOC at offset {} lists {} segments", header.toc_offset, toc.len());

        let strict = reader.options().strict_segment_lengths;
        let mut segments = Vec::with_capacity(toc.len());
        for entry in &toc.entries {
            segments.push(Self::read_segment(reader, entry, strict)?);
        }

        let mut index = HashMap::with_capacity(segments.len());
        for (position, segment) in segments.iter().enumerate() {
            if index.contains_key(&segment.header.segment_id) {
                warn!("Duplicate segment ID {}, keeping the first occurrence", segment.header.segment_id);
                continue;
            }
            index.insert(segment.header.segment_id, position);
        }

        info!("Read JT file {} with {} data segments", header, segments.len());
        Ok(JtFile {
            header,
            toc,
            segments,
            index,
        })
    }

    fn read_segment<R: ReadSeek>(
        reader: &mut PrimitiveReader<R>,
        entry: &TocEntry,
        strict: bool,
    ) -> Result<DataSegment> {
        let offset = match u64::try_from(entry.segment_offset) {
            Ok(offset) => offset,
            Err(_) => {
                return Err(JtError::MalformedSegment {
                    offset: reader.position()?,
                    reason: format!(
                        "TOC entry {} has negative offset {}",
                        entry.segment_id, entry.segment_offset
                    ),
                })
            }
        };
        reader.seek(offset)?;

        let segment = DataSegment::read(reader)?;
        let header = &segment.header;

        // TOC and segment header are known to disagree in real files
        if header.segment_length != entry.segment_length {
            if strict {
                return Err(JtError::MalformedSegment {
                    offset,
                    reason: format!(
                        "TOC declares {} bytes but segment header declares {}",
                        entry.segment_length, header.segment_length
                    ),
                });
            }
            warn!(
                "Segment {} at offset {}: TOC length {} differs from header length {}",
                entry.segment_id, offset, entry.segment_length, header.segment_length
            );
        }
        if header.segment_type != entry.segment_type {
            warn!(
                "Segment {} at offset {}: TOC type {} differs from header type {}",
                entry.segment_id, offset, entry.segment_type, header.segment_type
            );
        }
        if header.segment_id != entry.segment_id {
            warn!(
                "Segment at offset {}: TOC ID {} differs from header ID {}",
                offset, entry.segment_id, header.segment_id
            );
        }

        Ok(segment)
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn toc(&self) -> &TocSegment {
        &self.toc
    }

    /// Data segments in TOC order.
    pub fn segments(&self) -> &[DataSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The segment whose header carries `segment_id`. If several do, the
    /// first in TOC order wins.
    pub fn get_segment(&self, segment_id: &Guid) -> Result<&DataSegment> {
        self.index
            .get(segment_id)
            .map(|&position| &self.segments[position])
            .ok_or(JtError::SegmentNotFound(*segment_id))
    }

    pub fn contains_segment(&self, segment_id: &Guid) -> bool {
        self.index.contains_key(segment_id)
    }

    /// Root Logical Scene Graph segment named by the file header.
    pub fn lsg_segment(&self) -> Option<&DataSegment> {
        self.header
            .lsg_segment_id()
            .and_then(|id| self.get_segment(id).ok())
    }

    pub fn segments_of_type(&self, segment_type: SegmentType) -> impl Iterator<Item = &DataSegment> {
        self.segments
            .iter()
            .filter(move |s| s.header.segment_type == segment_type)
    }
}

impl fmt::Display for JtFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for segment in &self.segments {
            write!(f, "\n{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ByteOrder;
    use std::io::Cursor;

    struct Seg {
        id: Guid,
        toc_type: u32,
        header_type: i32,
        toc_length: i32,
        header_length: i32,
        payload: usize,
    }

    fn seg(n: u32, payload: usize) -> Seg {
        let length = 24 + payload as i32;
        Seg {
            id: Guid::from_parts(n, 0, 0, [0; 8]),
            toc_type: 1,
            header_type: 1,
            toc_length: length,
            header_length: length,
            payload,
        }
    }

    // Header, then segments back to back, then the TOC.
    fn build(segs: &[Seg]) -> Vec<u8> {
        let mut body = Vec::new();
        let mut offsets = Vec::new();
        for s in segs {
            offsets.push((FileHeader::LENGTH + body.len()) as i32);
            body.extend_from_slice(&s.id.to_bytes(ByteOrder::LeastSignificantFirst));
            body.extend_from_slice(&s.header_type.to_le_bytes());
            body.extend_from_slice(&s.header_length.to_le_bytes());
            body.extend(std::iter::repeat(0u8).take(s.payload));
        }
        let toc_offset = (FileHeader::LENGTH + body.len()) as i32;

        let mut data = vec![b' '; 80];
        data[..14].copy_from_slice(b"Version 9.5 JT");
        data.push(0);
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&toc_offset.to_le_bytes());
        data.extend_from_slice(&segs[0].id.to_bytes(ByteOrder::LeastSignificantFirst));
        data.extend(body);

        data.extend_from_slice(&(segs.len() as i32).to_le_bytes());
        for (s, offset) in segs.iter().zip(offsets) {
            data.extend_from_slice(&s.id.to_bytes(ByteOrder::LeastSignificantFirst));
            data.extend_from_slice(&offset.to_le_bytes());
            data.extend_from_slice(&s.toc_length.to_le_bytes());
            data.extend_from_slice(&(s.toc_type << 23).to_le_bytes());
        }
        data
    }

    #[test]
    fn test_toc_after_segments() {
        let jt = JtFile::from_reader(Cursor::new(build(&[seg(1, 8), seg(2, 0), seg(3, 100)]))).unwrap();
        assert_eq!(jt.toc().len(), 3);
        assert_eq!(jt.segment_count(), 3);
        assert_eq!(jt.segments()[2].payload_length, 100);
        assert_eq!(jt.lsg_segment().map(|s| s.offset), Some(105));
        assert_eq!(jt.header().format_version(), Some((9, 5)));
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let mut second = seg(7, 4);
        second.id = Guid::from_parts(1, 0, 0, [0; 8]);
        let jt = JtFile::from_reader(Cursor::new(build(&[seg(1, 8), second]))).unwrap();

        let found = jt.get_segment(&Guid::from_parts(1, 0, 0, [0; 8])).unwrap();
        assert_eq!(found.payload_length, 8);
        assert_eq!(jt.segment_count(), 2);
    }

    #[test]
    fn test_length_and_type_disagreement_is_lenient() {
        let mut s = seg(1, 8);
        s.toc_length = 999;
        s.toc_type = 6;
        let jt = JtFile::from_reader(Cursor::new(build(&[s]))).unwrap();
        assert_eq!(jt.toc().entries[0].segment_type, SegmentType::Shape);
        assert_eq!(jt.segments()[0].header.segment_type, SegmentType::LogicalSceneGraph);
    }

    #[test]
    fn test_strict_lengths_rejects_disagreement() {
        let mut s = seg(1, 8);
        s.toc_length = 999;
        let options = ReaderOptions::default().with_strict_segment_lengths(true);
        let result = JtFile::from_reader_with_options(Cursor::new(build(&[s])), options);
        assert!(matches!(result, Err(JtError::MalformedSegment { offset: 105, .. })));
    }

    #[test]
    fn test_segments_of_type() {
        let mut shape = seg(2, 0);
        shape.toc_type = 6;
        shape.header_type = 6;
        let jt = JtFile::from_reader(Cursor::new(build(&[seg(1, 0), shape, seg(3, 0)]))).unwrap();
        assert_eq!(jt.segments_of_type(SegmentType::Shape).count(), 1);
        assert_eq!(jt.segments_of_type(SegmentType::LogicalSceneGraph).count(), 2);
        assert_eq!(jt.segments_of_type(SegmentType::Ulp).count(), 0);
    }

    #[test]
    fn test_not_found_is_recoverable() {
        let jt = JtFile::from_reader(Cursor::new(build(&[seg(1, 0)]))).unwrap();
        let missing = Guid::from_parts(42, 0, 0, [0; 8]);
        let err = jt.get_segment(&missing).unwrap_err();
        assert!(err.is_not_found());
        assert!(!jt.contains_segment(&missing));
        assert!(jt.get_segment(&Guid::from_parts(1, 0, 0, [0; 8])).is_ok());
    }

    #[test]
    fn test_display_lists_segments() {
        let jt = JtFile::from_reader(Cursor::new(build(&[seg(1, 0), seg(2, 0)]))).unwrap();
        let text = jt.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Version 9.5 JT (LsbFirst)");
        assert!(lines[1].ends_with(": LogicalSceneGraph (24 bytes)"));
    }

    #[test]
    fn test_jt_file_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JtFile>();
    }
}
