//! Rigaku frame reader.

use crate::loader::RecordFile;
use crate::Result;
use rayon::prelude::*;
use sparx_core::{FrameGeometry, FrameReader, SparseBlock};
use sparx_rigaku::{FrameIndex, RigakuConfig};
use std::path::Path;

/// Identifier stamped on every block this reader produces. Constant, so
/// that a rewound reader reproduces its first blocks exactly.
const SPARSE_BLOCK_ID: u32 = 1;

/// Frame reader for the Rigaku sparse binary dump.
///
/// The whole file is read and demultiplexed by frame number at
/// construction; retrieval then serves windows of consecutive frames
/// from the in-memory index. The index is immutable after construction,
/// which is what allows frames of one window to be decoded in parallel.
pub struct RigakuReader {
    index: FrameIndex,
    geometry: FrameGeometry,
    next_frame: u64,
}

impl RigakuReader {
    /// Opens a Rigaku dump and demultiplexes it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not a whole
    /// number of 8-byte records.
    pub fn open<P: AsRef<Path>>(path: P, geometry: FrameGeometry) -> Result<Self> {
        let file = RecordFile::open(path)?;
        let index = FrameIndex::from_records(file.records());
        Ok(Self {
            index,
            geometry,
            next_frame: 0,
        })
    }

    /// Opens a reader from a configuration value.
    ///
    /// # Errors
    /// Returns an error if the geometry is invalid or the dump cannot be
    /// opened.
    pub fn from_config(config: &RigakuConfig) -> Result<Self> {
        let geometry = config.geometry()?;
        Self::open(&config.path, geometry)
    }

    /// Geometry this reader remaps pixel indices with.
    #[must_use]
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Next frame number to be served.
    #[must_use]
    pub fn cursor(&self) -> u64 {
        self.next_frame
    }

    /// The demultiplexed frame index.
    #[must_use]
    pub fn frame_index(&self) -> &FrameIndex {
        &self.index
    }

    /// Decodes one frame into parallel index/value arrays, empty when
    /// the frame recorded no events.
    fn decode_frame(&self, frame_number: u64) -> (Vec<u32>, Vec<f32>) {
        let Some(records) = self.index.get(frame_number) else {
            return (Vec::new(), Vec::new());
        };

        let mut index = Vec::with_capacity(records.len());
        let mut value = Vec::with_capacity(records.len());
        for record in records {
            let (i, v) = record.decode(&self.geometry);
            index.push(i);
            value.push(v);
        }
        (index, value)
    }
}

impl FrameReader for RigakuReader {
    fn next_frames(&mut self, count: usize) -> SparseBlock {
        let start = self.next_frame;

        // Frames are independent once demultiplexed; decode the window in
        // parallel. Collect keeps window order.
        let decoded: Vec<(Vec<u32>, Vec<f32>)> = (0..count as u64)
            .into_par_iter()
            .map(|offset| self.decode_frame(start + offset))
            .collect();

        let mut block = SparseBlock::with_capacity(count);
        block.id = SPARSE_BLOCK_ID;
        for (offset, (index, value)) in decoded.into_iter().enumerate() {
            block.push_frame(start + offset as u64, index, value);
        }

        self.next_frame += count as u64;
        block
    }

    fn skip_frames(&mut self, count: usize) {
        self.next_frame += count as u64;
    }

    fn reset(&mut self) {
        self.next_frame = 0;
    }

    fn compression(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparx_rigaku::RigakuRecord;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_records(records: &[RigakuRecord]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for record in records {
            file.write_all(&record.raw().to_le_bytes()).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_open_missing_file_fails() {
        let geometry = FrameGeometry::new(2, 2).unwrap();
        assert!(RigakuReader::open("/nonexistent/run42.bin", geometry).is_err());
    }

    #[test]
    fn test_empty_dump() {
        let file = write_records(&[]);
        let geometry = FrameGeometry::new(2, 2).unwrap();
        let mut reader = RigakuReader::open(file.path(), geometry).unwrap();

        assert!(reader.frame_index().is_empty());

        let block = reader.next_frames(1);
        assert_eq!(block.frames, 1);
        assert_eq!(block.pixels_per_frame, vec![0]);
        assert!(block.index[0].is_empty());
        assert!(block.value[0].is_empty());
        assert_eq!(reader.cursor(), 1);
    }

    #[test]
    fn test_compression_flag() {
        let file = write_records(&[]);
        let geometry = FrameGeometry::new(2, 2).unwrap();
        let reader = RigakuReader::open(file.path(), geometry).unwrap();
        assert!(reader.compression());
    }
}
