//! Frame demultiplexing of the raw record stream.

use crate::RigakuRecord;
use std::collections::BTreeMap;

/// Records grouped by frame number, arrival order preserved within each
/// frame.
///
/// Built once, eagerly, when a dump is opened; read-only afterwards.
/// Frame numbers need not be contiguous or ascending in the stream. A
/// frame with no events has no entry here and is served as empty by the
/// reader.
#[derive(Debug, Clone, Default)]
pub struct FrameIndex {
    frames: BTreeMap<u64, Vec<RigakuRecord>>,
}

impl FrameIndex {
    /// Groups a raw record sequence by its embedded frame numbers.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut frames: BTreeMap<u64, Vec<RigakuRecord>> = BTreeMap::new();
        for raw in records {
            let record = RigakuRecord::new(raw);
            frames.entry(record.frame_number()).or_default().push(record);
        }
        Self { frames }
    }

    /// Returns the records of one frame, or `None` if it held no events.
    #[must_use]
    pub fn get(&self, frame_number: u64) -> Option<&[RigakuRecord]> {
        self.frames.get(&frame_number).map(Vec::as_slice)
    }

    /// Number of frames that recorded at least one event.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total number of records across all frames.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.frames.values().map(Vec::len).sum()
    }

    /// Highest frame number with any events, or `None` for an empty dump.
    #[must_use]
    pub fn max_frame_number(&self) -> Option<u64> {
        self.frames.keys().next_back().copied()
    }

    /// Returns true if the dump held no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
