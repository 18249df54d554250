//! Frame reader capability trait.

use crate::block::SparseBlock;

/// Windowed access to demultiplexed detector frames.
///
/// Each wire format (Rigaku sparse dump, IMM, ...) implements this trait
/// over its own record layout; the orchestration layer drives exactly one
/// reader per acquisition, selected by configuration at startup.
///
/// Readers keep a single cursor: the next frame number to serve. Every
/// retrieval or skip advances it by the requested count, whether or not
/// the frames in that window held any events.
pub trait FrameReader {
    /// Serves `count` consecutive frames starting at the cursor and
    /// advances the cursor by `count`.
    ///
    /// Frames past the end of the recorded data come back with zero
    /// pixels rather than failing; the total frame count is acquisition
    /// metadata, not something the event stream encodes, so exhaustion is
    /// the caller's concern.
    fn next_frames(&mut self, count: usize) -> SparseBlock;

    /// Advances the cursor by `count` frames without decoding anything.
    fn skip_frames(&mut self, count: usize);

    /// Rewinds the cursor to frame 0.
    ///
    /// All frames stay buffered in memory, so rewinding never re-reads
    /// the file.
    fn reset(&mut self);

    /// Returns true when this reader yields sparse (index, value) pairs
    /// rather than dense per-pixel arrays.
    fn compression(&self) -> bool;
}
