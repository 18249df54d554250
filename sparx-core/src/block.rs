//! Sparse frame blocks.
//!
//! A [`SparseBlock`] is the unit of exchange between a frame reader and
//! the downstream filter/correlation stage: columnar per-frame arrays of
//! (pixel index, photon count) pairs plus bookkeeping. The block is an
//! owned value; whoever receives it releases it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A window of consecutive frames in sparse representation.
///
/// For every frame slot `i`:
/// `index[i].len() == value[i].len() == pixels_per_frame[i]`.
/// `clock` and `ticks` carry the absolute frame number of each slot.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparseBlock {
    /// Row-major pixel indices per frame, in event arrival order.
    pub index: Vec<Vec<u32>>,
    /// Photon counts per frame, parallel to `index`.
    pub value: Vec<Vec<f32>>,
    /// Number of lit pixels in each frame.
    pub pixels_per_frame: Vec<u32>,
    /// Absolute frame number of each slot.
    pub clock: Vec<f64>,
    /// Absolute frame number of each slot (duplicated for the IMM-style
    /// block layout the correlation stage consumes).
    pub ticks: Vec<f64>,
    /// Number of frame slots in the block.
    pub frames: usize,
    /// Block identifier assigned by the producing reader.
    pub id: u32,
}

impl SparseBlock {
    /// Creates an empty block with capacity for `frames` slots.
    #[must_use]
    pub fn with_capacity(frames: usize) -> Self {
        Self {
            index: Vec::with_capacity(frames),
            value: Vec::with_capacity(frames),
            pixels_per_frame: Vec::with_capacity(frames),
            clock: Vec::with_capacity(frames),
            ticks: Vec::with_capacity(frames),
            frames: 0,
            id: 0,
        }
    }

    /// Appends one frame slot.
    ///
    /// `index` and `value` must be parallel arrays; an empty pair is a
    /// frame with no recorded events.
    pub fn push_frame(&mut self, frame_number: u64, index: Vec<u32>, value: Vec<f32>) {
        debug_assert_eq!(index.len(), value.len());
        self.pixels_per_frame.push(index.len() as u32);
        self.clock.push(frame_number as f64);
        self.ticks.push(frame_number as f64);
        self.index.push(index);
        self.value.push(value);
        self.frames += 1;
    }

    /// Returns the number of frame slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames
    }

    /// Returns true if the block holds no frame slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// Total number of events across all slots.
    #[must_use]
    pub fn total_pixels(&self) -> u64 {
        self.pixels_per_frame.iter().map(|&n| u64::from(n)).sum()
    }
}
