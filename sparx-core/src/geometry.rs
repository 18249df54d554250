//! Detector frame geometry and pixel index remapping.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Detector frame dimensions, fixed for the lifetime of a reader.
///
/// Dimensions come from the acquisition metadata, not from the event
/// stream itself; both must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameGeometry {
    width: u32,
    height: u32,
}

impl FrameGeometry {
    /// Creates a geometry, rejecting zero-sized dimensions.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    /// Frame width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels per frame.
    #[must_use]
    pub fn num_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Remaps a raw column-major pixel index to row-major order.
    ///
    /// The detector enumerates pixels down columns; downstream analysis
    /// expects row-major indices:
    /// `row = pixel % height`, `col = pixel / height`, output
    /// `row * width + col`. Integer division is intentional.
    #[inline]
    #[must_use]
    pub fn remap(&self, pixel: u32) -> u32 {
        let row = pixel % self.height;
        let col = pixel / self.height;
        row * self.width + col
    }
}
