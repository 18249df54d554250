//! Rigaku packed record layout.

use sparx_core::FrameGeometry;

/// Shift of the frame number field.
const FRAME_SHIFT: u32 = 40;
/// Shift of the raw pixel index field.
const PIXEL_SHIFT: u32 = 16;
/// 20-bit mask for the raw pixel index.
const PIXEL_MASK: u64 = 0xF_FFFF;
/// 11-bit mask for the photon count.
const COUNT_MASK: u64 = 0x7FF;

/// One packed 64-bit photon event, stored little-endian on disk.
///
/// Bit layout (bit 0 = least significant):
///
/// | bits    | field                          |
/// |---------|--------------------------------|
/// | 40..64  | frame number                   |
/// | 16..36  | raw pixel index (column-major) |
/// | 0..11   | photon count (0..=2047)        |
///
/// Bits 11..16 and 36..40 are reserved and never reinterpreted. Counts
/// above 2047 are saturated by the detector at write time; every bit
/// pattern is decodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RigakuRecord(u64);

impl RigakuRecord {
    /// Wraps a raw 64-bit record.
    #[inline]
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Packs an event from its fields; the inverse of the accessors.
    ///
    /// `pixel` and `photon_count` are masked to their field widths.
    #[must_use]
    pub fn encode(frame_number: u64, pixel: u32, photon_count: u16) -> Self {
        Self(
            (frame_number << FRAME_SHIFT)
                | ((u64::from(pixel) & PIXEL_MASK) << PIXEL_SHIFT)
                | (u64::from(photon_count) & COUNT_MASK),
        )
    }

    /// Returns the raw 64-bit value.
    #[inline]
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Acquisition frame this event belongs to.
    #[inline]
    #[must_use]
    pub fn frame_number(self) -> u64 {
        self.0 >> FRAME_SHIFT
    }

    /// Raw column-major pixel index, before geometry remapping.
    #[inline]
    #[must_use]
    pub fn pixel(self) -> u32 {
        ((self.0 >> PIXEL_SHIFT) & PIXEL_MASK) as u32
    }

    /// Photon count for this pixel in this frame.
    #[inline]
    #[must_use]
    pub fn photon_count(self) -> u16 {
        (self.0 & COUNT_MASK) as u16
    }

    /// Decodes into a row-major pixel index and photon count.
    ///
    /// Pure bit extraction plus the geometry transpose remap; no state.
    #[inline]
    #[must_use]
    pub fn decode(self, geometry: &FrameGeometry) -> (u32, f32) {
        (
            geometry.remap(self.pixel()),
            f32::from(self.photon_count()),
        )
    }
}
