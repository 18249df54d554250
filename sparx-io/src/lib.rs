//! sparx-io: File access for sparse photon-event streams.
//!
//! This crate provides memory-mapped record loading via memmap2 and the
//! Rigaku implementation of the [`sparx_core::FrameReader`] capability
//! surface.

mod error;
mod loader;
mod reader;

pub use error::{Error, Result};
pub use loader::{RecordFile, RECORD_SIZE};
pub use reader::RigakuReader;
