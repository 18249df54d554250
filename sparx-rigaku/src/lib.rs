//! sparx-rigaku: Rigaku sparse event-stream format.
//!
//! The Rigaku photon-counting detector writes one packed 64-bit record
//! per photon event, with the frame number, pixel position, and photon
//! count carried in bit fields. This crate provides the record layout,
//! the frame demultiplexer that groups a whole dump by frame number, and
//! the reader configuration.
//!
//! # Key components
//!
//! - [`RigakuRecord`] - packed record with bit field extraction
//! - [`FrameIndex`] - records grouped by frame number, arrival order kept
//! - [`RigakuConfig`] - explicit construction inputs for a reader

mod config;
mod demux;
mod error;
mod record;

pub use config::RigakuConfig;
pub use demux::FrameIndex;
pub use error::{Error, Result};
pub use record::RigakuRecord;
