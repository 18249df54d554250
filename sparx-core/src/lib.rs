//! sparx-core: Core traits and types for sparse photon-event processing.
//!
//! This crate provides the foundational abstractions shared by the
//! per-format ingestion crates: detector frame geometry, the sparse
//! frame block handed to downstream filtering and correlation, and the
//! frame reader capability trait.

pub mod block;
pub mod error;
pub mod geometry;
pub mod reader;

pub use block::SparseBlock;
pub use error::{Error, Result};
pub use geometry::FrameGeometry;
pub use reader::FrameReader;
