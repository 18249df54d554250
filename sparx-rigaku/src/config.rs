//! Reader configuration.
//!
//! The original pipeline pulls frame geometry and the dump path out of
//! the acquisition metadata; this crate only defines the explicit value
//! carrying them to reader construction. A JSON sidecar form is provided
//! for tooling and tests.

use crate::Result;
use serde::Deserialize;
use sparx_core::FrameGeometry;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Construction inputs for a Rigaku reader.
#[derive(Debug, Clone, Deserialize)]
pub struct RigakuConfig {
    /// Path of the binary dump to open.
    pub path: PathBuf,
    /// Detector frame width in pixels.
    pub frame_width: u32,
    /// Detector frame height in pixels.
    pub frame_height: u32,
}

impl RigakuConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P, frame_width: u32, frame_height: u32) -> Self {
        Self {
            path: path.into(),
            frame_width,
            frame_height,
        }
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the JSON does not
    /// match the schema, or the geometry is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;
        config.geometry()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the JSON does not match the schema or the
    /// geometry is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.geometry()?;
        Ok(config)
    }

    /// Validated frame geometry.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero.
    pub fn geometry(&self) -> Result<FrameGeometry> {
        Ok(FrameGeometry::new(self.frame_width, self.frame_height)?)
    }
}
