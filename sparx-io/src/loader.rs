//! Memory-mapped record files.

use crate::{Error, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Width of one packed record in bytes.
pub const RECORD_SIZE: usize = 8;

/// A memory-mapped Rigaku record file.
///
/// The on-disk format is a flat sequence of 8-byte records with no
/// header, trailer, or padding. Records are stored little-endian;
/// decoding goes through `u64::from_le_bytes` so the result never
/// depends on host byte order. Mapping the file keeps the whole dump
/// addressable without a large stack or heap copy.
pub struct RecordFile {
    mmap: Mmap,
    path: PathBuf,
}

impl RecordFile {
    /// Opens and maps a record file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or memory-mapped,
    /// or if its length is not a whole number of records. A truncated
    /// final record is a format error, never silently dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        // SAFETY: The file is opened read-only and we assume it is not modified concurrently.
        // This is the standard safety contract for memory mapping.
        #[allow(unsafe_code)]
        let mmap = unsafe { Mmap::map(&file)? };
        let path = path.as_ref().to_path_buf();

        if !mmap.len().is_multiple_of(RECORD_SIZE) {
            return Err(Error::InvalidFormat(format!(
                "file size {} is not a multiple of {} (file: {})",
                mmap.len(),
                RECORD_SIZE,
                path.display()
            )));
        }

        Ok(Self { mmap, path })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Returns true if the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// Number of packed records in the file.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.mmap.len() / RECORD_SIZE
    }

    /// Path this file was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterates the packed records in file order.
    ///
    /// # Panics
    /// Panics if a chunk is not exactly 8 bytes. This should be
    /// unreachable because `chunks_exact` guarantees each chunk length.
    pub fn records(&self) -> impl Iterator<Item = u64> + '_ {
        self.mmap.chunks_exact(RECORD_SIZE).map(|chunk| {
            let bytes: [u8; 8] = chunk.try_into().unwrap();
            u64::from_le_bytes(bytes)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            RecordFile::open("/nonexistent/run42.bin"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_open_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let records = RecordFile::open(file.path()).unwrap();
        assert!(records.is_empty());
        assert_eq!(records.record_count(), 0);
        assert_eq!(records.records().count(), 0);
    }

    #[test]
    fn test_truncated_record_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 20]).unwrap(); // 2.5 records
        file.flush().unwrap();

        assert!(matches!(
            RecordFile::open(file.path()),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_records_little_endian() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&0x0102_0304_0506_0708u64.to_le_bytes())
            .unwrap();
        file.write_all(&u64::MAX.to_le_bytes()).unwrap();
        file.flush().unwrap();

        let records = RecordFile::open(file.path()).unwrap();
        assert_eq!(records.record_count(), 2);
        let values: Vec<u64> = records.records().collect();
        assert_eq!(values, vec![0x0102_0304_0506_0708, u64::MAX]);
    }
}
