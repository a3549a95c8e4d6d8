//! File collaborator
//!
//! The only point of real I/O. Descriptors are written strictly after all
//! parsing and rendering has succeeded; existing files are overwritten
//! silently, except that migration and test filenames embed the
//! [`Sequence`] discriminator so repeated generations never collide.

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::scaffold::composer::ArtifactDescriptor;
use crate::scaffold::error::GenerateError;

/// Writes artifact descriptors and answers directory queries.
pub struct ArtifactWriter;

impl ArtifactWriter {
    /// Write one descriptor, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Write`] when directory creation or the write
    /// itself fails.
    pub fn write(descriptor: &ArtifactDescriptor) -> Result<(), GenerateError> {
        if let Some(parent) = descriptor.path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&descriptor.path, &descriptor.content).map_err(|source| {
            GenerateError::Write {
                path: descriptor.path.clone(),
                source,
            }
        })
    }

    /// Write descriptors in order, stopping at the first failure. Files
    /// already written are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerateError::Write`] encountered.
    pub fn write_all(descriptors: &[ArtifactDescriptor]) -> Result<(), GenerateError> {
        for descriptor in descriptors {
            Self::write(descriptor)?;
        }
        Ok(())
    }

    /// Read a generated file back.
    ///
    /// # Errors
    ///
    /// Propagates the underlying I/O error.
    pub fn read_file(path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Delete a generated file.
    ///
    /// # Errors
    ///
    /// Propagates the underlying I/O error.
    pub fn delete_file(path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    /// Remove every entry of a directory, keeping the directory itself. A
    /// missing directory is not an error.
    ///
    /// # Errors
    ///
    /// Propagates the underlying I/O error.
    pub fn clean_directory(path: &Path) -> io::Result<()> {
        if !path.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }

    /// Most recently generated file in a directory, decided by the
    /// name-embedded discriminator (lexicographic max), not by modification
    /// time.
    ///
    /// # Errors
    ///
    /// Propagates the underlying I/O error.
    pub fn latest_file(dir: &Path) -> io::Result<Option<PathBuf>> {
        let mut latest: Option<PathBuf> = None;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let newer = latest
                .as_ref()
                .map_or(true, |current| path.file_name() > current.file_name());
            if newer {
                latest = Some(path);
            }
        }
        Ok(latest)
    }
}

/// Monotonically increasing filename discriminator.
///
/// A microsecond-resolution UTC stamp, bumped past the previous value when
/// two requests land on the same tick, so ordering never relies on
/// file-system modification times.
#[derive(Debug, Default)]
pub struct Sequence {
    last_micros: AtomicI64,
}

impl Sequence {
    /// Fresh sequence starting at the current clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next discriminator, strictly greater than any previous one from this
    /// sequence.
    pub fn next(&self) -> String {
        let now = Utc::now().timestamp_micros();
        let prev = self
            .last_micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(0);
        let tick = now.max(prev + 1);

        DateTime::<Utc>::from_timestamp_micros(tick).map_or_else(
            || tick.to_string(),
            |stamp| stamp.format("%Y_%m_%d_%H%M%S%6f").to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::composer::{ArtifactDescriptor, ArtifactKind};
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let descriptor = ArtifactDescriptor {
            kind: ArtifactKind::View,
            path: temp.path().join("views/book/index.blade.php"),
            content: String::new(),
        };

        ArtifactWriter::write(&descriptor).unwrap();
        assert!(descriptor.path.exists());
    }

    #[test]
    fn test_write_overwrites_silently() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.php");
        let first = ArtifactDescriptor {
            kind: ArtifactKind::Model,
            path: path.clone(),
            content: "one".to_string(),
        };
        let second = ArtifactDescriptor {
            kind: ArtifactKind::Model,
            path: path.clone(),
            content: "two".to_string(),
        };

        ArtifactWriter::write(&first).unwrap();
        ArtifactWriter::write(&second).unwrap();
        assert_eq!(ArtifactWriter::read_file(&path).unwrap(), "two");
    }

    #[test]
    fn test_clean_directory_keeps_the_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("file.php"), "x").unwrap();

        ArtifactWriter::clean_directory(temp.path()).unwrap();
        assert!(temp.path().exists());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_delete_file_removes_one_artifact() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("admin.php");
        std::fs::write(&path, "<?php").unwrap();

        ArtifactWriter::delete_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_clean_directory_tolerates_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(ArtifactWriter::clean_directory(&temp.path().join("absent")).is_ok());
    }

    #[test]
    fn test_latest_file_uses_name_order() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("2012_01_01_000001_b.php"), "").unwrap();
        std::fs::write(temp.path().join("2012_01_01_000002_a.php"), "").unwrap();

        let latest = ArtifactWriter::latest_file(temp.path()).unwrap().unwrap();
        assert_eq!(
            latest.file_name().unwrap().to_string_lossy(),
            "2012_01_01_000002_a.php"
        );
    }

    #[test]
    fn test_sequence_is_strictly_increasing() {
        let sequence = Sequence::new();
        let mut previous = sequence.next();
        for _ in 0..100 {
            let next = sequence.next();
            assert!(next > previous, "{next} should sort after {previous}");
            previous = next;
        }
    }
}
