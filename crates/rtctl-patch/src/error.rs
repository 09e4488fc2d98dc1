//! Error types for the patcher
//!
//! Guard failures (missing table entry, already patched, no `spec:` anchor)
//! are outcomes, not errors; see [`crate::PatchOutcome`]. Only file I/O can
//! fail a patch run.

use std::path::PathBuf;

/// Errors during a patch run
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Write {
        /// Offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    /// Create read error for path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create write error for path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display() {
        let err = PatchError::read(
            "templates/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("templates/missing.yaml"));
    }
}
