//! Error types for the splitter

use std::path::PathBuf;

/// Errors during a split run
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// IO error reading the aggregate input file
    #[error("io error reading {path}: {source}")]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error creating the output directory
    #[error("io error creating directory {path}: {source}")]
    CreateDir {
        /// Offending directory
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error writing a per-scope output file
    #[error("io error writing {path}: {source}")]
    Write {
        /// Offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    /// Create read error for path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create directory-creation error for path
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
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
