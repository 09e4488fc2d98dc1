//! Scope splitter for aggregate RoleTemplate YAML files
//!
//! Partitions one aggregate file into `<scope>-roletemplates.yaml` files by
//! the scope classification label, carrying the input's 4-line header into
//! every output file and renaming the legacy `global` scope to `platform`.
//!
//! # Example
//!
//! ```rust,ignore
//! let report = rtctl_split::split_file(
//!     "templates/roletemplates.yaml",
//!     "templates/roletemplates",
//! )?;
//! println!("split {} documents", report.total());
//! ```

pub mod error;
pub mod splitter;

// Re-exports for convenience
pub use error::SplitError;
pub use splitter::{split_file, SplitPlan, SplitReport, HEADER_LINES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
