//! uiPermissions patcher for RoleTemplate YAML files
//!
//! Inserts a `uiPermissions` block under the `spec:` key of each RoleTemplate
//! whose name appears in a static permission table, leaving every other byte
//! of the file untouched. Re-running on an already-patched file changes
//! nothing.
//!
//! # Core Operations
//!
//! - [`Patcher::patch_file`]: patch one multi-document file in place
//! - [`append_standard_templates`]: append the standard namespace templates
//!
//! # Example
//!
//! ```rust,ignore
//! use rtctl_patch::Patcher;
//! use rtctl_template::Scope;
//!
//! let patcher = Patcher::for_scope(Scope::Cluster).unwrap();
//! let report = patcher.patch_file("templates/roletemplates/cluster-roletemplates.yaml")?;
//! println!("updated {}", report.updated());
//! ```

pub mod error;
pub mod outcome;
pub mod patcher;
pub mod standard;
pub mod tables;

// Re-exports for convenience
pub use error::PatchError;
pub use outcome::{DocumentPatch, PatchOutcome, PatchReport};
pub use patcher::Patcher;
pub use standard::{append_standard_templates, AppendOutcome, STANDARD_NAMESPACE_TEMPLATES};
pub use tables::{
    PermissionTable, CLUSTER_UI_PERMISSIONS, NAMESPACE_UI_PERMISSIONS, PLATFORM_UI_PERMISSIONS,
    WORKSPACE_UI_PERMISSIONS,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
