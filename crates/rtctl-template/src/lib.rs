//! RoleTemplate document model
//!
//! Text-level access to multi-document RoleTemplate YAML files. Documents are
//! kept as opaque text and queried through line-anchored patterns so that
//! every byte the tooling does not deliberately touch (comments, key order,
//! quoting, indentation) survives a round trip unchanged.
//!
//! # Core Types
//!
//! - [`DocumentSet`]: ordered fragments of a multi-document file; joining
//!   reproduces the input byte-for-byte
//! - [`TemplateDocument`]: one document with field extraction and the
//!   `spec:`-anchored insertion primitive
//! - [`Scope`]: the organizational level a RoleTemplate applies to

pub mod document;
pub mod scope;
pub mod set;

// Re-exports for convenience
pub use document::{TemplateDocument, DOCUMENT_SEPARATOR};
pub use scope::{Scope, UnknownScope};
pub use set::DocumentSet;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
