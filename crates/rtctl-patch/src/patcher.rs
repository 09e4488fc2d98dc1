//! The uiPermissions patcher
//!
//! Splits a multi-document file on the literal `---` separator, inserts a
//! `uiPermissions` block under the `spec:` key of each matching document, and
//! rejoins the fragments. Documents that fail a guard are left byte-for-byte
//! untouched.

use std::fs;
use std::path::Path;

use rtctl_template::{DocumentSet, Scope, TemplateDocument};
use tracing::{debug, warn};

use crate::error::PatchError;
use crate::outcome::{PatchOutcome, PatchReport};
use crate::tables::PermissionTable;

/// Patches RoleTemplate documents against one permission table.
#[derive(Debug, Clone)]
pub struct Patcher<'t> {
    table: &'t PermissionTable,
    skip_comment_documents: bool,
}

impl<'t> Patcher<'t> {
    /// Create a patcher over a table
    #[inline]
    #[must_use]
    pub fn new(table: &'t PermissionTable) -> Self {
        Self {
            table,
            skip_comment_documents: false,
        }
    }

    /// Also skip fragments that begin with a comment marker
    ///
    /// The namespace file interleaves section-comment fragments between
    /// documents; the namespace variant skips them up front.
    #[inline]
    #[must_use]
    pub fn skip_comment_documents(mut self, yes: bool) -> Self {
        self.skip_comment_documents = yes;
        self
    }

    /// Built-in patcher for a scope, if the scope has a table
    #[must_use]
    pub fn for_scope(scope: Scope) -> Option<Patcher<'static>> {
        let table = PermissionTable::for_scope(scope)?;
        Some(Patcher::new(table).skip_comment_documents(scope == Scope::Namespace))
    }

    /// Table this patcher applies
    #[inline]
    #[must_use]
    pub fn table(&self) -> &PermissionTable {
        self.table
    }

    /// Patch file content in memory
    ///
    /// Returns the rejoined content and the per-document report. Unmodified
    /// input yields byte-identical output.
    #[must_use]
    pub fn patch_content(&self, content: &str) -> (String, PatchReport) {
        let mut set = DocumentSet::parse(content);
        let mut report = PatchReport::default();

        for doc in set.documents_mut() {
            let outcome = self.patch_document(doc);
            report.push(doc.name(), outcome);
        }

        (set.join(), report)
    }

    /// Patch a file in place
    ///
    /// The file is rewritten in one pass with no atomic rename: a failure
    /// before the write leaves the original intact, a failure mid-write can
    /// corrupt it.
    ///
    /// # Errors
    /// [`PatchError::Read`] / [`PatchError::Write`] on file I/O failure.
    pub fn patch_file(&self, path: impl AsRef<Path>) -> Result<PatchReport, PatchError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PatchError::read(path, e))?;

        let (patched, report) = self.patch_content(&content);

        fs::write(path, patched).map_err(|e| PatchError::write(path, e))?;

        debug!(
            path = %path.display(),
            updated = report.updated(),
            scope = %self.table.scope(),
            "patched file"
        );
        Ok(report)
    }

    fn patch_document(&self, doc: &mut TemplateDocument) -> PatchOutcome {
        if doc.is_blank() || (self.skip_comment_documents && doc.starts_with_comment()) {
            return PatchOutcome::SkippedBlank;
        }

        let Some(name) = doc.name().map(str::to_string) else {
            return PatchOutcome::SkippedNoName;
        };

        let Some(permissions) = self.table.get(&name) else {
            debug!(name, "not in permission table, skipped");
            return PatchOutcome::SkippedNotInTable;
        };

        if doc.has_ui_permissions() {
            warn!(name, "already has uiPermissions, skipped");
            return PatchOutcome::SkippedAlreadyPatched;
        }

        let block = ui_permissions_block(permissions);
        if !doc.insert_under_spec(&block) {
            warn!(name, "no spec: field found, skipped");
            return PatchOutcome::SkippedNoSpec;
        }

        PatchOutcome::Updated {
            permissions: permissions.len(),
        }
    }
}

/// Render the block inserted under `spec:`, indentation and newlines included
fn ui_permissions_block(permissions: &[&str]) -> String {
    let mut block = String::from("  uiPermissions:\n");
    for perm in permissions {
        block.push_str("    - ");
        block.push_str(perm);
        block.push('\n');
    }
    block
}
