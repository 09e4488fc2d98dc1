//! Per-document patch outcomes
//!
//! Guard-based skips are data, not console text, so tests and callers can
//! assert on what happened to each document.

use serde::Serialize;

/// What the patcher did with one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    /// `uiPermissions` block inserted
    Updated {
        /// Number of permission lines written
        permissions: usize,
    },
    /// Blank fragment, or comment-leading fragment where the variant skips
    /// those
    SkippedBlank,
    /// No `name:` line found
    SkippedNoName,
    /// Name has no entry in the permission table
    SkippedNotInTable,
    /// Document already carries a `uiPermissions:` key (idempotence guard)
    SkippedAlreadyPatched,
    /// No bare `spec:` line at column 0 to anchor the insertion
    SkippedNoSpec,
}

impl PatchOutcome {
    /// Whether this outcome modified the document
    #[inline]
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, PatchOutcome::Updated { .. })
    }
}

/// Outcome of one document, with its extracted name when one was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentPatch {
    /// Extracted template name, if any
    pub name: Option<String>,
    /// What happened to the document
    pub outcome: PatchOutcome,
}

/// Full result of a patch pass over one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    /// Per-document outcomes in file order
    pub documents: Vec<DocumentPatch>,
}

impl PatchReport {
    /// Record one document's outcome
    pub fn push(&mut self, name: Option<&str>, outcome: PatchOutcome) {
        self.documents.push(DocumentPatch {
            name: name.map(str::to_string),
            outcome,
        });
    }

    /// Number of documents actually modified
    #[must_use]
    pub fn updated(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.outcome.is_updated())
            .count()
    }

    /// Outcomes of documents that were skipped with a diagnostic
    pub fn warnings(&self) -> impl Iterator<Item = &DocumentPatch> {
        self.documents.iter().filter(|d| {
            matches!(
                d.outcome,
                PatchOutcome::SkippedAlreadyPatched | PatchOutcome::SkippedNoSpec
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_count() {
        let mut report = PatchReport::default();
        report.push(Some("a"), PatchOutcome::Updated { permissions: 2 });
        report.push(Some("b"), PatchOutcome::SkippedNotInTable);
        report.push(None, PatchOutcome::SkippedNoName);
        assert_eq!(report.updated(), 1);
    }

    #[test]
    fn warnings_cover_guard_skips_only() {
        let mut report = PatchReport::default();
        report.push(Some("a"), PatchOutcome::SkippedAlreadyPatched);
        report.push(Some("b"), PatchOutcome::SkippedNoSpec);
        report.push(Some("c"), PatchOutcome::SkippedNotInTable);
        assert_eq!(report.warnings().count(), 2);
    }
}
