//! Ordered fragments of a multi-document file
//!
//! Splitting on [`DOCUMENT_SEPARATOR`] and rejoining with it is a lossless
//! round trip; every fragment (including blank ones and any preamble before
//! the first separator) is kept verbatim.

use crate::document::{TemplateDocument, DOCUMENT_SEPARATOR};

/// Ordered collection of document fragments from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<TemplateDocument>,
}

impl DocumentSet {
    /// Split file content on the document separator
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self {
            documents: content
                .split(DOCUMENT_SEPARATOR)
                .map(TemplateDocument::from)
                .collect(),
        }
    }

    /// Number of fragments (blank and preamble fragments included)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the set holds no fragments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Borrow the fragments
    #[inline]
    #[must_use]
    pub fn documents(&self) -> &[TemplateDocument] {
        &self.documents
    }

    /// Mutably borrow the fragments
    #[inline]
    pub fn documents_mut(&mut self) -> &mut [TemplateDocument] {
        &mut self.documents
    }

    /// Rejoin the fragments with the document separator
    ///
    /// `DocumentSet::parse(s).join() == s` for every input.
    #[must_use]
    pub fn join(&self) -> String {
        self.documents
            .iter()
            .map(TemplateDocument::as_str)
            .collect::<Vec<_>>()
            .join(DOCUMENT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_counts_fragments() {
        let set = DocumentSet::parse("a: 1\n---\nb: 2\n---\nc: 3");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn join_round_trips_byte_for_byte() {
        let content = "# header\n---\nkind: RoleTemplate\nmetadata:\n  name: x\n---\n\n---\nb: 2\n";
        let set = DocumentSet::parse(content);
        assert_eq!(set.join(), content);
    }

    #[test]
    fn separator_line_inside_content_is_a_boundary() {
        // A `---` line is always a document boundary, even mid-file
        let set = DocumentSet::parse("a\n---\nb");
        assert_eq!(set.documents()[0].as_str(), "a");
        assert_eq!(set.documents()[1].as_str(), "b");
    }

    #[test]
    fn single_fragment_when_no_separator() {
        let set = DocumentSet::parse("just: one\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.join(), "just: one\n");
    }

    #[test]
    fn mutation_survives_join() {
        let mut set = DocumentSet::parse("spec:\n  a: 1\n---\nspec:\n  b: 2\n");
        set.documents_mut()[1].insert_under_spec("  uiPermissions:\n    - x/y.view\n");
        assert_eq!(
            set.join(),
            "spec:\n  a: 1\n---\nspec:\n  uiPermissions:\n    - x/y.view\n  b: 2\n"
        );
    }
}
