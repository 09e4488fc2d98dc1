//! Single-document text model
//!
//! A [`TemplateDocument`] owns the raw text of one RoleTemplate. Field access
//! goes through line-anchored regular expressions; the text is never parsed
//! into a structured YAML value on the editing path.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal separator between documents in a multi-document YAML file.
///
/// Splitting on this string and rejoining with it reproduces the input
/// byte-for-byte; see [`crate::DocumentSet`].
pub const DOCUMENT_SEPARATOR: &str = "\n---\n";

/// First indented `name: <token>` line. Callers must ensure each document
/// carries exactly one `metadata.name` line; the first match wins.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s+name:\s+(\S+)$").expect("name regex is valid"));

/// Bare `spec:` key at column 0. Only such documents are patchable.
static SPEC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^spec:$").expect("spec regex is valid"));

/// Scope classification label carried in `metadata.labels`.
static SCOPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"iam\.theriseunion\.io/scope:\s*(\w+)").expect("scope label regex is valid")
});

/// One RoleTemplate document as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDocument {
    text: String,
}

impl TemplateDocument {
    /// Wrap raw document text
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Borrow the raw text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume into the raw text
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Extract the template name from the first indented `name:` line
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        NAME_RE
            .captures(&self.text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Extract the value of the scope classification label
    #[must_use]
    pub fn scope_label(&self) -> Option<&str> {
        SCOPE_RE
            .captures(&self.text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Whether the document is whitespace only
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the first non-whitespace character is a comment marker
    ///
    /// Fragments holding only section comments (no resource) start this way.
    #[inline]
    #[must_use]
    pub fn starts_with_comment(&self) -> bool {
        self.text.trim_start().starts_with('#')
    }

    /// Whether a `uiPermissions:` key is already present anywhere in the text
    ///
    /// This is the idempotence guard: a document carrying the marker is never
    /// patched again.
    #[inline]
    #[must_use]
    pub fn has_ui_permissions(&self) -> bool {
        self.text.contains("uiPermissions:")
    }

    /// Whether the document has a bare `spec:` line at column 0
    #[inline]
    #[must_use]
    pub fn has_spec_anchor(&self) -> bool {
        SPEC_RE.is_match(&self.text)
    }

    /// Insert a pre-indented block immediately after the first `spec:` line
    ///
    /// Returns `false` (text untouched) when no `spec:` anchor exists. The
    /// block must carry its own indentation and trailing newline.
    pub fn insert_under_spec(&mut self, block: &str) -> bool {
        let Some(m) = SPEC_RE.find(&self.text) else {
            return false;
        };
        let mut at = m.end();
        if self.text[at..].starts_with('\n') {
            at += 1;
        } else {
            // `spec:` is the final line; give it a newline to anchor on
            self.text.insert(at, '\n');
            at += 1;
        }
        self.text.insert_str(at, block);
        true
    }
}

impl AsRef<str> for TemplateDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<String> for TemplateDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TemplateDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
