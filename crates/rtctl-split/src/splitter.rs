//! The scope splitter
//!
//! Partitions one aggregate roletemplates file into per-scope files keyed on
//! the scope classification label, rewriting the legacy `global` value to
//! `platform` along the way. Document text is preserved byte-for-byte except
//! for the two rewrites.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use rtctl_template::{DocumentSet, TemplateDocument};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SplitError;

/// Number of leading input lines carried over as the shared header of every
/// output file.
pub const HEADER_LINES: usize = 4;

/// Legacy scope label value, rewritten on output.
const LEGACY_SCOPE: &str = "global";

/// Replacement for the legacy scope value.
const RENAMED_SCOPE: &str = "platform";

static GLOBAL_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(iam\.theriseunion\.io/scope:)\s*global").expect("label rewrite regex is valid")
});

/// Matches `name:` values with the legacy prefix; only `name:` lines, not
/// arbitrary `global-` occurrences.
static GLOBAL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\s+name:\s+)global-").expect("name rewrite regex is valid"));

/// In-memory result of planning a split.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    /// Shared header prepended to every output file
    pub header: String,
    /// Documents grouped by (possibly rewritten) scope, in first-seen order
    pub groups: IndexMap<String, Vec<TemplateDocument>>,
    /// Documents dropped for carrying no scope label
    pub dropped: usize,
}

impl SplitPlan {
    /// Build the plan for one aggregate file's content
    ///
    /// The first fragment (everything before the first separator) is treated
    /// as preamble and never grouped; blank fragments are ignored; fragments
    /// without a scope label are dropped and counted.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let header = header_of(content);
        let set = DocumentSet::parse(content);

        let mut groups: IndexMap<String, Vec<TemplateDocument>> = IndexMap::new();
        let mut dropped = 0;

        // Skip the preamble fragment
        for doc in set.documents().iter().skip(1) {
            if doc.is_blank() {
                continue;
            }

            let Some(scope) = doc.scope_label() else {
                warn!(name = ?doc.name(), "document has no scope label, dropped");
                dropped += 1;
                continue;
            };

            if scope == LEGACY_SCOPE {
                let renamed = rename_global(doc);
                groups
                    .entry(RENAMED_SCOPE.to_string())
                    .or_default()
                    .push(renamed);
            } else {
                groups
                    .entry(scope.to_string())
                    .or_default()
                    .push(doc.clone());
            }
        }

        Self {
            header,
            groups,
            dropped,
        }
    }

    /// Render one scope group as full file content
    #[must_use]
    pub fn render_group(&self, scope: &str) -> Option<String> {
        let docs = self.groups.get(scope)?;
        let mut out = self.header.clone();
        for doc in docs {
            out.push_str("---\n");
            out.push_str(doc.as_str());
            if !doc.as_str().ends_with('\n') {
                out.push('\n');
            }
        }
        Some(out)
    }

    /// Total number of grouped documents (dropped ones excluded)
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Per-scope document counts of a completed split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Document count per scope, in first-seen order
    pub counts: IndexMap<String, usize>,
    /// Documents excluded for carrying no scope label
    pub dropped: usize,
}

impl SplitReport {
    /// Grand total of grouped documents
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Split an aggregate file into per-scope files under `out_dir`
///
/// Writes one `<scope>-roletemplates.yaml` per group, each starting with the
/// input's first [`HEADER_LINES`] lines. The output directory is created if
/// absent.
///
/// # Errors
/// [`SplitError`] on any file I/O failure; the run aborts at the first one.
pub fn split_file(input: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<SplitReport, SplitError> {
    let input = input.as_ref();
    let out_dir = out_dir.as_ref();

    let content = fs::read_to_string(input).map_err(|e| SplitError::read(input, e))?;
    let plan = SplitPlan::from_content(&content);

    fs::create_dir_all(out_dir).map_err(|e| SplitError::create_dir(out_dir, e))?;

    let mut report = SplitReport {
        dropped: plan.dropped,
        ..SplitReport::default()
    };

    for (scope, docs) in &plan.groups {
        let path = out_dir.join(format!("{scope}-roletemplates.yaml"));
        let rendered = plan
            .render_group(scope)
            .unwrap_or_else(|| plan.header.clone());
        fs::write(&path, rendered).map_err(|e| SplitError::write(&path, e))?;

        debug!(scope, count = docs.len(), path = %path.display(), "wrote scope file");
        report.counts.insert(scope.clone(), docs.len());
    }

    Ok(report)
}

/// First [`HEADER_LINES`] lines of the input, newline-terminated
fn header_of(content: &str) -> String {
    let mut header = content
        .split('\n')
        .take(HEADER_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    header.push('\n');
    header
}

/// Rewrite the legacy `global` scope on one document: the label value and any
/// `name: global-` prefix become `platform`
fn rename_global(doc: &TemplateDocument) -> TemplateDocument {
    let text = GLOBAL_LABEL_RE.replace_all(doc.as_str(), "${1} platform");
    let text = GLOBAL_NAME_RE.replace_all(&text, "${1}platform-");
    TemplateDocument::new(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rtctl_test_utils::{aggregate_file, role_template, unscoped_role_template, SAMPLE_HEADER};

    #[test]
    fn header_is_first_four_lines() {
        let content = aggregate_file(&[role_template("a", "cluster")]);
        assert_eq!(header_of(&content), SAMPLE_HEADER);
    }

    #[test]
    fn groups_by_scope_in_first_seen_order() {
        let content = aggregate_file(&[
            role_template("cluster-a", "cluster"),
            role_template("ns-a", "namespace"),
            role_template("cluster-b", "cluster"),
        ]);
        let plan = SplitPlan::from_content(&content);

        let scopes: Vec<_> = plan.groups.keys().cloned().collect();
        assert_eq!(scopes, ["cluster", "namespace"]);
        assert_eq!(plan.groups["cluster"].len(), 2);
        assert_eq!(plan.groups["namespace"].len(), 1);
        assert_eq!(plan.total(), 3);
    }

    #[test]
    fn input_order_preserved_within_group() {
        let content = aggregate_file(&[
            role_template("cluster-a", "cluster"),
            role_template("cluster-b", "cluster"),
        ]);
        let plan = SplitPlan::from_content(&content);

        let names: Vec<_> = plan.groups["cluster"]
            .iter()
            .map(|d| d.name().unwrap().to_string())
            .collect();
        assert_eq!(names, ["cluster-a", "cluster-b"]);
    }

    #[test]
    fn global_scope_is_renamed_to_platform() {
        let content = aggregate_file(&[role_template("global-view-users", "global")]);
        let plan = SplitPlan::from_content(&content);

        assert!(plan.groups.contains_key("platform"));
        let doc = &plan.groups["platform"][0];
        assert!(doc.as_str().contains("iam.theriseunion.io/scope: platform"));
        assert!(!doc.as_str().contains("scope: global"));
        assert_eq!(doc.name(), Some("platform-view-users"));
    }

    #[test]
    fn name_rewrite_targets_name_lines_only() {
        // A `global-` occurrence outside a name: line must survive
        let doc = TemplateDocument::new(
            "metadata:\n\
             \x20 labels:\n\
             \x20   iam.theriseunion.io/scope: global\n\
             \x20 name: global-view-users\n\
             spec:\n\
             \x20 description: applies to global-view-users consumers\n",
        );
        let renamed = rename_global(&doc);
        assert_eq!(renamed.name(), Some("platform-view-users"));
        assert!(renamed
            .as_str()
            .contains("description: applies to global-view-users consumers"));
    }

    #[test]
    fn unlabeled_documents_are_dropped_and_counted() {
        let content = aggregate_file(&[
            role_template("cluster-a", "cluster"),
            unscoped_role_template("mystery"),
        ]);
        let plan = SplitPlan::from_content(&content);

        assert_eq!(plan.dropped, 1);
        assert_eq!(plan.total(), 1);
        for docs in plan.groups.values() {
            assert!(docs.iter().all(|d| d.name() != Some("mystery")));
        }
    }

    #[test]
    fn preamble_fragment_is_never_grouped() {
        // The header itself carries no scope label and must not count as dropped
        let content = aggregate_file(&[role_template("cluster-a", "cluster")]);
        let plan = SplitPlan::from_content(&content);
        assert_eq!(plan.dropped, 0);
    }

    #[test]
    fn render_group_prepends_header_and_separators() {
        let doc = role_template("cluster-a", "cluster");
        let content = aggregate_file(&[doc.clone()]);
        let plan = SplitPlan::from_content(&content);

        let rendered = plan.render_group("cluster").unwrap();
        assert!(rendered.starts_with(SAMPLE_HEADER));
        assert!(rendered[SAMPLE_HEADER.len()..].starts_with("---\n"));
        // Document body preserved byte-for-byte
        assert!(rendered.ends_with(&doc));
    }

    #[test]
    fn render_unknown_group_is_none() {
        let plan = SplitPlan::from_content(SAMPLE_HEADER);
        assert!(plan.render_group("cluster").is_none());
    }
}
