//! Testing utilities for the rtctl workspace
//!
//! Shared fixture builders: realistic RoleTemplate documents and aggregate
//! files in the exact shape the tooling reads and writes.

#![allow(missing_docs)]

/// Four-line file header, as carried by every generated roletemplates file.
pub const SAMPLE_HEADER: &str = "# RoleTemplate definitions\n\
                                 # Managed by the IAM chart\n\
                                 # Edits to uiPermissions are made by rtctl\n\
                                 # Do not reorder documents by hand\n";

/// One RoleTemplate document with a scope label and a bare `spec:` anchor.
pub fn role_template(name: &str, scope: &str) -> String {
    format!(
        "apiVersion: iam.theriseunion.io/v1alpha1\n\
         kind: RoleTemplate\n\
         metadata:\n\
         \x20 labels:\n\
         \x20   app.kubernetes.io/managed-by: Helm\n\
         \x20   iam.theriseunion.io/scope: {scope}\n\
         \x20 name: {name}\n\
         spec:\n\
         \x20 displayName:\n\
         \x20   en: {name}\n\
         \x20 rules:\n\
         \x20 - apiGroups:\n\
         \x20   - '*'\n\
         \x20   resources:\n\
         \x20   - '*'\n\
         \x20   verbs:\n\
         \x20   - get\n\
         \x20   - list\n\
         \x20   - watch\n"
    )
}

/// A document that already carries a `uiPermissions` block.
pub fn role_template_with_ui_permissions(name: &str, scope: &str, permissions: &[&str]) -> String {
    let mut block = String::from("  uiPermissions:\n");
    for perm in permissions {
        block.push_str("    - ");
        block.push_str(perm);
        block.push('\n');
    }
    role_template(name, scope).replacen("spec:\n", &format!("spec:\n{block}"), 1)
}

/// A document with no scope label at all (the splitter drops these).
pub fn unscoped_role_template(name: &str) -> String {
    format!(
        "apiVersion: iam.theriseunion.io/v1alpha1\n\
         kind: RoleTemplate\n\
         metadata:\n\
         \x20 name: {name}\n\
         spec:\n\
         \x20 rules: []\n"
    )
}

/// Assemble a file: the shared header, then each document behind a `---` line.
///
/// This is the exact shape the splitter writes and the patchers read.
pub fn aggregate_file(docs: &[String]) -> String {
    let mut out = String::from(SAMPLE_HEADER);
    for doc in docs {
        out.push_str("---\n");
        out.push_str(doc);
        if !doc.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
