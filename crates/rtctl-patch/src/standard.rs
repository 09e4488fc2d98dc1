//! Standard namespace RoleTemplates
//!
//! Namespace standardization ships six additional templates (services,
//! standard-named workloads, aggregated config-storage) that are appended to
//! the namespace file after patching. The block is embedded verbatim; the
//! append is guarded so re-running is a no-op.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::PatchError;

/// Names of the templates the standard block introduces, in block order.
pub const STANDARD_NAMESPACE_TEMPLATE_NAMES: [&str; 6] = [
    "namespace-view-services",
    "namespace-manage-services",
    "namespace-view-workloads",
    "namespace-manage-workloads",
    "namespace-view-config-storage",
    "namespace-manage-config-storage",
];

/// Marker line whose presence means the block was already appended.
const APPEND_MARKER: &str = "name: namespace-view-services";

/// The six standard namespace RoleTemplates, already carrying their
/// `uiPermissions` blocks.
pub const STANDARD_NAMESPACE_TEMPLATES: &str = r#"---
# Additional standard RoleTemplates
# Services
---
apiVersion: iam.theriseunion.io/v1alpha1
kind: RoleTemplate
metadata:
  labels:
    app.kubernetes.io/managed-by: Helm
    iam.theriseunion.io/category: namespace-service-network
    iam.theriseunion.io/scope: namespace
    theriseunion.io/managed: 'true'
    iam.theriseunion.io/scope-value: default
    iam.theriseunion.io/aggregate-to-namespace-viewer: "true"
  name: namespace-view-services
spec:
  uiPermissions:
    - namespace/service.view
    - namespace/ingress.view
  displayName:
    zh: 查看服务
    en: View Services
  description:
    zh: 允许查看命名空间内的服务和路由
    en: Allows viewing services and ingresses within the namespace
  rules:
  - apiGroups:
    - '*'
    resources:
    - services
    - ingresses
    verbs:
    - get
    - list
    - watch
---
apiVersion: iam.theriseunion.io/v1alpha1
kind: RoleTemplate
metadata:
  annotations:
    iam.theriseunion.io/dependencies: '["namespace-view-services"]'
  labels:
    app.kubernetes.io/managed-by: Helm
    iam.theriseunion.io/category: namespace-service-network
    iam.theriseunion.io/scope: namespace
    theriseunion.io/managed: 'true'
    iam.theriseunion.io/scope-value: default
    iam.theriseunion.io/aggregate-to-namespace-operator: "true"
  name: namespace-manage-services
spec:
  uiPermissions:
    - namespace/service.view
    - namespace/service.manage
    - namespace/ingress.view
    - namespace/ingress.manage
  displayName:
    zh: 管理服务
    en: Manage Services
  description:
    zh: 允许管理命名空间内的服务和路由
    en: Allows managing services and ingresses within the namespace
  rules:
  - apiGroups:
    - '*'
    resources:
    - services
    - ingresses
    verbs:
    - '*'
---
# Workloads under standard naming (app-workloads kept for compatibility)
---
apiVersion: iam.theriseunion.io/v1alpha1
kind: RoleTemplate
metadata:
  annotations:
    iam.theriseunion.io/standard-name-for: namespace-view-app-workloads
    iam.theriseunion.io/dependencies: '["namespace-view-persistentvolumeclaims","namespace-view-secrets","namespace-view-configmaps"]'
  labels:
    app.kubernetes.io/managed-by: Helm
    iam.theriseunion.io/category: namespace-application-workloads
    iam.theriseunion.io/scope: namespace
    theriseunion.io/managed: 'true'
    iam.theriseunion.io/scope-value: default
    iam.theriseunion.io/aggregate-to-namespace-viewer: "true"
  name: namespace-view-workloads
spec:
  uiPermissions:
    - namespace/deployment.view
    - namespace/statefulset.view
    - namespace/daemonset.view
    - namespace/job.view
    - namespace/cronjob.view
    - namespace/pod.view
  displayName:
    zh: 查看工作负载
    en: View Workloads
  description:
    zh: 允许查看命名空间内的所有工作负载资源（标准命名版本）
    en: Allows viewing all workload resources within the namespace (standard naming)
  rules:
  - apiGroups:
    - '*'
    resources:
    - applications
    - controllerrevisions
    - deployments
    - replicasets
    - statefulsets
    - daemonsets
    - jobs
    - cronjobs
    - pods
    - pods/log
    - pods/containers
    - horizontalpodautoscalers
    - configmaps
    - secrets
    verbs:
    - get
    - list
    - watch
---
apiVersion: iam.theriseunion.io/v1alpha1
kind: RoleTemplate
metadata:
  annotations:
    iam.theriseunion.io/standard-name-for: namespace-manage-app-workloads
    iam.theriseunion.io/dependencies: '["namespace-view-workloads"]'
  labels:
    app.kubernetes.io/managed-by: Helm
    iam.theriseunion.io/category: namespace-application-workloads
    iam.theriseunion.io/scope: namespace
    theriseunion.io/managed: 'true'
    iam.theriseunion.io/scope-value: default
    iam.theriseunion.io/aggregate-to-namespace-operator: "true"
  name: namespace-manage-workloads
spec:
  uiPermissions:
    - namespace/deployment.view
    - namespace/deployment.manage
    - namespace/statefulset.view
    - namespace/statefulset.manage
    - namespace/daemonset.view
    - namespace/daemonset.manage
    - namespace/job.view
    - namespace/job.manage
    - namespace/cronjob.view
    - namespace/cronjob.manage
    - namespace/pod.view
    - namespace/pod.manage
    - namespace/pod.logs
    - namespace/pod.terminal
  displayName:
    zh: 管理工作负载
    en: Manage Workloads
  description:
    zh: 允许管理命名空间内的所有工作负载资源（标准命名版本）
    en: Allows managing all workload resources within the namespace (standard naming)
  rules:
  - apiGroups:
    - '*'
    resources:
    - services
    - applications
    - controllerrevisions
    - deployments
    - replicasets
    - statefulsets
    - daemonsets
    - jobs
    - cronjobs
    - pods
    - pods/log
    - pods/exec
    - pods/containers
    - services
    - ingresses
    - router
    - workloads
    - horizontalpodautoscalers
    verbs:
    - '*'
  - apiGroups:
    - '*'
    resources:
    - secrets
    verbs:
    - list
---
# Aggregated config and storage RoleTemplates
---
apiVersion: iam.theriseunion.io/v1alpha1
kind: RoleTemplate
metadata:
  annotations:
    iam.theriseunion.io/aggregates: '["namespace-view-configmaps","namespace-view-secrets","namespace-view-persistentvolumeclaims"]'
  labels:
    app.kubernetes.io/managed-by: Helm
    iam.theriseunion.io/category: namespace-configuration-storage
    iam.theriseunion.io/scope: namespace
    theriseunion.io/managed: 'true'
    iam.theriseunion.io/scope-value: default
    iam.theriseunion.io/aggregate-to-namespace-viewer: "true"
  name: namespace-view-config-storage
spec:
  uiPermissions:
    - namespace/configmap.view
    - namespace/secret.view
    - namespace/persistentvolumeclaim.view
  displayName:
    zh: 查看配置与存储
    en: View Config & Storage
  description:
    zh: 允许查看配置字典、保密字典和持久卷声明（整合权限）
    en: Allows viewing configmaps, secrets and PVCs (aggregated permission)
  rules:
  - apiGroups:
    - '*'
    resources:
    - configmaps
    - secrets
    - persistentvolumeclaims
    verbs:
    - get
    - list
    - watch
  - apiGroups:
    - '*'
    resources:
    - pods
    verbs:
    - list
---
apiVersion: iam.theriseunion.io/v1alpha1
kind: RoleTemplate
metadata:
  annotations:
    iam.theriseunion.io/dependencies: '["namespace-view-config-storage"]'
    iam.theriseunion.io/aggregates: '["namespace-manage-configmaps","namespace-manage-secrets","namespace-manage-persistentvolumeclaims"]'
  labels:
    app.kubernetes.io/managed-by: Helm
    iam.theriseunion.io/category: namespace-configuration-storage
    iam.theriseunion.io/scope: namespace
    theriseunion.io/managed: 'true'
    iam.theriseunion.io/scope-value: default
    iam.theriseunion.io/aggregate-to-namespace-operator: "true"
  name: namespace-manage-config-storage
spec:
  uiPermissions:
    - namespace/configmap.view
    - namespace/configmap.manage
    - namespace/secret.view
    - namespace/secret.manage
    - namespace/persistentvolumeclaim.view
    - namespace/persistentvolumeclaim.manage
  displayName:
    zh: 管理配置与存储
    en: Manage Config & Storage
  description:
    zh: 允许管理配置字典、保密字典和持久卷声明（整合权限）
    en: Allows managing configmaps, secrets and PVCs (aggregated permission)
  rules:
  - apiGroups:
    - '*'
    resources:
    - configmaps
    - secrets
    - persistentvolumeclaims
    verbs:
    - '*'
  - apiGroups:
    - '*'
    resources:
    - pods
    verbs:
    - list
"#;

/// What the append step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendOutcome {
    /// Block appended to the file
    Appended {
        /// Number of templates the block introduces
        templates: usize,
    },
    /// Marker template already present; file untouched
    AlreadyPresent,
}

/// Append the standard namespace templates to a file
///
/// Guarded for idempotence: if the file already names
/// `namespace-view-services`, nothing is written.
///
/// # Errors
/// [`PatchError::Read`] / [`PatchError::Write`] on file I/O failure.
pub fn append_standard_templates(path: impl AsRef<Path>) -> Result<AppendOutcome, PatchError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PatchError::read(path, e))?;

    if content.contains(APPEND_MARKER) {
        warn!(path = %path.display(), "standard templates already present, skipped");
        return Ok(AppendOutcome::AlreadyPresent);
    }

    let mut appended = content;
    appended.push('\n');
    appended.push_str(STANDARD_NAMESPACE_TEMPLATES);
    fs::write(path, appended).map_err(|e| PatchError::write(path, e))?;

    info!(
        path = %path.display(),
        templates = STANDARD_NAMESPACE_TEMPLATE_NAMES.len(),
        "appended standard namespace templates"
    );
    Ok(AppendOutcome::Appended {
        templates: STANDARD_NAMESPACE_TEMPLATE_NAMES.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn block_names_every_standard_template() {
        for name in STANDARD_NAMESPACE_TEMPLATE_NAMES {
            assert!(
                STANDARD_NAMESPACE_TEMPLATES.contains(&format!("name: {name}")),
                "missing {name}"
            );
        }
    }

    #[test]
    fn block_is_valid_multi_document_yaml() {
        let mut count = 0;
        for doc in serde_yaml::Deserializer::from_str(STANDARD_NAMESPACE_TEMPLATES) {
            let value = serde_yaml::Value::deserialize(doc).expect("standard block parses");
            if value.get("kind").is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 6);
    }

    #[test]
    fn templates_already_carry_ui_permissions() {
        // The namespace patcher must never touch these on a later run
        assert_eq!(
            STANDARD_NAMESPACE_TEMPLATES.matches("uiPermissions:").count(),
            6
        );
    }
}
