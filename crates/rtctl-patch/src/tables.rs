//! Static permission tables
//!
//! One table per scope, mapping RoleTemplate name to the ordered list of
//! UI permission identifiers that belong in its `uiPermissions` block.
//! Entry order and list order are significant: blocks are emitted in table
//! order.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rtctl_template::Scope;

/// Ordered name → permission-list mapping for one scope.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    scope: Scope,
    entries: IndexMap<&'static str, &'static [&'static str]>,
}

impl PermissionTable {
    fn new(scope: Scope, entries: &[(&'static str, &'static [&'static str])]) -> Self {
        Self {
            scope,
            entries: entries.iter().copied().collect(),
        }
    }

    /// Scope this table covers
    #[inline]
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Permission list for a template name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static [&'static str]> {
        self.entries.get(name).copied()
    }

    /// Whether a template name has an entry
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Template names in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Built-in table for a scope, if the scope has one
    ///
    /// Nodegroup templates carry no UI permissions and have no table.
    #[must_use]
    pub fn for_scope(scope: Scope) -> Option<&'static PermissionTable> {
        match scope {
            Scope::Cluster => Some(&CLUSTER_UI_PERMISSIONS),
            Scope::Namespace => Some(&NAMESPACE_UI_PERMISSIONS),
            Scope::Platform => Some(&PLATFORM_UI_PERMISSIONS),
            Scope::Workspace => Some(&WORKSPACE_UI_PERMISSIONS),
            Scope::Nodegroup => None,
        }
    }
}

/// Cluster-scope UI permissions
pub static CLUSTER_UI_PERMISSIONS: Lazy<PermissionTable> = Lazy::new(|| {
    PermissionTable::new(
        Scope::Cluster,
        &[
            ("cluster-view-nodes", &["cluster/node.view"]),
            (
                "cluster-manage-nodes",
                &["cluster/node.view", "cluster/node.manage", "cluster/node.terminal"],
            ),
            ("cluster-view-nodegroup", &["cluster/nodegroup.view"]),
            (
                "cluster-manage-nodegroup",
                &["cluster/nodegroup.view", "cluster/nodegroup.manage"],
            ),
            ("cluster-view-projects", &["cluster/namespace.view"]),
            (
                "cluster-manage-projects",
                &["cluster/namespace.view", "cluster/namespace.manage"],
            ),
            ("cluster-view-monitoring", &["cluster/monitoring.view"]),
            (
                "cluster-manage-monitoring",
                &["cluster/monitoring.view", "cluster/monitoring.manage"],
            ),
            ("cluster-view-members", &["cluster/member.view"]),
            (
                "cluster-manage-members",
                &["cluster/member.view", "cluster/member.manage"],
            ),
            ("cluster-view-roles", &["cluster/role.view"]),
            (
                "cluster-manage-roles",
                &["cluster/role.view", "cluster/role.manage"],
            ),
        ],
    )
});

/// Namespace-scope UI permissions
pub static NAMESPACE_UI_PERMISSIONS: Lazy<PermissionTable> = Lazy::new(|| {
    PermissionTable::new(
        Scope::Namespace,
        &[
            // Workloads
            (
                "namespace-view-app-workloads",
                &[
                    "namespace/deployment.view",
                    "namespace/statefulset.view",
                    "namespace/daemonset.view",
                    "namespace/job.view",
                    "namespace/cronjob.view",
                    "namespace/pod.view",
                ],
            ),
            (
                "namespace-manage-app-workloads",
                &[
                    "namespace/deployment.view",
                    "namespace/deployment.manage",
                    "namespace/statefulset.view",
                    "namespace/statefulset.manage",
                    "namespace/daemonset.view",
                    "namespace/daemonset.manage",
                    "namespace/job.view",
                    "namespace/job.manage",
                    "namespace/cronjob.view",
                    "namespace/cronjob.manage",
                    "namespace/pod.view",
                    "namespace/pod.manage",
                    "namespace/pod.logs",
                    "namespace/pod.terminal",
                ],
            ),
            // Configuration
            ("namespace-view-configmaps", &["namespace/configmap.view"]),
            (
                "namespace-manage-configmaps",
                &["namespace/configmap.view", "namespace/configmap.manage"],
            ),
            ("namespace-view-secrets", &["namespace/secret.view"]),
            (
                "namespace-manage-secrets",
                &["namespace/secret.view", "namespace/secret.manage"],
            ),
            (
                "namespace-view-serviceaccount",
                &["namespace/serviceaccount.view"],
            ),
            (
                "namespace-manage-serviceaccount",
                &["namespace/serviceaccount.view", "namespace/serviceaccount.manage"],
            ),
            // Storage
            (
                "namespace-view-persistentvolumeclaims",
                &["namespace/persistentvolumeclaim.view"],
            ),
            (
                "namespace-manage-persistentvolumeclaims",
                &[
                    "namespace/persistentvolumeclaim.view",
                    "namespace/persistentvolumeclaim.manage",
                ],
            ),
            // Access control
            ("namespace-view-members", &["namespace/member.view"]),
            (
                "namespace-manage-members",
                &["namespace/member.view", "namespace/member.manage"],
            ),
            ("namespace-view-roles", &["namespace/role.view"]),
            (
                "namespace-manage-roles",
                &["namespace/role.view", "namespace/role.manage"],
            ),
            // Monitoring
            ("namespace-view-monitoring", &["namespace/monitoring.view"]),
            (
                "namespace-manage-monitoring",
                &["namespace/monitoring.view", "namespace/monitoring.manage"],
            ),
            // App releases
            ("namespace-view-app-releases", &["namespace/app-release.view"]),
            (
                "namespace-create-app-releases",
                &["namespace/app-release.view", "namespace/app-release.create"],
            ),
            (
                "namespace-delete-app-releases",
                &["namespace/app-release.view", "namespace/app-release.delete"],
            ),
            (
                "namespace-manage-app-releases",
                &["namespace/app-release.view", "namespace/app-release.manage"],
            ),
            // Project settings
            (
                "namespace-view-project-settings",
                &["namespace/project-settings.view"],
            ),
            (
                "namespace-manage-project-settings",
                &["namespace/project-settings.view", "namespace/project-settings.manage"],
            ),
            // Workload templates
            (
                "namespace-view-workloadtemplates",
                &["namespace/workload-template.view"],
            ),
            (
                "namespace-manage-workloadtemplates",
                &["namespace/workload-template.view", "namespace/workload-template.manage"],
            ),
            // Notifications
            (
                "namespace-receive-notification",
                &["namespace/notification.receive"],
            ),
            // Alerting agents
            (
                "monitor-alerting-agent-namespace-view-alerts",
                &["namespace/alert.view"],
            ),
            (
                "monitor-alerting-agent-namespace-view-rulegroups",
                &["namespace/alert-rule.view"],
            ),
            (
                "monitor-alerting-agent-namespace-manage-rulegroups",
                &["namespace/alert-rule.view", "namespace/alert-rule.manage"],
            ),
        ],
    )
});

/// Platform-scope UI permissions
pub static PLATFORM_UI_PERMISSIONS: Lazy<PermissionTable> = Lazy::new(|| {
    PermissionTable::new(
        Scope::Platform,
        &[
            ("platform-view-users", &["platform/user.view"]),
            (
                "platform-manage-users",
                &["platform/user.view", "platform/user.manage"],
            ),
            ("platform-view-roles", &["platform/role.view"]),
            (
                "platform-manage-roles",
                &["platform/role.view", "platform/role.manage"],
            ),
            ("platform-view-clusters", &["platform/cluster.view"]),
            (
                "platform-manage-clusters",
                &["platform/cluster.view", "platform/cluster.manage"],
            ),
            ("platform-view-workspaces", &["platform/workspace.view"]),
            (
                "platform-manage-workspaces",
                &["platform/workspace.view", "platform/workspace.manage"],
            ),
            (
                "platform-manage-platform-settings",
                &["platform/settings.view", "platform/settings.manage"],
            ),
        ],
    )
});

/// Workspace-scope UI permissions
pub static WORKSPACE_UI_PERMISSIONS: Lazy<PermissionTable> = Lazy::new(|| {
    PermissionTable::new(
        Scope::Workspace,
        &[
            ("workspace-view-projects", &["workspace/project.view"]),
            (
                "workspace-manage-projects",
                &["workspace/project.view", "workspace/project.manage"],
            ),
            ("workspace-view-members", &["workspace/member.view"]),
            (
                "workspace-manage-members",
                &["workspace/member.view", "workspace/member.manage"],
            ),
            ("workspace-view-roles", &["workspace/role.view"]),
            (
                "workspace-manage-roles",
                &["workspace/role.view", "workspace/role.manage"],
            ),
            ("workspace-view-app-templates", &["workspace/app-template.view"]),
            (
                "workspace-manage-app-templates",
                &[
                    "workspace/app-template.view",
                    "workspace/app-template.create",
                    "workspace/app-template.edit",
                    "workspace/app-template.delete",
                    "workspace/app-template.version.create",
                    "workspace/app-template.submit",
                ],
            ),
        ],
    )
});
