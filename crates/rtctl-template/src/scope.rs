//! Scope classification for RoleTemplates

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Organizational level a RoleTemplate applies to.
///
/// The splitter groups by whatever label value it finds in the input; this
/// enum covers the known levels the tooling addresses by name (table lookup,
/// default file paths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Platform-wide templates (label value `platform`, formerly `global`)
    Platform,
    /// Per-cluster templates
    Cluster,
    /// Per-workspace templates
    Workspace,
    /// Per-namespace templates
    Namespace,
    /// Per-nodegroup templates
    Nodegroup,
}

impl Scope {
    /// All known scopes
    pub const ALL: [Scope; 5] = [
        Scope::Platform,
        Scope::Cluster,
        Scope::Workspace,
        Scope::Namespace,
        Scope::Nodegroup,
    ];

    /// Label value for this scope
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::Platform => "platform",
            Scope::Cluster => "cluster",
            Scope::Workspace => "workspace",
            Scope::Namespace => "namespace",
            Scope::Nodegroup => "nodegroup",
        }
    }

    /// Conventional per-scope file name, `<scope>-roletemplates.yaml`
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}-roletemplates.yaml", self.as_str())
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized scope names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope: '{0}'")]
pub struct UnknownScope(pub String);

impl FromStr for Scope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "platform" => Ok(Scope::Platform),
            "cluster" => Ok(Scope::Cluster),
            "workspace" => Ok(Scope::Workspace),
            "namespace" => Ok(Scope::Namespace),
            "nodegroup" => Ok(Scope::Nodegroup),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_str() {
        for scope in Scope::ALL {
            assert_eq!(scope.as_str().parse::<Scope>(), Ok(scope));
        }
    }

    #[test]
    fn unknown_scope_is_an_error() {
        let err = "global".parse::<Scope>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scope: 'global'");
    }

    #[test]
    fn file_name_convention() {
        assert_eq!(Scope::Cluster.file_name(), "cluster-roletemplates.yaml");
    }
}
