//! Role model
//!
//! Roles are a closed enumeration; every authorization decision matches on
//! [`Role`] exhaustively instead of comparing raw strings.

use serde::{Deserialize, Serialize};

/// Account role tag — immutable once assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// HR/admin: broadest data-access permissions
    Hr,
    /// Manager: leave-approval authority over a team of employees
    Manager,
    /// Employee: self-service access only
    Employee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hr" => Some(Role::Hr),
            "manager" => Some(Role::Manager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    /// Root path of this role's page tree — cross-role navigation redirects here
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Hr => "/hr",
            Role::Manager => "/manager",
            Role::Employee => "/employee",
        }
    }

    /// Which role tree a request path belongs to, if any
    pub fn path_scope(path: &str) -> Option<Self> {
        for role in [Role::Hr, Role::Manager, Role::Employee] {
            let root = role.home_path();
            if path == root || path.strip_prefix(root).is_some_and(|rest| rest.starts_with('/')) {
                return Some(role);
            }
        }
        None
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for role in [Role::Hr, Role::Manager, Role::Employee] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("HR"), None);
    }

    #[test]
    fn test_path_scope() {
        assert_eq!(Role::path_scope("/hr/payroll"), Some(Role::Hr));
        assert_eq!(Role::path_scope("/manager"), Some(Role::Manager));
        assert_eq!(Role::path_scope("/employee/profile"), Some(Role::Employee));
        // Prefix must be a whole path segment
        assert_eq!(Role::path_scope("/employees"), None);
        assert_eq!(Role::path_scope("/leave/abc"), None);
        assert_eq!(Role::path_scope("/auth/login"), None);
    }
}
