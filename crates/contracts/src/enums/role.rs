use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a panel user. Visibility of pages, forms and row actions
/// is decided by [`Role::can`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Analyst,
    #[default]
    Viewer,
}

/// Things a role may or may not do in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Edit and delete buttons on metric rows
    EditMetrics,
    /// Tenant form and tenant row actions
    ManageTenants,
    /// The users page and its sidebar link
    ManageUsers,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Analyst => "analyst",
            Role::Viewer => "viewer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Analyst => "Analyst",
            Role::Viewer => "Viewer",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Admin, Role::Analyst, Role::Viewer]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "analyst" => Some(Role::Analyst),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        match (self, capability) {
            (Role::Admin, _) => true,
            (Role::Analyst, Capability::EditMetrics) => true,
            (Role::Analyst, Capability::ManageTenants | Capability::ManageUsers) => false,
            (Role::Viewer, _) => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_per_role() {
        assert!(Role::Admin.can(Capability::ManageUsers));
        assert!(Role::Admin.can(Capability::ManageTenants));
        assert!(Role::Analyst.can(Capability::EditMetrics));
        assert!(!Role::Analyst.can(Capability::ManageTenants));
        assert!(!Role::Analyst.can(Capability::ManageUsers));
        assert!(!Role::Viewer.can(Capability::EditMetrics));
    }

    #[test]
    fn test_role_codes_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("owner"), None);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Analyst).unwrap(), "\"analyst\"");
    }
}
