//! Navigation entries shared by the sidebar and the mobile navbar.

use contracts::enums::role::{Capability, Role};

pub const BRAND: &str = "Techno SaaS";
/// Landing page for signed-in users
pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Capability required to see the link, if any
    pub requires: Option<Capability>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/metrics",
        label: "Métricas",
        icon: "chart-line",
        requires: None,
    },
    NavItem {
        href: "/tenants",
        label: "Empresas / Startups",
        icon: "building",
        requires: None,
    },
    NavItem {
        href: "/users",
        label: "Usuarios",
        icon: "users",
        requires: Some(Capability::ManageUsers),
    },
    NavItem {
        href: "/profile",
        label: "Configurar Perfil",
        icon: "user-cog",
        requires: None,
    },
];

/// Links the given role may see. Gated links stay hidden while the role
/// is unknown.
pub fn visible_items(role: Option<Role>) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| match item.requires {
            None => true,
            Some(capability) => role.is_some_and(|r| r.can(capability)),
        })
        .copied()
        .collect()
}

pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname.trim_end_matches('/') == href
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(role: Option<Role>) -> Vec<&'static str> {
        visible_items(role).into_iter().map(|i| i.href).collect()
    }

    #[test]
    fn test_users_link_is_admin_only() {
        assert!(hrefs(Some(Role::Admin)).contains(&"/users"));
        assert!(!hrefs(Some(Role::Analyst)).contains(&"/users"));
        assert!(!hrefs(Some(Role::Viewer)).contains(&"/users"));
        assert!(!hrefs(None).contains(&"/users"));
    }

    #[test]
    fn test_common_links_for_everyone() {
        assert_eq!(hrefs(None), vec!["/metrics", "/tenants", "/profile"]);
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/metrics", "/metrics"));
        assert!(is_active("/metrics/", "/metrics"));
        assert!(!is_active("/metrics", "/tenants"));
    }
}
