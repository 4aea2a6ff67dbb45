//! Links to the surrounding admin application.

use serde::Deserialize;

/// Sidebar entries, in display order, with their paths on the admin site.
const SIDEBAR: [(&str, &str); 7] = [
    ("Home", "/admin-dashboard"),
    ("Add Workshop", "/add-workshop"),
    ("View Workshops", "/view-workshops"),
    ("Manage Users", "/manage-users"),
    ("Faculty Management", "/faculty-management"),
    ("Admin Attendance", "/admin-attendance"),
    ("Profile", "/settings"),
];

/// Where the sibling admin pages live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Origin of the admin site, e.g. `http://localhost:3000`. Empty means
    /// same-origin relative links.
    pub base_url: String,
    /// Path the operator is sent to after logout.
    pub login_path: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: "/login".to_string(),
        }
    }
}

/// A static sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl Links {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Absolute (or relative, without a base) login URL.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.url(&self.login_path)
    }

    /// Sidebar navigation entries. No state is carried between pages.
    #[must_use]
    pub fn sidebar(&self) -> Vec<NavLink> {
        SIDEBAR
            .iter()
            .map(|&(label, path)| NavLink {
                label,
                href: self.url(path),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_relative_links_when_base_url_empty() {
        let links = Links::default();
        assert_eq!(links.login_url(), "/login");
        assert_eq!(links.sidebar()[0].href, "/admin-dashboard");
    }

    #[test]
    fn should_prefix_links_with_base_url() {
        let links = Links {
            base_url: "http://localhost:3000/".to_string(),
            login_path: "/login".to_string(),
        };
        assert_eq!(links.login_url(), "http://localhost:3000/login");
        let sidebar = links.sidebar();
        assert_eq!(sidebar.len(), 7);
        assert_eq!(sidebar[6].label, "Profile");
        assert_eq!(sidebar[6].href, "http://localhost:3000/settings");
    }
}
