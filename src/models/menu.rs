use serde::Serialize;

use super::Role;

/// One entry of the admin sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub required_role: Option<Role>,
    pub submenu: Vec<MenuItem>,
}

impl MenuItem {
    pub fn link(icon: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            icon,
            label,
            path,
            required_role: None,
            submenu: Vec::new(),
        }
    }

    pub fn requires(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }

    pub fn with_submenu(mut self, submenu: Vec<MenuItem>) -> Self {
        self.submenu = submenu;
        self
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }

    /// True when `path` is this item or one of its children.
    pub fn contains_path(&self, path: &str) -> bool {
        self.path == path || self.submenu.iter().any(|child| child.contains_path(path))
    }
}
