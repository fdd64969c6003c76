use askama::Template;

use hotelpress::models::{MenuItem, UserProfile};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub username: String,
}

#[derive(Template)]
#[template(path = "admin/page.html")]
pub struct AdminPageTemplate {
    pub title: String,
    pub display_name: String,
    pub role_name: String,
    pub sidebar: Vec<SidebarEntry>,
}

impl AdminPageTemplate {
    pub fn new(title: &str, user: &UserProfile, menu: &[MenuItem], current_path: &str) -> Self {
        Self {
            title: title.to_string(),
            display_name: user.display_name().to_string(),
            role_name: user.role_name.clone(),
            sidebar: SidebarEntry::from_menu(menu, current_path),
        }
    }
}

/// Menu item flattened for rendering. `open` marks a group holding the
/// current page so it starts expanded.
pub struct SidebarEntry {
    pub icon: String,
    pub label: String,
    pub path: String,
    pub active: bool,
    pub open: bool,
    pub children: Vec<SidebarEntry>,
}

impl SidebarEntry {
    pub fn from_menu(menu: &[MenuItem], current_path: &str) -> Vec<Self> {
        menu.iter()
            .map(|item| Self {
                icon: item.icon.to_string(),
                label: item.label.to_string(),
                path: item.path.to_string(),
                active: item.path == current_path,
                open: item.has_submenu() && item.contains_path(current_path),
                children: Self::from_menu(&item.submenu, current_path),
            })
            .collect()
    }
}
