use crate::models::{MenuItem, Role};

/// Sidebar tree for `role`.
///
/// Only [`Role::SuperAdmin`] gets the elevated tree; every other role,
/// including unrecognised ones, gets the reduced tree.
pub fn menu_for(role: &Role) -> Vec<MenuItem> {
    match role {
        Role::SuperAdmin => elevated_menu(),
        Role::Admin | Role::Other(_) => reduced_menu(),
    }
}

fn elevated_menu() -> Vec<MenuItem> {
    vec![
        dashboard(),
        hero_sections(),
        offers(),
        properties(),
        MenuItem::link("map-pin", "Locations", "/admin/locations").requires(Role::SuperAdmin),
        news(),
        MenuItem::link("utensils", "Restaurants", "/admin/restaurants")
            .requires(Role::SuperAdmin)
            .with_submenu(vec![
                MenuItem::link("utensils", "Restaurants", "/admin/restaurants")
                    .requires(Role::SuperAdmin),
                MenuItem::link("book-open", "Menus", "/admin/restaurants/menus")
                    .requires(Role::SuperAdmin),
            ]),
        MenuItem::link("users", "Users", "/admin/users").requires(Role::SuperAdmin),
    ]
}

fn reduced_menu() -> Vec<MenuItem> {
    vec![dashboard(), hero_sections(), offers(), properties(), news()]
}

fn dashboard() -> MenuItem {
    MenuItem::link("home", "Dashboard", "/admin")
}

fn hero_sections() -> MenuItem {
    MenuItem::link("image", "Hero Sections", "/admin/hero")
}

fn offers() -> MenuItem {
    MenuItem::link("tag", "Offers", "/admin/offers")
}

fn properties() -> MenuItem {
    MenuItem::link("building", "Properties", "/admin/properties").with_submenu(vec![
        MenuItem::link("building", "Properties", "/admin/properties"),
        MenuItem::link("bed", "Rooms", "/admin/rooms"),
    ])
}

fn news() -> MenuItem {
    MenuItem::link("newspaper", "News", "/admin/news")
}

/// Depth-first search for the item at `path`.
pub fn find_item<'a>(menu: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
    for item in menu {
        if item.path == path {
            return Some(item);
        }
        if let Some(found) = find_item(&item.submenu, path) {
            return Some(found);
        }
    }
    None
}

/// The screen at `path`, looked up in the elevated tree which lists every
/// screen of the dashboard.
pub fn screen_for(path: &str) -> Option<MenuItem> {
    find_item(&elevated_menu(), path).cloned()
}
