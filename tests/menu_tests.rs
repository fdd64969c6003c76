#[cfg(test)]
pub mod menu_tests {
    use hotelpress::models::*;
    use hotelpress::services::*;

    fn labels(menu: &[MenuItem]) -> Vec<&'static str> {
        menu.iter().map(|item| item.label).collect()
    }

    #[test]
    fn test_superadmin_gets_elevated_menu() {
        let menu = menu_for(&Role::SuperAdmin);

        assert_eq!(
            labels(&menu),
            vec![
                "Dashboard",
                "Hero Sections",
                "Offers",
                "Properties",
                "Locations",
                "News",
                "Restaurants",
                "Users",
            ]
        );
    }

    #[test]
    fn test_admin_gets_reduced_menu() {
        let menu = menu_for(&Role::Admin);

        assert_eq!(
            labels(&menu),
            vec!["Dashboard", "Hero Sections", "Offers", "Properties", "News"]
        );
        assert!(find_item(&menu, "/admin/users").is_none());
    }

    #[test]
    fn test_unknown_roles_fail_closed() {
        let reduced = menu_for(&Role::Admin);

        for raw in ["ROLE_GUEST", "", "role_superadmin", "ROLE_SUPERADMIN "] {
            assert_eq!(menu_for(&Role::parse(raw)), reduced, "role {:?}", raw);
        }
    }

    #[test]
    fn test_reduced_menu_never_lists_restricted_items() {
        fn walk(menu: &[MenuItem]) {
            for item in menu {
                assert!(item.required_role.is_none(), "{} is restricted", item.path);
                walk(&item.submenu);
            }
        }

        walk(&menu_for(&Role::Admin));
    }

    #[test]
    fn test_submenus_are_nested() {
        let menu = menu_for(&Role::SuperAdmin);

        let properties = find_item(&menu, "/admin/properties").unwrap();
        assert!(properties.has_submenu());
        assert!(properties.contains_path("/admin/rooms"));

        let rooms = find_item(&menu, "/admin/rooms").unwrap();
        assert_eq!(rooms.label, "Rooms");
        assert!(!rooms.has_submenu());
    }

    #[test]
    fn test_screen_for_reports_required_role() {
        assert_eq!(
            screen_for("/admin/users").and_then(|s| s.required_role),
            Some(Role::SuperAdmin)
        );
        assert_eq!(
            screen_for("/admin/restaurants/menus").and_then(|s| s.required_role),
            Some(Role::SuperAdmin)
        );
        assert_eq!(screen_for("/admin/offers").unwrap().required_role, None);
        assert_eq!(screen_for("/admin").unwrap().label, "Dashboard");
        assert!(screen_for("/admin/nowhere").is_none());
    }

    #[test]
    fn test_menu_is_rebuilt_identically() {
        assert_eq!(menu_for(&Role::SuperAdmin), menu_for(&Role::SuperAdmin));
    }
}
