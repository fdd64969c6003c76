mod common;

#[cfg(test)]
pub mod auth_tests {
    use std::sync::Arc;

    use super::common::*;

    use hotelpress::models::*;
    use hotelpress::services::*;
    use hotelpress::types::{Credentials, LoginResponse};

    fn admin_credentials() -> Credentials {
        Credentials::new("admin", "admin123")
    }

    #[actix_web::test]
    async fn test_login_success_authenticates() {
        let client = StubClient::granting("abc", get_superadmin_profile());
        let mut auth = service_with(client.clone());

        let outcome = auth.login(&admin_credentials(), false).await;

        assert_eq!(
            outcome,
            LoginOutcome::Success {
                user: Some(get_superadmin_profile())
            }
        );
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user(), Some(get_superadmin_profile()));
        assert_eq!(client.calls(), 1);
    }

    #[actix_web::test]
    async fn test_login_without_token_fails_and_writes_nothing() {
        let client = StubClient::new(StubReply::Reply(LoginResponse {
            token: None,
            user: Some(get_superadmin_profile()),
            message: None,
        }));
        let mut auth = service_with(client);

        let outcome = auth.login(&admin_credentials(), true).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some(DEFAULT_REJECTION));
        assert!(!auth.is_authenticated());
        assert!(scope_is_empty(auth.store(), PersistenceScope::Session));
        assert!(scope_is_empty(auth.store(), PersistenceScope::Device));
    }

    #[actix_web::test]
    async fn test_login_with_empty_token_fails() {
        let client = StubClient::granting("", get_superadmin_profile());
        let mut auth = service_with(client);

        let outcome = auth.login(&admin_credentials(), false).await;

        assert!(!outcome.is_success());
        assert!(!auth.is_authenticated());
    }

    #[actix_web::test]
    async fn test_login_with_token_but_no_user_succeeds() {
        let client = StubClient::new(StubReply::Reply(LoginResponse {
            token: Some("abc".into()),
            user: None,
            message: None,
        }));
        let mut auth = service_with(client);

        let outcome = auth.login(&admin_credentials(), true).await;

        assert_eq!(outcome, LoginOutcome::Success { user: None });
        assert!(auth.is_authenticated());
        assert_eq!(auth.store().token().as_deref(), Some("abc"));
        assert!(auth.current_user().is_none());

        // Without a profile the guard cannot render anything
        assert_eq!(
            RouteGuard::check(&mut auth, None),
            GuardDecision::Redirect(Navigation::Login)
        );
    }

    #[actix_web::test]
    async fn test_profileless_login_replaces_previous_session() {
        let client = StubClient::new(StubReply::Reply(LoginResponse {
            token: Some("fresh".into()),
            user: None,
            message: None,
        }));
        let mut auth = service_with(client);
        auth.store_mut()
            .save(&get_session(get_admin_profile()), PersistenceScope::Session);

        assert!(auth.login(&admin_credentials(), false).await.is_success());

        let raw = auth.store().read_raw().unwrap();
        assert_eq!(raw.token, "fresh");
        assert_eq!(raw.user, None);
        assert!(scope_is_empty(auth.store(), PersistenceScope::Device));
    }

    #[actix_web::test]
    async fn test_login_surfaces_backend_message_verbatim() {
        let client = StubClient::new(StubReply::Reply(LoginResponse::rejected(
            "Account locked, contact your hotel manager",
        )));
        let mut auth = service_with(client);

        let outcome = auth.login(&admin_credentials(), false).await;

        assert_eq!(
            outcome,
            LoginOutcome::Failure {
                message: "Account locked, contact your hotel manager".into()
            }
        );
    }

    #[actix_web::test]
    async fn test_login_rejection_error_carries_message() {
        let client = StubClient::new(StubReply::Rejected("Invalid password".into()));
        let mut auth = service_with(client);

        let outcome = auth.login(&admin_credentials(), false).await;

        assert_eq!(outcome.message(), Some("Invalid password"));
        assert!(!auth.is_authenticated());
    }

    #[actix_web::test]
    async fn test_login_connection_failure_is_generic() {
        let client = StubClient::new(StubReply::Unreachable);
        let mut auth = service_with(client);

        let outcome = auth.login(&admin_credentials(), false).await;

        assert_eq!(outcome.message(), Some(CONNECTION_ERROR));
        assert!(!auth.is_authenticated());
    }

    #[actix_web::test]
    async fn test_failed_login_keeps_existing_session() {
        let mut auth = service_with(StubClient::new(StubReply::Unreachable));
        auth.store_mut()
            .save(&get_session(get_admin_profile()), PersistenceScope::Session);

        let outcome = auth.login(&admin_credentials(), true).await;

        assert!(!outcome.is_success());
        assert_eq!(auth.current_user(), Some(get_admin_profile()));
    }

    #[actix_web::test]
    async fn test_remember_me_selects_scope() {
        let client = StubClient::granting("abc", get_superadmin_profile());

        let mut auth = service_with(client.clone());
        auth.login(&admin_credentials(), true).await;
        assert!(scope_is_empty(auth.store(), PersistenceScope::Session));
        assert_eq!(auth.store().active_scope(), Some(PersistenceScope::Device));

        let mut auth = service_with(client);
        auth.login(&admin_credentials(), false).await;
        assert!(scope_is_empty(auth.store(), PersistenceScope::Device));
        assert_eq!(auth.store().active_scope(), Some(PersistenceScope::Session));
    }

    #[actix_web::test]
    async fn test_alternating_logins_populate_exactly_one_scope() {
        let client = StubClient::granting("abc", get_superadmin_profile());
        let mut auth = service_with(client);

        for remember_me in [true, false, false, true, true, false, true] {
            assert!(auth.login(&admin_credentials(), remember_me).await.is_success());

            let expected = PersistenceScope::for_remember_me(remember_me);
            assert_eq!(auth.store().active_scope(), Some(expected));
            assert!(scope_is_empty(auth.store(), expected.other()));
        }
    }

    #[actix_web::test]
    async fn test_relogin_overwrites_session() {
        let mut auth = service_with(StubClient::granting("first", get_admin_profile()));
        auth.login(&admin_credentials(), false).await;

        let mut auth = AuthService::new(
            StubClient::granting("second", get_superadmin_profile()),
            auth.into_store(),
        );
        auth.login(&admin_credentials(), false).await;

        let session = auth.current_session().unwrap();
        assert_eq!(session.token, "second");
        assert_eq!(session.user, get_superadmin_profile());
    }

    #[actix_web::test]
    async fn test_logout_twice_is_harmless() {
        let mut auth = service_with(StubClient::granting("abc", get_superadmin_profile()));
        auth.login(&admin_credentials(), true).await;

        assert_eq!(auth.logout(), Navigation::Login);
        assert!(!auth.is_authenticated());

        assert_eq!(auth.logout(), Navigation::Login);
        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_current_user_with_invalid_json_is_none() {
        let mut auth = service_with(StubClient::new(StubReply::Unreachable));
        let storage = auth.store_mut().storage_mut(PersistenceScope::Session);
        storage.set_item(ACCESS_TOKEN_KEY, "abc");
        storage.set_item(USER_KEY, "undefined");

        assert!(auth.current_user().is_none());
        // The token alone still counts as authenticated
        assert!(auth.is_authenticated());
    }

    #[actix_web::test]
    async fn test_admin_scenario_end_to_end() {
        let mut auth = service_with(Arc::new(AdminOnlyClient));

        let outcome = auth.login(&admin_credentials(), false).await;
        let user = outcome.user().cloned().unwrap();

        assert_eq!(user.role(), Role::SuperAdmin);
        assert_eq!(menu_for(&user.role()), menu_for(&Role::SuperAdmin));
        assert!(menu_for(&user.role()).iter().any(|item| item.path == "/admin/users"));
        assert!(RouteGuard::check(&mut auth, None).is_render());
    }

    #[actix_web::test]
    async fn test_admin_scenario_wrong_password() {
        let mut auth = service_with(Arc::new(AdminOnlyClient));

        let outcome = auth
            .login(&Credentials::new("admin", "wrong"), false)
            .await;

        assert_eq!(outcome.message(), Some("Bad credentials"));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let shown = format!("{:?}", admin_credentials());

        assert!(shown.contains("admin"));
        assert!(!shown.contains("admin123"));
    }
}
