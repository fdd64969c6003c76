use std::sync::Arc;

use crate::common::AuthError;
use crate::models::{PersistenceScope, Session, UserProfile};
use crate::types::{Credentials, LoginResponse};

use super::auth_client::{AuthClient, DEFAULT_REJECTION};
use super::session_store::SessionStore;

/// Message shown when the auth endpoint could not be reached.
pub const CONNECTION_ERROR: &str = "Connection error";

/// Result of a login attempt. Login never fails with an error value; every
/// problem ends up as a `Failure` carrying a message for the form.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success { user: Option<UserProfile> },
    Failure { message: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Success { user } => user.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

/// Where the application must navigate next. Always a full page load.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Navigation {
    Login,
    Home,
}

impl Navigation {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

/// Login, logout and session queries on top of a [`SessionStore`].
pub struct AuthService<S> {
    client: Arc<dyn AuthClient>,
    store: S,
}

impl<S: SessionStore> AuthService<S> {
    pub fn new(client: Arc<dyn AuthClient>, store: S) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Any reply carrying a non-empty token is a success. A token without a
    /// profile is still stored, so the session counts as authenticated but
    /// `current_user` stays `None` and the guard sends it back to login.
    pub async fn login(&mut self, credentials: &Credentials, remember_me: bool) -> LoginOutcome {
        let reply = self.client.authenticate(credentials).await;

        let (token, user) = match grant_from_reply(reply) {
            Ok(grant) => grant,
            Err(message) => {
                log::info!("Login rejected for {:?}: {}", credentials.username, message);
                return LoginOutcome::Failure { message };
            }
        };

        let scope = PersistenceScope::for_remember_me(remember_me);
        match &user {
            Some(user) => {
                self.store.save(&Session::new(token, user.clone()), scope);
                log::info!("User {:?} signed in ({} scope)", user.user_name, scope);
            }
            None => {
                self.store.save_token(&token, scope);
                log::warn!(
                    "Auth endpoint issued a token for {:?} without a user profile",
                    credentials.username
                );
            }
        }

        LoginOutcome::Success { user }
    }

    /// Drops the local session. There is no server-side revocation.
    pub fn logout(&mut self) -> Navigation {
        self.store.clear();
        Navigation::Login
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.store.read().map(|session| session.user)
    }

    pub fn current_session(&self) -> Option<Session> {
        self.store.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }
}

fn grant_from_reply(
    reply: Result<LoginResponse, AuthError>,
) -> Result<(String, Option<UserProfile>), String> {
    match reply {
        Ok(LoginResponse {
            token: Some(token),
            user,
            ..
        }) if !token.is_empty() => Ok((token, user)),
        Ok(LoginResponse {
            message: Some(message),
            ..
        }) if !message.trim().is_empty() => Err(message),
        Ok(_) => Err(DEFAULT_REJECTION.to_string()),
        Err(AuthError::Rejected(message)) => Err(message),
        Err(AuthError::Connection(cause)) => {
            log::warn!("Auth endpoint unreachable: {}", cause);
            Err(CONNECTION_ERROR.to_string())
        }
    }
}
