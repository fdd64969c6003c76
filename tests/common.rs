use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hotelpress::common::AuthError;
use hotelpress::models::*;
use hotelpress::services::*;
use hotelpress::types::{Credentials, LoginResponse};

pub const SUPERADMIN_TOKEN: &str = "abc";

pub fn get_superadmin_profile() -> UserProfile {
    UserProfile::new("admin", "Group Administrator", &Role::SuperAdmin)
}

pub fn get_admin_profile() -> UserProfile {
    UserProfile::new("editor", "Property Editor", &Role::Admin)
}

pub fn get_inactive_superadmin_profile() -> UserProfile {
    get_superadmin_profile().deactivated()
}

pub fn get_session(user: UserProfile) -> Session {
    Session::new(SUPERADMIN_TOKEN, user)
}

/// Canned behaviour of [`StubClient`].
#[derive(Clone)]
pub enum StubReply {
    Reply(LoginResponse),
    Rejected(String),
    Unreachable,
}

/// Auth endpoint double answering every call the same way.
pub struct StubClient {
    reply: StubReply,
    calls: AtomicUsize,
}

impl StubClient {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn granting(token: &str, user: UserProfile) -> Arc<Self> {
        Self::new(StubReply::Reply(LoginResponse::granted(token, user)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthClient for StubClient {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            StubReply::Reply(reply) => Ok(reply.clone()),
            StubReply::Rejected(message) => Err(AuthError::Rejected(message.clone())),
            StubReply::Unreachable => {
                Err(AuthError::Connection("connection refused".to_string()))
            }
        }
    }
}

/// Auth endpoint double accepting only `admin` / `admin123`.
pub struct AdminOnlyClient;

#[async_trait]
impl AuthClient for AdminOnlyClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        if credentials.username == "admin" && credentials.password == "admin123" {
            Ok(LoginResponse::granted(SUPERADMIN_TOKEN, get_superadmin_profile()))
        } else {
            Ok(LoginResponse::rejected("Bad credentials"))
        }
    }
}

pub fn service_with(client: Arc<dyn AuthClient>) -> AuthService<MemorySessionStore> {
    AuthService::new(client, MemorySessionStore::default())
}

pub fn scope_is_empty(store: &MemorySessionStore, scope: PersistenceScope) -> bool {
    let storage = store.storage(scope);
    !storage.contains(ACCESS_TOKEN_KEY) && !storage.contains(USER_KEY)
}
