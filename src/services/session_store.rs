use crate::models::{ACCESS_TOKEN_KEY, PersistenceScope, Session, USER_KEY, UserProfile};

use super::storage::{MemoryStorage, Storage};

/// Single source of truth for who is logged in.
///
/// None of the operations fail: absence, including a corrupt stored profile,
/// is reported as `None`.
pub trait SessionStore {
    /// Writes `session` into `scope` and removes any session from the other scope.
    fn save(&mut self, session: &Session, scope: PersistenceScope);

    /// Writes a token that came without a profile into `scope`, dropping any
    /// stored profile and any session held by the other scope.
    fn save_token(&mut self, token: &str, scope: PersistenceScope);

    /// The stored session, transient scope first.
    fn read(&self) -> Option<Session>;

    /// Removes the session from both scopes. Safe to call repeatedly.
    fn clear(&mut self);

    /// The stored token, without parsing the profile.
    fn token(&self) -> Option<String>;
}

/// Stored session before its profile is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSession {
    pub scope: PersistenceScope,
    pub token: String,
    pub user: Option<String>,
}

/// [`SessionStore`] over a transient (SESSION) and a durable (DEVICE) storage.
#[derive(Debug, Clone, Default)]
pub struct ScopedSessionStore<T> {
    transient: T,
    durable: T,
}

pub type MemorySessionStore = ScopedSessionStore<MemoryStorage>;

impl<T: Storage> ScopedSessionStore<T> {
    pub fn new(transient: T, durable: T) -> Self {
        Self { transient, durable }
    }

    pub fn storage(&self, scope: PersistenceScope) -> &T {
        match scope {
            PersistenceScope::Session => &self.transient,
            PersistenceScope::Device => &self.durable,
        }
    }

    pub fn storage_mut(&mut self, scope: PersistenceScope) -> &mut T {
        match scope {
            PersistenceScope::Session => &mut self.transient,
            PersistenceScope::Device => &mut self.durable,
        }
    }

    pub fn into_parts(self) -> (T, T) {
        (self.transient, self.durable)
    }

    /// Scope whose token would be used by `read`.
    pub fn active_scope(&self) -> Option<PersistenceScope> {
        [PersistenceScope::Session, PersistenceScope::Device]
            .into_iter()
            .find(|scope| token_in(self.storage(*scope)).is_some())
    }

    pub fn read_raw(&self) -> Option<RawSession> {
        let scope = self.active_scope()?;
        let storage = self.storage(scope);

        Some(RawSession {
            scope,
            token: token_in(storage)?,
            user: storage.get_item(USER_KEY),
        })
    }

    fn clear_scope(&mut self, scope: PersistenceScope) {
        let storage = self.storage_mut(scope);
        storage.remove_item(ACCESS_TOKEN_KEY);
        storage.remove_item(USER_KEY);
    }
}

impl<T: Storage> SessionStore for ScopedSessionStore<T> {
    fn save(&mut self, session: &Session, scope: PersistenceScope) {
        self.clear_scope(scope.other());

        let user = match serde_json::to_string(&session.user) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize user profile: {}", e);
                self.clear_scope(scope);
                return;
            }
        };

        let storage = self.storage_mut(scope);
        storage.set_item(ACCESS_TOKEN_KEY, &session.token);
        storage.set_item(USER_KEY, &user);
    }

    fn save_token(&mut self, token: &str, scope: PersistenceScope) {
        self.clear_scope(scope.other());

        let storage = self.storage_mut(scope);
        storage.remove_item(USER_KEY);
        storage.set_item(ACCESS_TOKEN_KEY, token);
    }

    fn read(&self) -> Option<Session> {
        let raw = self.read_raw()?;
        let user = parse_profile(raw.user.as_deref()?)?;

        Some(Session::new(raw.token, user))
    }

    fn clear(&mut self) {
        self.clear_scope(PersistenceScope::Session);
        self.clear_scope(PersistenceScope::Device);
    }

    fn token(&self) -> Option<String> {
        self.read_raw().map(|raw| raw.token)
    }
}

fn token_in<T: Storage>(storage: &T) -> Option<String> {
    storage
        .get_item(ACCESS_TOKEN_KEY)
        .filter(|token| !token.is_empty())
}

/// Parses a stored profile, treating corrupt data as absent.
pub fn parse_profile(raw: &str) -> Option<UserProfile> {
    match serde_json::from_str::<UserProfile>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring malformed stored user profile: {}", e);
            None
        }
    }
}
