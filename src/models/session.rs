use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Storage key holding the JSON-serialized [`UserProfile`].
pub const USER_KEY: &str = "user";

/// The authenticated identity of one browser context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Lifetime of the storage a session is written to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PersistenceScope {
    /// Lives as long as the tab or browser session.
    Session,
    /// Survives restarts until explicitly cleared.
    Device,
}

impl PersistenceScope {
    /// Scope picked by the "remember me" checkbox.
    pub fn for_remember_me(remember_me: bool) -> Self {
        if remember_me {
            Self::Device
        } else {
            Self::Session
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Session => Self::Device,
            Self::Device => Self::Session,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Device => "device",
        }
    }
}

impl std::fmt::Display for PersistenceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
