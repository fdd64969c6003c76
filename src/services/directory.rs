use std::collections::HashMap;

use uuid::Uuid;

use crate::common::DirectoryError;
use crate::models::{Role, UserProfile};
use crate::types::{Credentials, LoginResponse};

use super::auth_client::DEFAULT_REJECTION;
use super::password::{hash_password, verify_password};

struct DirectoryEntry {
    profile: UserProfile,
    password_hash: String,
}

/// In-memory account list behind the development auth endpoint.
#[derive(Default)]
pub struct UserDirectory {
    users: HashMap<String, DirectoryEntry>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn add_user(
        &mut self,
        user_name: &str,
        password: &str,
        role: &Role,
        is_active: bool,
    ) -> Result<(), DirectoryError> {
        if self.users.contains_key(user_name) {
            return Err(DirectoryError::AlreadyExists(user_name.to_string()));
        }

        let password_hash = hash_password(password)?;
        let mut profile = UserProfile::new(user_name, user_name, role);
        profile.is_active = is_active;

        self.users.insert(
            user_name.to_string(),
            DirectoryEntry {
                profile,
                password_hash,
            },
        );

        Ok(())
    }

    /// Checks credentials and issues a fresh opaque token on success.
    ///
    /// Unknown users still pay for a hash verification.
    pub fn authenticate(&self, credentials: &Credentials) -> LoginResponse {
        let user_name = credentials.username.trim();

        let entry = self.users.get(user_name);
        let matched = verify_password(
            &credentials.password,
            entry.map(|entry| entry.password_hash.as_str()),
        );

        let Some(entry) = entry.filter(|_| matched) else {
            return LoginResponse::rejected(DEFAULT_REJECTION);
        };

        LoginResponse::granted(Uuid::new_v4().to_string(), entry.profile.clone())
    }
}
