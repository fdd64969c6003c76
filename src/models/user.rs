use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Role;

/// Profile of the signed-in user as issued by the auth endpoint.
///
/// Keys are camelCase on the wire and in storage. Fields this crate does not
/// interpret are kept in `extra` so a stored profile reads back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role_name: String,
    /// Only an explicit `false` deactivates; a missing flag counts as active.
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_active() -> bool {
    true
}

impl UserProfile {
    pub fn new(
        user_name: impl Into<String>,
        name: impl Into<String>,
        role: &Role,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            name: name.into(),
            role_name: role.as_str().to_string(),
            is_active: true,
            extra: Map::new(),
        }
    }

    pub fn role(&self) -> Role {
        Role::parse(&self.role_name)
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.role() == *role
    }

    /// Name shown in the admin chrome, falling back to the login name.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.user_name
        } else {
            &self.name
        }
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}
