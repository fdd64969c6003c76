use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role tag carried by a user profile.
///
/// Parsing is an exact, case-sensitive match. Anything unrecognised (including
/// padded variants such as `"ROLE_SUPERADMIN "`) becomes [`Role::Other`] and is
/// treated as least privileged.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Role {
    SuperAdmin,
    Admin,
    Other(String),
}

impl Role {
    pub const SUPERADMIN: &'static str = "ROLE_SUPERADMIN";
    pub const ADMIN: &'static str = "ROLE_ADMIN";

    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::SUPERADMIN => Self::SuperAdmin,
            Self::ADMIN => Self::Admin,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::SuperAdmin => Self::SUPERADMIN,
            Self::Admin => Self::ADMIN,
            Self::Other(raw) => raw,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for Role {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
