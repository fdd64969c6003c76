//! Runtime settings read from the environment (and `.env` when present).

use std::time::Duration;

use crate::common::ConfigError;
use crate::models::Role;
use crate::services::UserDirectory;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_AUTH_ENDPOINT: &str = "http://127.0.0.1:8080/api/auth/login";

/// Upper bound for `REMEMBER_ME_DAYS` (ten years).
pub const MAX_REMEMBER_ME_DAYS: i64 = 3650;

#[derive(Debug, Clone, PartialEq)]
pub struct StubUser {
    pub user_name: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub auth_endpoint: String,
    pub auth_timeout: Duration,
    pub remember_me_days: i64,
    pub cookie_secure: bool,
    pub stub_auth: bool,
    pub stub_users: Vec<StubUser>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            auth_timeout: Duration::from_secs(10),
            remember_me_days: 30,
            cookie_secure: true,
            stub_auth: false,
            stub_users: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(endpoint) = get("AUTH_ENDPOINT") {
            config.auth_endpoint = endpoint;
        }
        if let Some(secs) = get("AUTH_TIMEOUT_SECS") {
            let secs = parse_number(&secs, "AUTH_TIMEOUT_SECS")?;
            config.auth_timeout = Duration::from_secs(secs);
        }
        if let Some(days) = get("REMEMBER_ME_DAYS") {
            let days = parse_number(&days, "REMEMBER_ME_DAYS")?;
            config.remember_me_days = i64::try_from(days)
                .ok()
                .filter(|days| *days <= MAX_REMEMBER_ME_DAYS)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "REMEMBER_ME_DAYS",
                    value: days.to_string(),
                })?;
        }
        if let Some(secure) = get("COOKIE_SECURE") {
            config.cookie_secure = parse_flag(&secure, "COOKIE_SECURE")?;
        }
        if let Some(stub) = get("STUB_AUTH") {
            config.stub_auth = parse_flag(&stub, "STUB_AUTH")?;
        }
        if let Some(users) = get("STUB_USERS") {
            config.stub_users = parse_stub_users(&users)?;
        }

        Ok(config)
    }

    /// Directory for the development auth endpoint, hashing every stub password.
    pub fn build_directory(&self) -> Result<UserDirectory, ConfigError> {
        let mut directory = UserDirectory::new();
        for user in &self.stub_users {
            directory.add_user(&user.user_name, &user.password, &user.role, user.is_active)?;
        }
        Ok(directory)
    }
}

fn parse_number(value: &str, key: &'static str) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}

fn parse_flag(value: &str, key: &'static str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

/// Parses `user:password:ROLE[:inactive]` entries separated by `;`.
pub fn parse_stub_users(raw: &str) -> Result<Vec<StubUser>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let parts: Vec<&str> = entry.split(':').collect();
            let (user_name, password, role, is_active) = match parts.as_slice() {
                [user, pass, role] => (*user, *pass, *role, true),
                [user, pass, role, "inactive"] => (*user, *pass, *role, false),
                _ => return Err(ConfigError::InvalidStubUser(entry.to_string())),
            };

            if user_name.is_empty() || password.is_empty() || role.is_empty() {
                return Err(ConfigError::InvalidStubUser(entry.to_string()));
            }

            Ok(StubUser {
                user_name: user_name.to_string(),
                password: password.to_string(),
                role: Role::parse(role),
                is_active,
            })
        })
        .collect()
}
