use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credentials rejected: {0}")]
    Rejected(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Connection(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid stub user entry {0:?} (expected user:password:ROLE[:inactive])")]
    InvalidStubUser(String),

    #[error("Failed to prepare stub users: {0}")]
    Directory(#[from] DirectoryError),
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("User {0:?} already exists")]
    AlreadyExists(String),
}

impl From<argon2::password_hash::Error> for DirectoryError {
    fn from(err: argon2::password_hash::Error) -> Self {
        DirectoryError::Hashing(err.to_string())
    }
}
