//! Argon2id password hashes for the development account directory.

use argon2::Argon2;
use argon2::password_hash::{
    Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use std::sync::OnceLock;

use crate::common::DirectoryError;

/// Verified in place of a real hash when the account does not exist.
static DECOY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// PHC string for `password` with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, DirectoryError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks `password` against an account's stored hash.
///
/// `None` stands for an unknown account. A decoy hash is verified instead so
/// the time spent does not tell whether the account exists. A stored hash
/// that cannot be parsed never matches.
pub fn verify_password(password: &str, stored_hash: Option<&str>) -> bool {
    let Some(stored_hash) = stored_hash else {
        if let Some(decoy) = decoy_hash() {
            let _ = matches_hash(password, decoy);
        }
        return false;
    };

    matches_hash(password, stored_hash).unwrap_or_else(|e| {
        log::error!("Unreadable password hash in directory: {}", e);
        false
    })
}

fn matches_hash(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(stored_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

fn decoy_hash() -> Option<&'static str> {
    DECOY_HASH
        .get_or_init(|| {
            hash_password("decoy password for unknown accounts")
                .map_err(|e| log::error!("Failed to prepare decoy hash: {}", e))
                .ok()
        })
        .as_deref()
}
