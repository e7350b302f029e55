//! Argon2id credentials for marketplace accounts.
//!
//! [`register`](super::register) stores the output of [`hash_password`] in
//! `users.password_hash`; [`login`](super::login) checks a submitted password with
//! [`verify_password`]. A stored hash that does not parse is an internal
//! [`Error::PasswordHash`], never a failed login.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{Error, Result};

fn hash_error(err: argon2::password_hash::Error) -> Error {
    Error::PasswordHash(err.to_string())
}

/// PHC string for `password` under a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(hash_error)
}

/// Whether `password` matches the stored PHC string `hash`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let stored = PasswordHash::new(hash).map_err(hash_error)?;
    let matches = Argon2::default()
        .verify_password(password.as_bytes(), &stored)
        .is_ok();
    Ok(matches)
}
