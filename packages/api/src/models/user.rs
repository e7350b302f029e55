//! # User model for marketplace accounts
//!
//! Defines the two representations of a marketplace user:
//!
//! ## [`User`]
//!
//! The complete database row from the `users` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries and contains every column:
//!
//! - `id` — primary key, assigned by SQLite.
//! - `role` — [`Role::Farmer`] or [`Role::Customer`], fixed at registration.
//! - `name` — display name shown in page headers and next to listed produce.
//! - `username` — unique login name.
//! - `password_hash` — Argon2id PHC string, never leaves the server.
//! - `created_at` — registration timestamp.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! The subset stored in the session after login: id, role and display name. It omits
//! the password hash and is `Serialize + Deserialize` so `tower-sessions` can persist it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Error;

/// Account type chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "farmer" => Ok(Role::Farmer),
            "customer" => Ok(Role::Customer),
            "" => Err(Error::IncompleteInput),
            other => Err(Error::InvalidRole(other.to_string())),
        }
    }
}

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub role: Role,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Convert to the session projection.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            role: self.role,
            name: self.name.clone(),
        }
    }
}

/// Identity carried by an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub role: Role,
    pub name: String,
}

impl UserInfo {
    pub fn is_farmer(&self) -> bool {
        self.role == Role::Farmer
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("farmer".parse::<Role>().unwrap(), Role::Farmer);
        assert_eq!(" Customer ".parse::<Role>().unwrap(), Role::Customer);
        assert!(matches!(
            "admin".parse::<Role>(),
            Err(Error::InvalidRole(r)) if r == "admin"
        ));
        assert!(matches!("".parse::<Role>(), Err(Error::IncompleteInput)));
    }

    #[test]
    fn test_role_round_trips_through_display() {
        for role in [Role::Farmer, Role::Customer] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
