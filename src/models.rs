//! User and role records exchanged with the user store.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::password;

/// Identity record as read from the store.
///
/// `password_hash` is the stored one-way proof; the plaintext password never
/// appears here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub sign_up_date: Option<DateTime<Utc>>,
    pub last_login_date: Option<DateTime<Utc>>,
    pub id_role: i32,
    pub id_status: i32,
    pub email_verification: bool,
}

/// Role label attached to a user; read-only from this crate's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

/// A user together with its resolved role, as returned by a single
/// pre-joined store read.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithRole {
    pub user: User,
    pub role: Role,
}

/// Write-path shape for registration.
///
/// The store owns the id, the timestamps, and the email-verification default;
/// callers supply everything else, with the password already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub id_role: i32,
    pub id_status: i32,
}

/// Inbound transport shape consumed from collaborators.
///
/// The plaintext password only exists here, wrapped so it stays out of debug
/// output and logs; [`UserDto::into_new_user`] hashes it into the stored proof.
#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sign_up_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_date: Option<DateTime<Utc>>,
    pub id_role: i32,
    pub id_status: i32,
    #[serde(default)]
    pub email_verification: bool,
}

impl UserDto {
    /// Convert into the write-path shape, replacing the plaintext password
    /// with its one-way proof.
    #[must_use]
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: password::hash(self.password.expose_secret()),
            phone: self.phone,
            question: self.question,
            answer: self.answer,
            id_role: self.id_role,
            id_status: self.id_status,
        }
    }
}
