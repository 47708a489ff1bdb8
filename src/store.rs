//! User store contract and its PostgreSQL implementation.
//!
//! The authentication core treats persistence as an opaque collaborator: two
//! operations, not-found as a value rather than an error, and role labels
//! pre-joined so no second round trip is needed.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use thiserror::Error;
use tracing::Instrument;

use crate::models::{NewUser, Role, User, UserWithRole};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Read/write contract the authentication core needs from user persistence.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact, case-sensitive lookup by email with the role resolved in the
    /// same read. `Ok(None)` means no such user and is not an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserWithRole>, StoreError>;

    /// Persist a new user. The store owns the id, the timestamps, and the
    /// email-verification default; a duplicate email surfaces as
    /// [`StoreError::DuplicateEmail`].
    async fn create(&self, user: &NewUser) -> Result<(), StoreError>;
}

/// Production store backed by PostgreSQL.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserWithRole>, StoreError> {
        let query = r"
            SELECT users.id, users.first_name, users.last_name, users.email,
                   users.password_hash, users.phone, users.question, users.answer,
                   users.sign_up_date, users.last_login_date, users.id_role,
                   users.id_status, users.email_verification,
                   roles.name AS role_name
            FROM users
            JOIN roles ON roles.id = users.id_role
            WHERE users.email = $1
            LIMIT 1
        ";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await?;

        Ok(row.map(|row| UserWithRole {
            user: User {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                email: row.get("email"),
                password_hash: row.get("password_hash"),
                phone: row.get("phone"),
                question: row.get("question"),
                answer: row.get("answer"),
                sign_up_date: row.get("sign_up_date"),
                last_login_date: row.get("last_login_date"),
                id_role: row.get("id_role"),
                id_status: row.get("id_status"),
                email_verification: row.get("email_verification"),
            },
            role: Role {
                id: row.get("id_role"),
                name: row.get("role_name"),
            },
        }))
    }

    async fn create(&self, user: &NewUser) -> Result<(), StoreError> {
        let query = r"
            INSERT INTO users
                (first_name, last_name, email, password_hash,
                 phone, question, answer, id_role, id_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        let result = sqlx::query(query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.phone)
            .bind(&user.question)
            .bind(&user.answer)
            .bind(user.id_role)
            .bind(user.id_status)
            .execute(&self.pool)
            .instrument(span)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(StoreError::DuplicateEmail),
            Err(err) => Err(err.into()),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
