//! Authentication orchestration: look up the user, verify the credential,
//! issue the token.

use thiserror::Error;
use tracing::debug;

use crate::config::TokenConfig;
use crate::models::NewUser;
use crate::password;
use crate::store::{StoreError, UserStore};
use crate::token::{self, IdentityAccess, TokenIssuer};

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email and wrong password both collapse into this variant; the
    /// caller cannot tell which it was.
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Token(#[from] token::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Public entry point of the authentication core.
///
/// The store handle is passed in explicitly; callers acquire it at request
/// start and drop it on every exit path.
pub struct AuthManager<S> {
    store: S,
    issuer: TokenIssuer,
}

impl<S: UserStore> AuthManager<S> {
    #[must_use]
    pub fn new(store: S, config: TokenConfig) -> Self {
        Self {
            store,
            issuer: TokenIssuer::new(config),
        }
    }

    /// Check credentials and mint an access token.
    ///
    /// # Errors
    ///
    /// Lookup misses and password mismatches return the same
    /// [`AuthError::InvalidCredentials`]. Store failures stay distinct: they
    /// are system faults, not authentication results.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccess, AuthError> {
        let Some(found) = self.store.find_by_email(email).await? else {
            debug!("authentication failed");
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify(&found.user.password_hash, password) {
            debug!("authentication failed");
            return Err(AuthError::InvalidCredentials);
        }

        let access = self.issuer.issue(&found.user, &found.role.name)?;
        debug!(user_id = found.user.id, "authentication succeeded");
        Ok(access)
    }

    /// Register a new user through the store's write path.
    ///
    /// # Errors
    ///
    /// Store failures propagate unmodified, duplicate email included;
    /// registration errors are specific, unlike login.
    pub async fn register(&self, user: &NewUser) -> Result<(), AuthError> {
        self.store.create(user).await?;
        debug!(email = %user.email, "registered user");
        Ok(())
    }
}
