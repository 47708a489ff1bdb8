//! Authentication core for the Identity service.
//!
//! Verifies user credentials against stored password proofs and mints signed,
//! time-bounded access tokens asserting identity and role. Persistence is an
//! external collaborator reached through the [`UserStore`] trait; one
//! PostgreSQL implementation ships with the crate.

pub mod auth;
pub mod config;
pub mod models;
pub mod password;
pub mod store;
pub mod token;

pub use auth::{AuthError, AuthManager};
pub use config::{ConfigError, TokenConfig, DEFAULT_TOKEN_TTL_SECONDS};
pub use models::{NewUser, Role, User, UserDto, UserWithRole};
pub use store::{PgUserStore, StoreError, UserStore};
pub use token::{
    sign_hs256, verify_hs256, AccessClaims, AccessTokenHeader, IdentityAccess, TokenIssuer,
};
