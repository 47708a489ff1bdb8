//! Password proof hashing and verification.
//!
//! The stored proof is a deterministic one-way transform of the password;
//! login recomputes the transform over the candidate and compares.

use base64ct::{Base64, Encoding};
use sha2::{Digest, Sha256};

/// Hash a plaintext password into its stored proof.
#[must_use]
pub fn hash(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    Base64::encode_string(digest.as_slice())
}

/// Check a candidate password against a stored proof.
///
/// Any mismatch returns `false`, including an empty or malformed proof; a
/// failed check is a login failure, never an error.
#[must_use]
pub fn verify(stored_proof: &str, candidate: &str) -> bool {
    if stored_proof.is_empty() {
        return false;
    }
    stored_proof == hash(candidate)
}
