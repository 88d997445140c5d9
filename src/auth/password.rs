use bcrypt::{hash, verify, DEFAULT_COST};
use once_cell::sync::Lazy;

use super::AuthError;

// Verified against when a login names an unknown username, so that the
// unknown-user and wrong-password paths cost roughly the same.
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| hash("speak-friend-and-enter", DEFAULT_COST).unwrap_or_default());

/// Hash a plaintext password for storage. The plaintext is dropped here and
/// never persisted or logged.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Compare a submitted password against a stored hash. bcrypt is CPU-bound,
/// so the comparison runs on the blocking pool.
pub async fn verify_password(password: String, stored_hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || verify(password, &stored_hash))
        .await
        .map_err(|e| AuthError::Hash(e.to_string()))?
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Burn one bcrypt verification without learning anything. Called when the
/// username lookup misses.
pub async fn verify_dummy(password: String) {
    let _ = tokio::task::spawn_blocking(move || verify(password, DUMMY_HASH.as_str())).await;
}
