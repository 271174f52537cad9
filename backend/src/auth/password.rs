//! Password hashing using bcrypt
//!
//! Hashing is one-way and salted at work factor 10. Verification is the
//! only supported operation on a digest; it reports mismatch and malformed
//! input the same way, as `false`.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. Handlers use the `_async`
//! variants, which run the work on the blocking thread pool.

use anyhow::Result;

/// bcrypt work factor, matching the cost the credential store was seeded with
const BCRYPT_COST: u32 = 10;

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a digest (blocking operation)
    ///
    /// Returns `false` for a mismatch and for a digest that is not a valid
    /// bcrypt string; verification never fails with an error.
    pub fn verify(password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secret1";
        let hash = PasswordService::hash(password).unwrap();

        assert!(PasswordService::verify(password, &hash));
        assert!(!PasswordService::verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let password = "secret1";
        let hash = PasswordService::hash(password).unwrap();
        assert_ne!(hash, password);
    }

    #[test]
    fn test_uses_cost_ten() {
        let hash = PasswordService::hash("secret1").unwrap();
        // Modular crypt format: $2b$10$...
        assert!(hash.contains("$10$"), "unexpected cost in {hash}");
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "test_password";
        let hash1 = PasswordService::hash(password).unwrap();
        let hash2 = PasswordService::hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(PasswordService::verify(password, &hash1));
        assert!(PasswordService::verify(password, &hash2));
    }

    #[test]
    fn test_malformed_digest_reports_false() {
        assert!(!PasswordService::verify("secret1", "not-a-bcrypt-digest"));
        assert!(!PasswordService::verify("secret1", ""));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = "async_test_password".to_string();
        let hash = PasswordService::hash_async(password.clone()).await.unwrap();

        assert!(PasswordService::verify_async(password.clone(), hash.clone())
            .await
            .unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash)
            .await
            .unwrap());
    }
}
