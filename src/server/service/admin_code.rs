//! Admin code service for managing the bootstrap admin registration code.
//!
//! This module provides the `AdminCodeService` for generating and validating a one-time-use
//! code that lets the first admin register. The code is generated at startup when no admin
//! exists, kept in memory with a 10-minute TTL, and invalidated after use or expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for admin codes.
const ADMIN_CODE_TTL: Duration = Duration::from_secs(10 * 60);

/// Stored admin code with expiration timestamp.
#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the temporary admin code used for initial admin registration.
///
/// Cloning shares the stored code, so the instance in `AppState` and the one used at
/// startup see the same state.
#[derive(Clone)]
pub struct AdminCodeService {
    /// The currently active admin code, if any.
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    /// Creates a new AdminCodeService with no active code and the default 10-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    /// Creates a new AdminCodeService whose codes live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random admin code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character admin code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let admin_code = AdminCode::new(code_string.clone(), self.ttl);
        *self.code.write().await = Some(admin_code);
        code_string
    }

    /// Validates the provided code against the stored admin code.
    ///
    /// A matching, unexpired code is consumed so it cannot be used again. An expired
    /// code is discarded and fails validation.
    ///
    /// # Arguments
    /// - `input_code` - The code string to validate
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it has been consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a random 32-character alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if an unexpired admin code is stored, discarding an expired one.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored_code) if stored_code.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn generates_32_character_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Expected: first validation succeeds and consumes the code, second fails
    #[tokio::test]
    async fn code_is_single_use() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
        assert!(!service.validate_and_consume(&code).await);
    }

    #[tokio::test]
    async fn wrong_code_keeps_stored_code() {
        let service = AdminCodeService::new();
        service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.has_valid_code().await);
    }

    #[tokio::test]
    async fn fails_without_generated_code() {
        let service = AdminCodeService::new();
        assert!(!service.validate_and_consume("any_code").await);
    }

    #[tokio::test]
    async fn code_expires_after_ttl() {
        let service = AdminCodeService::with_ttl(Duration::from_millis(50));
        let code = service.generate().await;
        assert!(service.has_valid_code().await);

        sleep(Duration::from_millis(100)).await;

        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    #[tokio::test]
    async fn clones_share_the_stored_code() {
        let service = AdminCodeService::new();
        let code = service.clone().generate().await;

        assert!(service.validate_and_consume(&code).await);
    }
}
