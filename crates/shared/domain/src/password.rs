//! Password value object and hashing capability.
//!
//! Hashing is a capability (`PasswordHasher`) so the account factory can be
//! composed with any algorithm; `Argon2Hasher` is the production one.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
    Argon2,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::constants::UNUSABLE_PASSWORD_PREFIX;
use crate::error::{DomainError, DomainResult};

/// Password hashing capability.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password into an encoded, salted string.
    fn hash(&self, plain_text: &str) -> DomainResult<String>;

    /// Verify a plain text password against an encoded hash.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}

/// Argon2id hasher with default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Password value object holding a stored hash.
///
/// Either a real hash produced by a `PasswordHasher`, or an unusable marker
/// (prefixed with `!`) for accounts created without a password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .field("usable", &self.is_usable())
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with the given hasher.
    pub fn hash_with(hasher: &dyn PasswordHasher, plain_text: &str) -> DomainResult<Self> {
        let hash = hasher.hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Build an unusable password marker with a random suffix.
    pub fn unusable() -> Self {
        let salt = SaltString::generate(&mut OsRng);
        Self {
            hash: format!("{}{}", UNUSABLE_PASSWORD_PREFIX, salt.as_str()),
        }
    }

    /// Hash `plain_text` if present, otherwise produce an unusable marker.
    pub fn from_optional(
        hasher: &dyn PasswordHasher,
        plain_text: Option<&str>,
    ) -> DomainResult<Self> {
        match plain_text {
            Some(plain_text) => Self::hash_with(hasher, plain_text),
            None => Ok(Self::unusable()),
        }
    }

    /// Create a Password from an existing hash (from storage).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Whether this password can ever verify.
    pub fn is_usable(&self) -> bool {
        !self.hash.starts_with(UNUSABLE_PASSWORD_PREFIX)
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, hasher: &dyn PasswordHasher, plain_text: &str) -> bool {
        self.is_usable() && hasher.verify(plain_text, &self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let plain = "SecurePassword123!";
        let password = Password::hash_with(&hasher, plain).unwrap();

        assert!(password.is_usable());
        assert_ne!(password.as_str(), plain);
        assert!(password.verify(&hasher, plain));
        assert!(!password.verify(&hasher, "WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let hasher = Argon2Hasher::new();
        let password = Password::hash_with(&hasher, "TestPassword123").unwrap();

        let restored = Password::from_hash(password.into_string());
        assert!(restored.verify(&hasher, "TestPassword123"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = Argon2Hasher::new();
        let pass1 = Password::hash_with(&hasher, "SamePassword123").unwrap();
        let pass2 = Password::hash_with(&hasher, "SamePassword123").unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
    }

    #[test]
    fn test_empty_password_is_still_hashed() {
        let hasher = Argon2Hasher::new();
        let password = Password::from_optional(&hasher, Some("")).unwrap();

        assert!(password.is_usable());
        assert!(password.verify(&hasher, ""));
    }

    #[test]
    fn test_missing_password_is_unusable() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();
        hasher.expect_verify().never();

        let password = Password::from_optional(&hasher, None).unwrap();

        assert!(!password.is_usable());
        assert!(password.as_str().starts_with(UNUSABLE_PASSWORD_PREFIX));
        assert!(!password.verify(&hasher, ""));
    }

    #[test]
    fn test_unusable_passwords_are_random() {
        assert_ne!(Password::unusable(), Password::unusable());
    }

    #[test]
    fn test_garbage_hash_does_not_verify() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_hasher_errors_propagate() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(DomainError::password("boom")));

        let result = Password::hash_with(&hasher, "secret");
        assert_eq!(result, Err(DomainError::password("boom")));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::from_hash("$argon2id$secret".to_string());
        let debug = format!("{:?}", password);

        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
