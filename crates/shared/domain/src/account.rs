//! User account domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::password::{Password, PasswordHasher};

/// A user account that logs in with its email address.
///
/// Accounts start active with no staff or superuser privileges; the
/// superuser flags are raised only by the superuser creation path.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    /// Normalized email, unique across all accounts
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl UserAccount {
    /// Create a new account with default permission flags.
    ///
    /// `email` is expected to be normalized already.
    pub fn new(email: String, name: String, password: Password) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash: password.into_string(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.name
    }

    /// No distinct short form is kept; same as `full_name`.
    pub fn short_name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.clone())
    }

    pub fn set_password(&mut self, password: Password) {
        self.password_hash = password.into_string();
    }

    pub fn has_usable_password(&self) -> bool {
        self.password().is_usable()
    }

    pub fn check_password(&self, hasher: &dyn PasswordHasher, plain_text: &str) -> bool {
        self.password().verify(hasher, plain_text)
    }

    /// Grant staff and superuser privileges
    pub fn promote_to_superuser(&mut self) {
        self.is_staff = true;
        self.is_superuser = true;
    }

    /// Check if account has any administrative privilege
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

impl std::fmt::Display for UserAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.email)
    }
}

impl std::fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccount")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password_hash", &"[REDACTED]")
            .field("is_active", &self.is_active)
            .field("is_staff", &self.is_staff)
            .field("is_superuser", &self.is_superuser)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::MockPasswordHasher;

    fn account(name: &str, email: &str) -> UserAccount {
        UserAccount::new(
            email.to_string(),
            name.to_string(),
            Password::from_hash("hashed".to_string()),
        )
    }

    #[test]
    fn test_new_account_defaults() {
        let account = account("Jo", "jo@x.com");

        assert!(account.is_active);
        assert!(!account.is_staff);
        assert!(!account.is_superuser);
        assert!(!account.is_admin());
    }

    #[test]
    fn test_display_is_name_and_email() {
        assert_eq!(account("Jo", "jo@x.com").to_string(), "Jo: jo@x.com");
    }

    #[test]
    fn test_full_and_short_name_are_name() {
        let account = account("Jo Smith", "jo@x.com");

        assert_eq!(account.full_name(), "Jo Smith");
        assert_eq!(account.short_name(), "Jo Smith");
    }

    #[test]
    fn test_promote_to_superuser() {
        let mut account = account("Jo", "jo@x.com");
        account.promote_to_superuser();

        assert!(account.is_staff);
        assert!(account.is_superuser);
        assert!(account.is_admin());
    }

    #[test]
    fn test_check_password_delegates_to_hasher() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .withf(|plain, hash| plain == "secret" && hash == "hashed")
            .return_const(true);

        assert!(account("Jo", "jo@x.com").check_password(&hasher, "secret"));
    }

    #[test]
    fn test_unusable_password_never_checks() {
        let mut account = account("Jo", "jo@x.com");
        account.set_password(Password::unusable());

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().never();

        assert!(!account.has_usable_password());
        assert!(!account.check_password(&hasher, ""));
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let debug = format!("{:?}", account("Jo", "jo@x.com"));
        assert!(!debug.contains("hashed"));
    }
}
