//! Domain-level constants.
//!
//! These constants define business rules and storage bounds.

// =============================================================================
// User Accounts
// =============================================================================

/// Maximum email length (enforced by the storage schema)
pub const MAX_EMAIL_LENGTH: u32 = 255;

/// Maximum display name length (enforced by the storage schema)
pub const MAX_NAME_LENGTH: u32 = 255;

// =============================================================================
// Passwords
// =============================================================================

/// Prefix marking a stored password that can never verify
pub const UNUSABLE_PASSWORD_PREFIX: &str = "!";

// =============================================================================
// Feed
// =============================================================================

/// Maximum status text length (enforced by the storage schema)
pub const MAX_STATUS_TEXT_LENGTH: u32 = 255;
