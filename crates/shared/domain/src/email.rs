//! Email address normalization.

/// Normalize an email address by lower-casing its domain part.
///
/// The address is split at the last `@`; the local part is kept verbatim
/// since mailbox names may be case-sensitive. Input without an `@` is
/// returned unchanged, untrimmed, matching Django's `normalize_email`.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Check whether an email value counts as missing.
pub fn is_blank(email: &str) -> bool {
    email.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_domain_only() {
        assert_eq!(normalize_email("a@EXAMPLE.com"), "a@example.com");
        assert_eq!(normalize_email("Jo.Smith@X.COM"), "Jo.Smith@x.com");
    }

    #[test]
    fn test_splits_on_last_at_sign() {
        assert_eq!(normalize_email("\"a@b\"@Example.ORG"), "\"a@b\"@example.org");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_email("  jo@X.com \n"), "jo@x.com");
    }

    #[test]
    fn test_without_at_sign_is_unchanged() {
        assert_eq!(normalize_email("Not-An-Email"), "Not-An-Email");
        assert_eq!(normalize_email(" Not-An-Email "), " Not-An-Email ");
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("a@b.c"));
    }
}
