//! Canonicalization of raw user input
//!
//! Emails, secrets, and display names are normalized once on the way in and
//! every comparison happens on the normalized forms. Raw forms are retained
//! only where the persisted layout requires them (legacy credential records).
//!
//! All functions here are pure and total: any string in, a string out, no
//! failure modes.

/// Canonicalize an email address for storage and comparison.
///
/// Removes all whitespace characters, including internal ones, then
/// lowercases. Idempotent: applying it twice yields the same result.
pub fn normalize_email(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Canonicalize a secret for comparison.
///
/// Trims leading and trailing whitespace only. Internal whitespace is part
/// of the secret and is preserved verbatim.
pub fn normalize_secret(raw: &str) -> String {
    raw.trim().to_string()
}

/// Canonicalize a display name: trim leading/trailing whitespace.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_lowercased() {
        assert_eq!(normalize_email("Alice@Example.COM"), "alice@example.com");
    }

    #[test]
    fn test_email_strips_all_whitespace() {
        assert_eq!(normalize_email(" a lice@ex ample.com\t"), "alice@example.com");
        assert_eq!(normalize_email("bob@x.com\n"), "bob@x.com");
    }

    #[test]
    fn test_email_idempotent() {
        let once = normalize_email(" Mixed Case@Example.Com ");
        assert_eq!(normalize_email(&once), once);
    }

    #[test]
    fn test_email_empty_input() {
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn test_secret_trims_outer_whitespace_only() {
        assert_eq!(normalize_secret("  pass word  "), "pass word");
    }

    #[test]
    fn test_secret_preserves_internal_whitespace() {
        assert_ne!(normalize_secret("pass word"), normalize_secret("password"));
    }

    #[test]
    fn test_name_trimmed() {
        assert_eq!(normalize_name("  Alice Smith "), "Alice Smith");
    }
}
