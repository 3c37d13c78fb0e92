//! Token Generator
//!
//! Random identifiers shared by bearer tokens and post IDs.

use rand::{distr::Alphanumeric, Rng};

/// Length of every generated token.
pub const TOKEN_LENGTH: usize = 32;

/// Returns a fresh token of [`TOKEN_LENGTH`] characters drawn uniformly from
/// `[A-Za-z0-9]`.
///
/// Uniqueness is not checked. A collision simply overwrites whatever the
/// previous holder of the same token keyed.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Whether `candidate` has the shape of a generated token.
pub fn is_well_formed(candidate: &str) -> bool {
    candidate.len() == TOKEN_LENGTH && candidate.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(is_well_formed(&token));
    }

    #[test]
    fn test_tokens_differ() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_alphabet_coverage() {
        // 2000 tokens * 32 chars makes missing any class vanishingly unlikely.
        let joined: String = (0..2000).map(|_| generate_token()).collect();
        assert!(joined.bytes().any(|b| b.is_ascii_uppercase()));
        assert!(joined.bytes().any(|b| b.is_ascii_lowercase()));
        assert!(joined.bytes().any(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_is_well_formed_rejects() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed(&"a".repeat(TOKEN_LENGTH - 1)));
        assert!(!is_well_formed(&"a".repeat(TOKEN_LENGTH + 1)));
        assert!(!is_well_formed(&format!("{}-", "a".repeat(TOKEN_LENGTH - 1))));
    }

    proptest! {
        #[test]
        fn prop_every_token_is_well_formed(_seed in any::<u8>()) {
            prop_assert!(is_well_formed(&generate_token()));
        }
    }
}
