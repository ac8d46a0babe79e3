//! Short code generation.
//!
//! Codes are 6 characters drawn uniformly, with replacement, from the
//! 62-character alphabet `a-z`, `A-Z`, `0-9`. Generation keeps no state, so
//! uniqueness is left to the store's unique constraint.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SAMPLES: usize = 10_000;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..SAMPLES {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_uses_alphanumeric_charset() {
        for _ in 0..SAMPLES {
            let code = generate_code();
            assert!(
                code.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_covers_the_whole_alphabet() {
        let seen: HashSet<char> = (0..SAMPLES)
            .flat_map(|_| generate_code().chars().collect::<Vec<_>>())
            .collect();

        // 60,000 draws over 62 symbols: every symbol shows up with overwhelming probability.
        assert_eq!(seen.len(), 62);
        assert!(seen.iter().any(|c| c.is_ascii_lowercase()));
        assert!(seen.iter().any(|c| c.is_ascii_uppercase()));
        assert!(seen.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_is_roughly_uniform() {
        let mut counts = [0usize; 128];
        for _ in 0..SAMPLES {
            for c in generate_code().chars() {
                counts[c as usize] += 1;
            }
        }

        // Expected ~968 per symbol; bounds are far outside any plausible deviation.
        let expected = SAMPLES * CODE_LENGTH / 62;
        for (symbol, &count) in counts.iter().enumerate() {
            if count > 0 {
                assert!(
                    count > expected / 2 && count < expected * 2,
                    "symbol {:?} drawn {count} times",
                    symbol as u8 as char
                );
            }
        }
    }

    #[test]
    fn test_generate_code_produces_mostly_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 62^6 possible codes; a handful of collisions would already be suspicious.
        assert!(codes.len() >= 998);
    }
}
