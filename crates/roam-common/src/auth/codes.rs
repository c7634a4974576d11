//! One-time verification and reset secrets
//!
//! Two flavors: a 6-digit numeric code delivered over SMS (or email for
//! password resets) and an opaque 32-byte hex token embedded in email
//! verification links.

use rand::Rng;

/// Lifetime of every one-time secret, in minutes
pub const CODE_TTL_MINUTES: i64 = 30;

/// Generate a 6-digit verification code, uniform in [100000, 999999]
#[must_use]
pub fn generate_verification_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Generate an opaque verification token: 32 random bytes, hex encoded
#[must_use]
pub fn generate_verification_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_verification_code();
            assert_eq!(code.len(), 6);
            let n: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }

    #[test]
    fn test_token_is_64_hex_chars() {
        let token = generate_verification_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_verification_token(), generate_verification_token());
    }
}
