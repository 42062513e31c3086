//! Short code generation.
//!
//! Codes are drawn from the OS cryptographically secure random source, since a
//! code is the only thing standing between a stranger and the target URL.

use crate::domain::entities::ShortCode;

/// The 62-symbol alphabet codes are drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Errors that can occur while generating a code.
#[derive(Debug, thiserror::Error)]
pub enum CodeGenError {
    #[error("code length must be greater than zero")]
    InvalidLength,

    #[error("random source unavailable: {0}")]
    Entropy(getrandom::Error),
}

/// Generates a random alphanumeric short code of `length` characters.
///
/// Each random byte is reduced modulo 62. The resulting bias toward the first
/// eight symbols is negligible next to the size of the code space
/// (62^8 ≈ 2.18×10^14 for the default length).
///
/// # Errors
///
/// Returns [`CodeGenError::InvalidLength`] if `length` is zero and
/// [`CodeGenError::Entropy`] if the OS random source fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8)?;
/// assert_eq!(code.as_str().len(), 8);
/// assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> Result<ShortCode, CodeGenError> {
    if length == 0 {
        return Err(CodeGenError::InvalidLength);
    }

    let mut buffer = vec![0u8; length];
    getrandom::fill(&mut buffer).map_err(CodeGenError::Entropy)?;

    let code: String = buffer
        .iter()
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect();

    Ok(ShortCode::new(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [1, 4, DEFAULT_CODE_LENGTH, 32] {
            let code = generate_code(length).unwrap();
            assert_eq!(code.as_str().len(), length);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..100 {
            let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
            assert!(code.as_str().bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generate_code_zero_length() {
        let result = generate_code(0);
        assert!(matches!(result, Err(CodeGenError::InvalidLength)));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(DEFAULT_CODE_LENGTH).unwrap());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }
}
