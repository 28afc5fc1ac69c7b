//! # Vigenère Analysis Library
//!
//! This library implements the classical Vigenère polyalphabetic cipher
//! together with a statistical attack that recovers the keyword from
//! ciphertext alone.
//!
//! ## Attack outline
//!
//! 1. For every candidate key length, the ciphertext (reduced to its
//!    lowercase letters) is split into columns of characters that were
//!    shifted by the same key letter. Each column's shift is recovered by
//!    exhaustively scoring all 26 Caesar decryptions against a reference
//!    letter-frequency table.
//! 2. The per-length candidate keys are then re-ranked by decrypting the
//!    full ciphertext with each of them and scoring the whole decryption.
//!    The lowest-distance candidate is the recommended key.
//!
//! The key length is never estimated directly (no Kasiski examination);
//! wrong lengths simply produce implausible decryptions that rank last.
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{encrypt, decrypt, Key};
//!
//! let key = Key::new("lem")?;
//! let ciphertext = encrypt(&key, "att");
//! assert_eq!(ciphertext, "lxf");
//! assert_eq!(decrypt(&key, &ciphertext), "att");
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```
//!
//! ## Features
//!
//! - Case-preserving cipher that leaves formatting untouched
//! - Reference frequency tables for English, Portuguese and German
//! - Deterministic, exhaustive per-column shift search
//! - Stable ranking of candidate keys for diagnostic display

// Public modules
pub mod attack;
pub mod cipher;
pub mod error;
pub mod freq;
pub mod score;

// Re-exports for easy access
pub use attack::{
    rank_keys, recover_key, search_keys, ScoredKey, DEFAULT_MAX_KEY_LENGTH,
    DEFAULT_MIN_KEY_LENGTH,
};
pub use cipher::{decrypt, encrypt, Key};
pub use error::{Result, VigenereError};
pub use freq::{Language, ENGLISH_FREQUENCIES, GERMAN_FREQUENCIES, PORTUGUESE_FREQUENCIES};
pub use score::frequency_distance;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_and_attack_work_together() {
        let key = Key::new("lem").unwrap();
        let ciphertext = encrypt(&key, "attack at dawn");
        let model = Language::English.frequencies();

        let candidates = search_keys(
            &ciphertext,
            model,
            DEFAULT_MIN_KEY_LENGTH,
            DEFAULT_MAX_KEY_LENGTH,
        );
        assert_eq!(candidates.len(), 19);

        // Ranking returns every candidate, best first.
        let ranked = rank_keys(&ciphertext, model, candidates).unwrap();
        assert_eq!(ranked.len(), 19);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance));
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
