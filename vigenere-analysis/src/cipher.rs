//! Vigenère keystream cipher
//!
//! The key is cycled against the alphabetic characters of the text only:
//! every ASCII letter consumes one key letter, while whitespace,
//! punctuation and non-ASCII letters (like ä, é, ã) are emitted unchanged
//! without advancing the keystream. Letter case is mirrored from the input.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VigenereError};

/// A Vigenère key: one or more ASCII letters, stored lowercase.
///
/// Construction validates the key once, so encryption and decryption can
/// never fail afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(String);

impl Key {
    /// Creates a key from `text`, folding it to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `EmptyKey` for an empty string and `InvalidKeyChar` if any
    /// character is not an ASCII letter.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(VigenereError::EmptyKey);
        }

        let mut letters: String = String::with_capacity(text.len());
        for c in text.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(VigenereError::InvalidKeyChar(c));
            }
            letters.push(c.to_ascii_lowercase());
        }

        Ok(Key(letters))
    }

    /// Builds a key from letters already known to be lowercase a-z.
    pub(crate) fn from_canonical(letters: String) -> Self {
        Key(letters)
    }

    /// The key letters, lowercase.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key length in letters, always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The letter-wise complementary key, mapping each shift value v to
    /// `(26 - v) % 26`. Decrypting with a key produces the same output as
    /// encrypting with its complement.
    pub fn complement(&self) -> Key {
        let letters: String = self
            .0
            .bytes()
            .map(|b| ((26 - (b - b'a')) % 26 + b'a') as char)
            .collect();
        Key(letters)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Key::new(s)
    }
}

/// Encrypts text using the Vigenère cipher.
///
/// # Arguments
///
/// * `key` - The encryption key.
/// * `plaintext` - The input text to encrypt.
///
/// # Returns
///
/// A `String` containing the encrypted text. Non-alphabetic characters
/// keep their original positions unchanged.
pub fn encrypt(key: &Key, plaintext: &str) -> String {
    let key_bytes: &[u8] = key.as_str().as_bytes();
    let mut result: String = String::with_capacity(plaintext.len());
    let mut key_index: usize = 0;

    for c in plaintext.chars() {
        if c.is_ascii_alphabetic() {
            // Determine base character ('A' or 'a') to preserve case
            let base: u8 = if c.is_ascii_lowercase() { b'a' } else { b'A' };

            // Shift value of the current key letter (0-25)
            let shift: u8 = key_bytes[key_index % key_bytes.len()] - b'a';

            // (plaintext + key) mod 26
            let encrypted: u8 = (c as u8 - base + shift) % 26 + base;
            result.push(encrypted as char);

            // Only alphabetic characters consume a keystream position
            key_index += 1;
        } else {
            result.push(c);
        }
    }

    result
}

/// Decrypts text using the Vigenère cipher.
///
/// # Arguments
///
/// * `key` - The decryption key.
/// * `ciphertext` - The input text to decrypt.
///
/// # Returns
///
/// A `String` containing the decrypted text. Non-alphabetic characters
/// keep their original positions unchanged.
pub fn decrypt(key: &Key, ciphertext: &str) -> String {
    let key_bytes: &[u8] = key.as_str().as_bytes();
    let mut result: String = String::with_capacity(ciphertext.len());
    let mut key_index: usize = 0;

    for c in ciphertext.chars() {
        if c.is_ascii_alphabetic() {
            // Determine base character ('A' or 'a') to preserve case
            let base: u8 = if c.is_ascii_lowercase() { b'a' } else { b'A' };

            // Shift value of the current key letter (0-25)
            let shift: u8 = key_bytes[key_index % key_bytes.len()] - b'a';

            // (ciphertext - key + 26) mod 26
            let decrypted: u8 = (c as u8 - base + 26 - shift) % 26 + base;
            result.push(decrypted as char);

            // Only alphabetic characters consume a keystream position
            key_index += 1;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        let key = Key::new("lem").unwrap();
        assert_eq!(encrypt(&key, "att"), "lxf");
        assert_eq!(encrypt(&key, "ATT"), "LXF");
    }

    #[test]
    fn test_known_vector_with_uppercase_key() {
        let key = Key::new("LIMAO").unwrap();
        assert_eq!(encrypt(&key, "ATACARBASESUL"), "LBMCOCJMSSDCX");
        assert_eq!(decrypt(&key, "LBMCOCJMSSDCX"), "ATACARBASESUL");
    }

    #[test]
    fn test_round_trip_preserves_formatting() {
        let key = Key::new("secret").unwrap();
        let plaintext = "Attack at dawn, hold the bridge until 06:00!";
        assert_eq!(decrypt(&key, &encrypt(&key, plaintext)), plaintext);
    }

    #[test]
    fn test_case_pattern_is_preserved() {
        let key = Key::new("abc").unwrap();
        let ciphertext = encrypt(&key, "HeLLo");
        let cases: Vec<bool> = ciphertext.chars().map(|c| c.is_ascii_uppercase()).collect();
        assert_eq!(cases, vec![true, false, true, true, false]);
    }

    #[test]
    fn test_keystream_skips_non_alphabetic() {
        // The space must not consume the key letter 'e'.
        let key = Key::new("lem").unwrap();
        assert_eq!(encrypt(&key, "a tt"), "l xf");
    }

    #[test]
    fn test_non_ascii_letters_pass_through() {
        let key = Key::new("key").unwrap();
        let ciphertext = encrypt(&key, "Vigenère");
        assert_eq!(ciphertext.chars().nth(5), Some('è'));
        assert_eq!(decrypt(&key, &ciphertext), "Vigenère");
    }

    #[test]
    fn test_complementary_key_identity() {
        let key = Key::new("manual").unwrap();
        let ciphertext = encrypt(&key, "The quick brown fox jumps over the lazy dog");
        assert_eq!(decrypt(&key, &ciphertext), encrypt(&key.complement(), &ciphertext));
    }

    #[test]
    fn test_complement_of_zero_shift_is_identity() {
        let key = Key::new("aA").unwrap();
        assert_eq!(key.complement(), key);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert_eq!(Key::new(""), Err(VigenereError::EmptyKey));
    }

    #[test]
    fn test_non_letter_key_is_rejected() {
        assert_eq!(Key::new("ab1"), Err(VigenereError::InvalidKeyChar('1')));
    }

    #[test]
    fn test_key_is_canonically_lowercase() {
        let key: Key = "SeCrEt".parse().unwrap();
        assert_eq!(key.as_str(), "secret");
        assert_eq!(key.len(), 6);
        assert_eq!(key.to_string(), "secret");
    }

    #[test]
    fn test_random_keys_round_trip() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let plaintext = "Beware the Jabberwock, my son! The jaws that bite.";

        for _ in 0..50 {
            let length = rng.gen_range(1..=12);
            let letters: String = (0..length)
                .map(|_| (b'a' + rng.gen_range(0..26)) as char)
                .collect();
            let key = Key::new(&letters).unwrap();

            let ciphertext = encrypt(&key, plaintext);
            assert_eq!(decrypt(&key, &ciphertext), plaintext);
            assert_eq!(encrypt(&key.complement(), &ciphertext), plaintext);
        }
    }
}
