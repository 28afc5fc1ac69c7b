//! Key recovery by per-column shift search and full-text re-ranking
//!
//! The attack never estimates the key length directly. Instead it finds
//! the best-fitting key for every candidate length, decrypts the full
//! ciphertext with each of those keys and keeps the decryption whose
//! letter distribution sits closest to the reference language model.

use crate::cipher::{decrypt, Key};
use crate::error::{Result, VigenereError};
use crate::score::frequency_distance;

/// Default lower bound for candidate key lengths.
pub const DEFAULT_MIN_KEY_LENGTH: usize = 1;

/// Default upper bound (exclusive) for candidate key lengths.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// A candidate key together with the frequency distance of the full
/// decryption it produces. Lower distance means a more plausible key.
#[derive(Debug, Clone)]
pub struct ScoredKey {
    pub key: Key,
    pub distance: f64,
}

/// Finds the best-fitting key for every candidate length in
/// `[min_length, max_length)`.
///
/// The ciphertext is first reduced to its lowercase letters; for each
/// candidate length L that reduced stream is split into L columns of
/// characters that share a single Caesar shift, and each column's shift is
/// recovered by exhaustively scoring all 26 possibilities against the
/// reference model.
///
/// Candidate lengths larger than the reduced stream produce empty columns;
/// those columns fall back to the shift 'a' and the resulting key is
/// expected to rank poorly in [`rank_keys`]. Lengths below 1 are skipped.
///
/// # Arguments
///
/// * `ciphertext` - The encrypted text, formatting included.
/// * `model` - Reference frequencies for a-z (index 0 = 'a').
/// * `min_length` - Smallest candidate key length.
/// * `max_length` - Upper bound (exclusive) on candidate key lengths.
///
/// # Returns
///
/// One key per candidate length, in ascending length order.
pub fn search_keys(
    ciphertext: &str,
    model: &[f64; 26],
    min_length: usize,
    max_length: usize,
) -> Vec<Key> {
    let reduced: Vec<u8> = reduce(ciphertext);
    let mut keys: Vec<Key> = Vec::new();

    // A zero-length key is meaningless, candidate lengths start at 1.
    for length in min_length.max(1)..max_length {
        let mut letters: String = String::with_capacity(length);
        for offset in 0..length {
            letters.push(best_column_shift(&reduced, offset, length, model));
        }
        keys.push(Key::from_canonical(letters));
    }

    keys
}

/// Ranks candidate keys by decrypting the full ciphertext with each one
/// and scoring the decryption against the reference model, best first.
///
/// The sort is stable: candidates with equal distance keep their input
/// order, so with the output of [`search_keys`] the shortest of tied keys
/// wins. A ciphertext without any letters makes every candidate score
/// infinite and the input order is returned unchanged.
///
/// # Errors
///
/// Returns `NoCandidates` when `candidates` is empty.
pub fn rank_keys(
    ciphertext: &str,
    model: &[f64; 26],
    candidates: Vec<Key>,
) -> Result<Vec<ScoredKey>> {
    if candidates.is_empty() {
        return Err(VigenereError::NoCandidates);
    }

    let mut ranked: Vec<ScoredKey> = candidates
        .into_iter()
        .map(|key| {
            let plaintext: String = decrypt(&key, ciphertext);
            let distance: f64 = frequency_distance(&plaintext, model);
            ScoredKey { key, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(ranked)
}

/// Runs the full attack: searches one candidate key per length in
/// `[min_length, max_length)`, ranks them and returns the best.
///
/// # Errors
///
/// Returns `NoCandidates` when the length range is empty.
pub fn recover_key(
    ciphertext: &str,
    model: &[f64; 26],
    min_length: usize,
    max_length: usize,
) -> Result<ScoredKey> {
    let candidates: Vec<Key> = search_keys(ciphertext, model, min_length, max_length);
    let ranked: Vec<ScoredKey> = rank_keys(ciphertext, model, candidates)?;

    ranked.into_iter().next().ok_or(VigenereError::NoCandidates)
}

/// Strips `text` down to its lowercase letters.
fn reduce(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase() as u8)
        .collect()
}

/// Picks the Caesar shift whose decryption of one column (every `step`-th
/// letter of the reduced stream, starting at `offset`) best matches the
/// reference distribution.
///
/// All 26 shifts are tried; ties keep the alphabetically earliest letter.
/// An empty column scores infinite for every shift and falls back to 'a'.
fn best_column_shift(reduced: &[u8], offset: usize, step: usize, model: &[f64; 26]) -> char {
    let column: Vec<u8> = reduced.iter().skip(offset).step_by(step).copied().collect();

    let mut best_letter: char = 'a';
    let mut best_distance: f64 = f64::INFINITY;

    for shift in 0..26u8 {
        let decrypted: String = column
            .iter()
            .map(|&b| ((b - b'a' + 26 - shift) % 26 + b'a') as char)
            .collect();

        let distance: f64 = frequency_distance(&decrypted, model);
        if distance < best_distance {
            best_distance = distance;
            best_letter = (b'a' + shift) as char;
        }
    }

    best_letter
}
