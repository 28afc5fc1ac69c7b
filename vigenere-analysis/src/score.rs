//! Letter-frequency distance scoring

/// Scores how closely the letter distribution of `text` matches a
/// reference distribution.
///
/// Only ASCII letters are counted; case is folded and everything else
/// (digits, punctuation, whitespace) is dropped. The score is the sum of
/// `|observed - reference|` over the letters that occur at least once in
/// `text`. Letters that never occur contribute nothing, so a text is not
/// penalized for missing rare letters.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `model` - Reference frequencies for a-z (index 0 = 'a').
///
/// # Returns
///
/// The frequency distance; lower means a better match. A text without a
/// single letter scores `f64::INFINITY` so that degenerate candidates rank
/// last instead of failing.
pub fn frequency_distance(text: &str, model: &[f64; 26]) -> f64 {
    let counts: [u32; 26] = count_letters(text);
    let total: u32 = counts.iter().sum();

    if total == 0 {
        return f64::INFINITY;
    }

    let total = f64::from(total);
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(index, &count)| (f64::from(count) / total - model[index]).abs())
        .sum()
}

/// Counts the occurrences of each letter a-z in `text`, case-insensitively.
fn count_letters(text: &str) -> [u32; 26] {
    let mut counts: [u32; 26] = [0; 26];

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let index: usize = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            counts[index] += 1;
        }
    }

    counts
}
