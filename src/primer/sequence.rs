//! DNA sequence utilities: validation, GC content, melting temperature
//! and reverse complement

use bio::alphabets::{dna, Alphabet};
use once_cell::sync::Lazy;

use super::error::SequenceError;

/// Unambiguous DNA alphabet (uppercase only, input is normalized first)
pub static DNA_ALPHABET: Lazy<Alphabet> = Lazy::new(|| Alphabet::new(b"ACGT"));

/// Check if a character is a standard DNA base
pub fn is_standard_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Trim surrounding whitespace, join wrapped lines and uppercase.
pub fn normalize_sequence(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Normalize `raw` and check it is a non-empty word over {A,C,G,T} of at
/// least `min_length` bases.
pub fn validate_sequence(raw: &str, min_length: usize) -> Result<String, SequenceError> {
    let seq = normalize_sequence(raw);

    if seq.is_empty() {
        return Err(SequenceError::EmptyInput);
    }

    if !DNA_ALPHABET.is_word(seq.as_bytes()) {
        // is_word only answers yes/no; locate the culprit for the message
        if let Some((i, c)) = seq.chars().enumerate().find(|&(_, c)| !is_standard_base(c)) {
            return Err(SequenceError::InvalidAlphabet {
                found: c,
                position: i + 1,
            });
        }
    }

    if seq.len() < min_length {
        return Err(SequenceError::TooShort {
            length: seq.len(),
            minimum: min_length,
        });
    }

    Ok(seq)
}

/// Number of G and C bases
#[inline]
pub fn gc_count(seq: &[u8]) -> usize {
    seq.iter().filter(|&&b| b == b'G' || b == b'C').count()
}

/// Number of A and T bases
#[inline]
pub fn at_count(seq: &[u8]) -> usize {
    seq.iter().filter(|&&b| b == b'A' || b == b'T').count()
}

/// GC content as a percentage, 100 × (G+C) / length. Empty input yields 0.
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    (gc_count(seq.as_bytes()) * 100) as f64 / seq.len() as f64
}

/// Wallace-rule melting temperature: 2 °C per A/T plus 4 °C per G/C.
pub fn melting_temperature(seq: &str) -> f64 {
    let bytes = seq.as_bytes();
    (2 * at_count(bytes) + 4 * gc_count(bytes)) as f64
}

/// Compute the reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    String::from_utf8_lossy(&dna::revcomp(seq.as_bytes())).into_owned()
}
