use crate::preset::alphabet_table::{ALPHABET_SIZE, INDEX_TO_LETTER_MAP, LETTER_TO_INDEX_MAP};
use crate::ring::Vector;

/// Encodes text into a vector of integers under the A0Z25 code.
///
/// Each character is ASCII-lowercased and kept only if it is a Latin letter;
/// digits, punctuation, whitespace and anything non-ASCII are discarded
/// without error. Order is preserved.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::text_to_numeric;
/// assert_eq!(text_to_numeric("abz"), vec![0, 1, 25]);
/// assert_eq!(text_to_numeric("He11o!"), vec![7, 4, 14]);
/// assert!(text_to_numeric("42, ...").is_empty());
/// ```
pub fn text_to_numeric(text: &str) -> Vector {
    text.chars()
        .filter_map(|c| LETTER_TO_INDEX_MAP.get(&c.to_ascii_lowercase()).copied())
        .collect()
}

/// Decodes a slice of integers back into letters under the A0Z25 code.
///
/// Never fails: each value is reduced mod 26 first, and negative values
/// (possible before the cipher normalizes its arithmetic) are mapped to
/// their non-negative residue rather than used as a raw index.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::numeric_to_text;
/// assert_eq!(numeric_to_text(&[3, 4]), "de");
/// assert_eq!(numeric_to_text(&[26, -1]), "az");
/// ```
pub fn numeric_to_text(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|&n| INDEX_TO_LETTER_MAP[&n.rem_euclid(ALPHABET_SIZE as i64)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_symbols_and_lowercases() {
        // mixed case, digits and punctuation collapse to the bare letters
        assert_eq!(
            text_to_numeric("He11o, World!"),
            vec![7, 4, 11, 14, 22, 14, 17, 11, 3]
        );
        assert_eq!(text_to_numeric("HELOWORLD"), text_to_numeric("heloworld"));
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(text_to_numeric("naïve"), vec![13, 0, 21, 4]);
        assert!(text_to_numeric("Вітання").is_empty());
    }

    #[test]
    fn empty_text_yields_empty_sequence() {
        assert!(text_to_numeric("").is_empty());
        assert!(text_to_numeric(" \t\n123!?").is_empty());
    }

    #[test]
    fn numeric_to_text_normalizes_out_of_range_values() {
        assert_eq!(numeric_to_text(&[0, 25, 26, 51]), "azaz");
        assert_eq!(numeric_to_text(&[-1, -26, -27]), "zaz");
    }

    #[test]
    fn roundtrip_on_filtered_text() {
        let filtered = "tobeornottobe";
        assert_eq!(numeric_to_text(&text_to_numeric(filtered)), filtered);
    }
}
