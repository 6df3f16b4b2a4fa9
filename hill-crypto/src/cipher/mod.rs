//! The Hill cipher block pipeline: key validation, padding, and the
//! per-block matrix transforms.

use crate::codec::{numeric_to_text, text_to_numeric};
use crate::errors::HillCipherError;
use crate::preset::alphabet_table::ALPHABET_SIZE;
use crate::ring::matrix_ops::{determinant, matrix_inverse, matrix_vector_mul, vector_matrix_mul};
use crate::ring::{Matrix, Ring, Vector, gcd};

/// Encodes plaintext with the given key matrix.
///
/// The process involves:
/// 1. Validating the key: it must be square and its determinant coprime to 26.
/// 2. Encoding the surviving letters to integers under the A0Z25 code.
/// 3. Padding the sequence to a multiple of the key dimension by repeating
///    its last element.
/// 4. Multiplying the key matrix by each block (matrix-left form) and
///    collecting the mod-26 results.
/// 5. Decoding the results back to letters.
///
/// # Errors
///
/// Returns `HillCipherError::NotSquare` or `HillCipherError::BadKey` for an
/// invalid key, and `HillCipherError::EmptyInput` when no letters survive
/// filtering.
///
/// # Example
///
/// ```
/// # use hill_crypto::cipher::encode;
/// let key = vec![vec![1, 3], vec![3, 4]];
/// assert_eq!(encode("ab", &key).unwrap(), "de");
/// ```
pub fn encode(plaintext: &str, key: &Matrix) -> Result<String, HillCipherError> {
    let ring = Ring::try_with(ALPHABET_SIZE)?;
    validate_key(key, &ring)?;

    let numbers = pad_to_blocks(text_to_numeric(plaintext), key.len())?;

    let mut out = Vec::with_capacity(numbers.len());
    for block in numbers.chunks_exact(key.len()) {
        out.extend(matrix_vector_mul(key, block, &ring)?);
    }

    Ok(numeric_to_text(&out))
}

/// Decodes ciphertext produced with the given key matrix.
///
/// Validation and padding mirror [`encode`]; each block is then multiplied
/// by the precomputed inverse key in vector-left form. Decoding recovers the
/// padded-and-filtered representation of the original text: stripped
/// characters, original case and padding are irrecoverably gone.
///
/// # Errors
///
/// Same conditions as [`encode`], plus `HillCipherError::NoInverse` if the
/// inverse key cannot be constructed.
///
/// # Example
///
/// ```
/// # use hill_crypto::cipher::{decode, encode};
/// let key = vec![vec![1, 3], vec![3, 4]];
/// let ciphertext = encode("attack", &key).unwrap();
/// assert_eq!(decode(&ciphertext, &key).unwrap(), "attack");
/// ```
pub fn decode(ciphertext: &str, key: &Matrix) -> Result<String, HillCipherError> {
    let ring = Ring::try_with(ALPHABET_SIZE)?;
    validate_key(key, &ring)?;

    let numbers = pad_to_blocks(text_to_numeric(ciphertext), key.len())?;

    let inverse = matrix_inverse(key, &ring)?;
    let mut out = Vec::with_capacity(numbers.len());
    for block in numbers.chunks_exact(key.len()) {
        out.extend(vector_matrix_mul(block, &inverse, &ring)?);
    }

    Ok(numeric_to_text(&out))
}

/// Deserializes a key matrix from its JSON form, e.g. `[[1,3],[3,4]]`.
///
/// The parsed matrix is not validated here; `encode`/`decode` reject keys
/// that are not square or not invertible mod 26.
pub fn parse_key(json: &str) -> Result<Matrix, HillCipherError> {
    let key: Matrix = serde_json::from_str(json)?;
    Ok(key)
}

/// Checks that the key is square and invertible mod 26.
///
/// The determinant must be coprime to 26, i.e. odd and not a multiple
/// of 13.
fn validate_key(key: &Matrix, ring: &Ring) -> Result<(), HillCipherError> {
    if key.is_empty() || key.iter().any(|row| row.len() != key.len()) {
        return Err(HillCipherError::NotSquare(format!(
            "Key must be n x n, got {} row(s) of lengths {:?}",
            key.len(),
            key.iter().map(|row| row.len()).collect::<Vec<_>>()
        )));
    }

    let det = ring.normalize(determinant(key));
    let g = gcd(det, ring.modulus() as i64);
    if g != 1 {
        return Err(HillCipherError::BadKey(format!(
            "Key determinant {} shares factor {} with {}",
            det,
            g,
            ring.modulus()
        )));
    }

    Ok(())
}

/// Pads a numeric sequence to a multiple of the block size by repeating its
/// last element.
///
/// # Errors
///
/// Returns `HillCipherError::EmptyInput` if the sequence is empty — there is
/// no last element to repeat.
fn pad_to_blocks(mut numbers: Vector, block_size: usize) -> Result<Vector, HillCipherError> {
    if numbers.is_empty() {
        return Err(HillCipherError::EmptyInput);
    }

    let last = *numbers.last().unwrap();
    while numbers.len() % block_size != 0 {
        numbers.push(last);
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_key() -> Matrix {
        vec![vec![1, 3], vec![3, 4]]
    }

    #[test]
    fn known_vector() {
        // "ab" -> [0, 1] -> [0*1 + 1*3, 0*3 + 1*4] = [3, 4] -> "de"
        assert_eq!(encode("ab", &demo_key()).unwrap(), "de");
        assert_eq!(decode("de", &demo_key()).unwrap(), "ab");
    }

    #[test]
    fn roundtrip_strips_and_pads() {
        let ciphertext = encode("To be, or not to be", &demo_key()).unwrap();
        let plaintext = decode(&ciphertext, &demo_key()).unwrap();
        // 13 letters survive filtering, padded with a repeat of the final 'e'
        assert_eq!(plaintext, "tobeornottobee");
    }

    #[test]
    fn aligned_input_gains_no_padding() {
        let ciphertext = encode("abcd", &demo_key()).unwrap();
        assert_eq!(ciphertext.len(), 4);

        let ciphertext = encode("abc", &demo_key()).unwrap();
        assert_eq!(ciphertext.len(), 4);
    }

    #[test]
    fn even_determinant_is_rejected() {
        let key = vec![vec![2, 0], vec![0, 1]];
        assert!(matches!(
            encode("abc", &key),
            Err(HillCipherError::BadKey(_))
        ));
    }

    #[test]
    fn multiples_of_thirteen_are_rejected() {
        // det = 13 and det = 39: both share the factor 13 with 26
        let key13 = vec![vec![13, 0], vec![0, 1]];
        assert!(matches!(
            encode("abc", &key13),
            Err(HillCipherError::BadKey(_))
        ));

        let key39 = vec![vec![39, 0], vec![0, 1]];
        assert!(matches!(
            decode("abc", &key39),
            Err(HillCipherError::BadKey(_))
        ));
    }

    #[test]
    fn negative_odd_determinant_is_accepted() {
        // demo key has det = -5, normalized to 21, coprime to 26
        assert!(encode("ab", &demo_key()).is_ok());
    }

    #[test]
    fn rectangular_key_fails_before_any_computation() {
        let rect = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert!(matches!(
            encode("abc", &rect),
            Err(HillCipherError::NotSquare(_))
        ));
        assert!(matches!(
            decode("abc", &rect),
            Err(HillCipherError::NotSquare(_))
        ));

        let empty: Matrix = Vec::new();
        assert!(matches!(
            encode("abc", &empty),
            Err(HillCipherError::NotSquare(_))
        ));
    }

    #[test]
    fn empty_filtered_input_is_an_error() {
        assert!(matches!(
            encode("", &demo_key()),
            Err(HillCipherError::EmptyInput)
        ));
        assert!(matches!(
            encode("123 !?", &demo_key()),
            Err(HillCipherError::EmptyInput)
        ));
    }

    #[test]
    fn one_by_one_key_degenerates_to_a_caesar_like_cipher() {
        let key = vec![vec![3]];
        assert_eq!(encode("abc", &key).unwrap(), "adg");
        assert_eq!(decode("adg", &key).unwrap(), "abc");
    }

    #[test]
    fn parse_key_roundtrip() {
        assert_eq!(parse_key("[[1,3],[3,4]]").unwrap(), demo_key());
        assert!(parse_key("[[1,3],[3,").is_err());
        assert!(parse_key("\"not a matrix\"").is_err());
    }

    #[test]
    fn pad_to_blocks_repeats_last_element() {
        assert_eq!(pad_to_blocks(vec![0, 1, 2], 2).unwrap(), vec![0, 1, 2, 2]);
        assert_eq!(pad_to_blocks(vec![0, 1], 2).unwrap(), vec![0, 1]);
        assert_eq!(
            pad_to_blocks(vec![5], 3).unwrap(),
            vec![5, 5, 5]
        );
        assert!(matches!(
            pad_to_blocks(Vec::new(), 2),
            Err(HillCipherError::EmptyInput)
        ));
    }
}
