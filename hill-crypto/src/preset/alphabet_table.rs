use lazy_static::lazy_static;
use std::collections::HashMap;

/// Number of letters in the cipher alphabet; the modulus of every ring the
/// cipher builds.
pub const ALPHABET_SIZE: u64 = 26;

lazy_static! {
    /// A static HashMap mapping an index (0 to 25) to its corresponding
    /// lowercase Latin letter under the A0Z25 code (a-z).
    pub static ref INDEX_TO_LETTER_MAP: HashMap<i64, char> = {
        let mut map = HashMap::new();

        for (i, ch) in ('a'..='z').enumerate() {
            map.insert(i as i64, ch);
        }

        map
    };

    /// A static HashMap mapping a lowercase Latin letter (a-z) to its
    /// corresponding index (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, i64> = {
        let mut map = HashMap::new();

        for (&index, &ch) in INDEX_TO_LETTER_MAP.iter() {
            map.insert(ch, index);
        }

        map
    };
}
