#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, 26) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Error when the key matrix is not n x n.
    #[error("NotSquare: {0}")]
    NotSquare(String),
    /// Error when the key determinant shares a factor with the alphabet size.
    #[error("BadKey: {0}")]
    BadKey(String),

    #[error("No letters survived filtering; nothing to encode")]
    EmptyInput,

    #[error("Key deserialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
