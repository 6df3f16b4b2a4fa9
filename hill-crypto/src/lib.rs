//! # Hill Crypto
//!
//! This library implements the Hill cipher: a polygraphic substitution
//! cipher that encrypts blocks of letters by matrix multiplication mod 26.

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod preset;
pub mod ring;

pub use cipher::{decode, encode, parse_key};
pub use errors::HillCipherError;
pub use ring::*;
