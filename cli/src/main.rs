use hill_crypto::ring::Matrix;
use hill_crypto::{decode, encode, parse_key};

use log::info;

/// Demonstration of the Hill cipher: encodes a fixed message with the
/// classic 2x2 key (or a key passed as a JSON argument), decodes it back,
/// and prints both results space-separated.
fn main() {
    env_logger::init();

    let key: Matrix = match std::env::args().nth(1) {
        Some(raw) => match parse_key(&raw) {
            Ok(key) => key,
            Err(e) => {
                eprintln!("invalid key argument: {}", e);
                std::process::exit(1);
            }
        },
        None => vec![vec![1, 3], vec![3, 4]],
    };
    info!("using a {0}x{0} key", key.len());

    let message = "To be, or not to be, that is the question:\
                   Whether 'tis nobler in the mind to suffer\
                   The slings and arrows of outrageous fortune,\
                   Or to take arms against a sea of troubles";

    let encoded = match encode(message, &key) {
        Ok(ciphertext) => ciphertext,
        Err(e) => {
            eprintln!("encode failed: {}", e);
            std::process::exit(1);
        }
    };
    let decoded = match decode(&encoded, &key) {
        Ok(plaintext) => plaintext,
        Err(e) => {
            eprintln!("decode failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{} {}", encoded, decoded);
}
