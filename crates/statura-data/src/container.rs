//! The encrypted measurement-container format.
//!
//! A sealed file is zlib-compressed, encrypted with an
//! XSalsa20-Poly1305 secretbox (key: unsalted 32-byte Blake2b digest of
//! the password; random 24-byte nonce prepended to the ciphertext),
//! then base64-encoded with the standard alphabet. Passwordless
//! containers skip the secretbox layer and are just compressed and
//! encoded.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use crypto_secretbox::aead::{Aead, AeadCore, KeyInit, OsRng};
use crypto_secretbox::{Key, Nonce, XSalsa20Poly1305};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::DataError;

type Blake2b256 = Blake2b<U32>;

/// Secretbox nonces are 24 bytes and travel in front of the
/// ciphertext.
const NONCE_SIZE: usize = 24;

fn derive_key(password: &str) -> Key {
    let digest = Blake2b256::digest(password.as_bytes());
    Key::clone_from_slice(&digest)
}

/// Compress, optionally encrypt, and base64-encode `plaintext`.
pub fn seal(plaintext: &[u8], password: Option<&str>) -> Result<String, DataError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(plaintext)?;
    let compressed = encoder.finish()?;

    let payload = match password {
        Some(password) => {
            let cipher = XSalsa20Poly1305::new(&derive_key(password));
            let nonce = XSalsa20Poly1305::generate_nonce(&mut OsRng);
            let ciphertext = cipher
                .encrypt(&nonce, compressed.as_ref())
                .map_err(|_| DataError::Encrypt)?;
            let mut out = nonce.to_vec();
            out.extend_from_slice(&ciphertext);
            out
        }
        None => compressed,
    };

    Ok(BASE64.encode(payload))
}

/// Invert [`seal`]: decode, decrypt when a password is given, and
/// decompress. An authentication failure (wrong password or tampered
/// container) is reported as [`DataError::Decrypt`].
pub fn open(contents: &str, password: Option<&str>) -> Result<Vec<u8>, DataError> {
    let decoded = BASE64.decode(contents.trim())?;

    let compressed = match password {
        Some(password) => {
            if decoded.len() < NONCE_SIZE {
                return Err(DataError::Truncated);
            }
            let (nonce, ciphertext) = decoded.split_at(NONCE_SIZE);
            let cipher = XSalsa20Poly1305::new(&derive_key(password));
            cipher
                .decrypt(Nonce::from_slice(nonce), ciphertext)
                .map_err(|_| DataError::Decrypt)?
        }
        None => decoded,
    };

    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut plaintext = Vec::new();
    decoder
        .read_to_end(&mut plaintext)
        .map_err(|e| DataError::Decompress(e.to_string()))?;
    Ok(plaintext)
}
