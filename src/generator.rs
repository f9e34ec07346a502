use crate::entropy::ByteSource;
use crate::error::{InvalidRequest, Result};
use tracing::debug;
use zeroize::Zeroizing;

const MAX_ALPHABET: usize = 256;

/// Draws `password_length` characters from `alphabet` using bytes from `source`.
///
/// An accepted byte `b` selects `alphabet[b % n]`. Bytes at or above
/// `256 - 256 % n` are discarded and redrawn, so every character is equally
/// likely; a byte stream that never hits the threshold produces exactly the
/// plain modulo mapping.
pub fn generate_password<S: ByteSource>(
    alphabet: &str,
    password_length: usize,
    mut source: S,
) -> Result<Zeroizing<String>> {
    let pool: Vec<char> = alphabet.chars().collect();
    let alphabet_size = pool.len();

    if alphabet_size == 0 {
        return Err(InvalidRequest::EmptyAlphabet.into());
    }
    if alphabet_size > MAX_ALPHABET {
        return Err(InvalidRequest::AlphabetTooLarge(alphabet_size).into());
    }
    if password_length == 0 {
        return Err(InvalidRequest::ZeroLength.into());
    }

    let rejection_threshold = MAX_ALPHABET - (MAX_ALPHABET % alphabet_size);

    let mut password = Zeroizing::new(String::with_capacity(password_length));
    let mut produced = 0;
    let mut rejected = 0usize;

    let mut buffer = Zeroizing::new(vec![0u8; password_length]);

    while produced < password_length {
        source.fill_bytes(&mut buffer)?;

        for &random_byte in buffer.iter() {
            if produced == password_length {
                break;
            }

            if (random_byte as usize) < rejection_threshold {
                let index = (random_byte as usize) % alphabet_size;
                password.push(pool[index]);
                produced += 1;
            } else {
                rejected += 1;
            }
        }
    }

    debug!(alphabet_size, password_length, rejected, "generated password");

    Ok(password)
}
