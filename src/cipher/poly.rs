use crate::alphabet::{self, SIZE};
use crate::error::{CbResult, CipherBreakError};

/// Encrypt `plaintext` under a repeating `key`: letter i is shifted by the
/// key letter at position `i mod key_len`. Case and non-alphabet characters
/// in both arguments are discarded before combining.
pub fn encrypt(plaintext: &str, key: &str) -> CbResult<String> {
    combine(plaintext, key, |t, k| (t + k) % SIZE)
}

/// Invert [`encrypt`] for a known key.
pub fn decrypt(ciphertext: &str, key: &str) -> CbResult<String> {
    combine(ciphertext, key, |t, k| (t + SIZE - k) % SIZE)
}

fn combine(text: &str, key: &str, op: impl Fn(u8, u8) -> u8) -> CbResult<String> {
    let text = alphabet::normalize(text);
    if text.is_empty() {
        return Err(CipherBreakError::EmptyInput("text has no alphabet letters"));
    }

    let key = alphabet::normalize(key);
    if key.is_empty() {
        return Err(CipherBreakError::InvalidKey("key has no alphabet letters"));
    }

    Ok(text
        .bytes()
        .zip(key.bytes().cycle())
        .map(|(t, k)| alphabet::decode(op(alphabet::encode(t), alphabet::encode(k))) as char)
        .collect())
}
