use serde::{Deserialize, Serialize};

use crate::alphabet::{self, SIZE};
use crate::error::{CbResult, CipherBreakError};
use crate::model::NgramModel;

/// One brute-force decryption attempt of the single-shift cipher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftGuess {
    pub shift: u8,
    pub score: f64,
    pub plaintext: String,
}

/// Encrypt by shifting every letter a fixed amount mod 26.
pub fn encrypt(plaintext: &str, shift: u8) -> CbResult<String> {
    apply(plaintext, shift, |t, k| (t + k) % SIZE)
}

/// Invert [`encrypt`] for a known shift.
pub fn decrypt(ciphertext: &str, shift: u8) -> CbResult<String> {
    apply(ciphertext, shift, |t, k| (t + SIZE - k) % SIZE)
}

fn apply(text: &str, shift: u8, op: impl Fn(u8, u8) -> u8) -> CbResult<String> {
    if shift == 0 {
        return Err(CipherBreakError::InvalidKey("shift must be non-zero"));
    }

    let text = alphabet::normalize(text);
    if text.is_empty() {
        return Err(CipherBreakError::EmptyInput("text has no alphabet letters"));
    }

    let shift = shift % SIZE;
    Ok(text
        .bytes()
        .map(|t| alphabet::decode(op(alphabet::encode(t), shift)) as char)
        .collect())
}

/// Decrypt under every shift 1..=26 and rank the guesses by fitness score,
/// best first. Equal scores keep ascending shift order.
pub fn crack(ciphertext: &str, model: &NgramModel) -> CbResult<Vec<ShiftGuess>> {
    let mut guesses = Vec::with_capacity(SIZE as usize);
    for shift in 1..=SIZE {
        let plaintext = decrypt(ciphertext, shift)?;
        let score = model.score(&plaintext)?;
        guesses.push(ShiftGuess {
            shift,
            score,
            plaintext,
        });
    }

    guesses.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(guesses)
}
