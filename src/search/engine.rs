use std::sync::Arc;

use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet::{self, FILLER};
use crate::cipher::poly;
use crate::config::SearchParams;
use crate::error::{CbResult, CipherBreakError};
use crate::model::{LanguageModels, NgramModel};
use crate::search::beam::{Beam, Candidate};

/// Fewest ciphertext letters the search can work with: one trigram sample.
pub const MIN_CIPHERTEXT_LEN: usize = 3;

/// Knobs for one recovery run.
#[derive(Debug, Clone)]
pub struct RecoveryOptions {
    /// Longest key length attempted; silently clamped to the ciphertext
    /// length.
    pub max_key_len: usize,
    /// Candidates retained per search stage.
    pub beam_capacity: usize,
}

impl Default for RecoveryOptions {
    fn default() -> Self {
        Self {
            max_key_len: 20,
            beam_capacity: 100,
        }
    }
}

impl From<&SearchParams> for RecoveryOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            max_key_len: params.max_key_len,
            beam_capacity: params.beam_capacity,
        }
    }
}

/// Best key recovered for one candidate key length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecipherResult {
    pub key_length: usize,
    pub key: String,
    pub score: f64,
    pub plaintext: String,
}

/// Beam search over the key space, one independent pass per key length.
///
/// Each pass grows partial keys letter by letter: a bigram-scored seed over
/// all ordered letter pairs, a trigram-scored extension, then quadgram-scored
/// growth until the key is full length. Scoring during growth is column-wise:
/// only the first `prefix.len()` characters of each key-length block of the
/// decrypted text are scored, so an unresolved later key letter cannot drown
/// out the letters already chosen.
pub struct KeyRecovery {
    models: Arc<LanguageModels>,
    options: RecoveryOptions,
}

impl KeyRecovery {
    pub fn new(models: Arc<LanguageModels>, options: RecoveryOptions) -> CbResult<Self> {
        if options.beam_capacity == 0 {
            return Err(CipherBreakError::Config(
                "beam capacity must be at least 1".into(),
            ));
        }
        if options.max_key_len < 2 {
            return Err(CipherBreakError::Config(
                "max key length must be at least 2".into(),
            ));
        }
        Ok(Self { models, options })
    }

    /// Recover the most probable key per candidate length, ascending by
    /// length. Key lengths run 2..=min(max_key_len, ciphertext letters).
    pub fn recover(&self, ciphertext: &str) -> CbResult<Vec<DecipherResult>> {
        let text = alphabet::normalize(ciphertext);
        if text.len() < MIN_CIPHERTEXT_LEN {
            return Err(CipherBreakError::InsufficientCiphertext {
                min: MIN_CIPHERTEXT_LEN,
                got: text.len(),
            });
        }

        let max_key_len = self.options.max_key_len.min(text.len());

        // Each key length searches independently; the ordered collect keeps
        // the report independent of completion order.
        (2..=max_key_len)
            .into_par_iter()
            .map(|key_len| self.recover_length(&text, key_len))
            .collect()
    }

    /// One full pipeline pass for a fixed key length.
    fn recover_length(&self, text: &str, key_len: usize) -> CbResult<DecipherResult> {
        let mut beam = Beam::new(self.options.beam_capacity);

        // Seed: all 650 ordered pairs of distinct letters, scored completely
        // with the bigram model. The only pruning here is the beam's
        // capacity bound.
        for pair in alphabet::letters().permutations(2) {
            let prefix: String = pair.into_iter().collect();
            let score = self.column_score(text, &prefix, key_len, &self.models.bigram)?;
            beam.push(Candidate::new(score, prefix));
        }

        if key_len >= 3 {
            beam = self.grow_beam(text, &beam, key_len, &self.models.trigram)?;
        }

        for _ in 0..key_len.saturating_sub(3) {
            beam = self.grow_beam(text, &beam, key_len, &self.models.quadgram)?;
        }

        // Full-length candidates are re-scored over the whole plaintext with
        // the highest-order model; strict comparison, so the first candidate
        // encountered wins ties.
        let mut best_key: Option<&str> = None;
        let mut best_score = f64::NEG_INFINITY;
        for candidate in beam.candidates() {
            let plaintext = poly::decrypt(text, &candidate.key)?;
            let score = self.models.quadgram.score(&plaintext)?;
            if best_key.is_none() || score > best_score {
                best_key = Some(&candidate.key);
                best_score = score;
            }
        }

        let key = best_key
            .ok_or_else(|| CipherBreakError::Config("search produced an empty beam".into()))?
            .to_string();
        let plaintext = poly::decrypt(text, &key)?;

        debug!(key_len, key = %key, score = best_score, "length pass complete");
        Ok(DecipherResult {
            key_length: key_len,
            key,
            score: best_score,
            plaintext,
        })
    }

    /// Extend every surviving prefix by one letter across the alphabet and
    /// prune the results into a fresh beam of the same capacity.
    fn grow_beam(
        &self,
        text: &str,
        beam: &Beam,
        key_len: usize,
        model: &NgramModel,
    ) -> CbResult<Beam> {
        let mut next = Beam::new(self.options.beam_capacity);
        for candidate in beam.candidates() {
            for letter in alphabet::letters() {
                let mut prefix = candidate.key.clone();
                prefix.push(letter);
                let score = self.column_score(text, &prefix, key_len, model)?;
                next.push(Candidate::new(score, prefix));
            }
        }
        Ok(next)
    }

    /// Column-wise diagnostic score: within every key-length block of the
    /// decrypted text, only the first `prefix.len()` characters are scored.
    /// The final block may run short; its truncated tail is scored as-is,
    /// and windows below the model order contribute nothing.
    fn column_score(
        &self,
        text: &str,
        prefix: &str,
        key_len: usize,
        model: &NgramModel,
    ) -> CbResult<f64> {
        let key = pad_key(prefix, key_len);
        let plaintext = poly::decrypt(text, &key)?;

        let mut score = 0.0;
        let mut start = 0;
        while start < plaintext.len() {
            let end = (start + prefix.len()).min(plaintext.len());
            score += model.score(&plaintext[start..end])?;
            start += key_len;
        }
        Ok(score)
    }
}

/// Pad a partial key to the full key length with the neutral filler letter.
fn pad_key(prefix: &str, key_len: usize) -> String {
    let mut key = String::with_capacity(key_len);
    key.push_str(prefix);
    while key.len() < key_len {
        key.push(FILLER);
    }
    key
}
