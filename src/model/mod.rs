pub mod corpus;
pub mod loader;

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::debug;

use crate::config::ModelPaths;
use crate::error::{CbResult, CipherBreakError};

/// The n-gram orders the recovery pipeline scores with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum NgramOrder {
    Bigram,
    Trigram,
    Quadgram,
}

impl NgramOrder {
    pub fn word_len(self) -> usize {
        match self {
            NgramOrder::Bigram => 2,
            NgramOrder::Trigram => 3,
            NgramOrder::Quadgram => 4,
        }
    }
}

/// Log-probability fitness model over fixed-length letter sequences.
///
/// Built once from an integer frequency table and read-only afterwards.
/// A window absent from the table scores `floor_score` (the smoothed
/// log-probability of a count of 0.01) instead of negative infinity.
#[derive(Debug, Clone)]
pub struct NgramModel {
    probs: HashMap<Box<[u8]>, f64>,
    word_len: usize,
    floor_score: f64,
}

impl NgramModel {
    /// Build a model from `(ngram, count)` entries. Every n-gram must share
    /// one length, and the table must be non-empty with a positive total.
    pub fn from_counts(entries: Vec<(String, u64)>) -> CbResult<Self> {
        if entries.is_empty() {
            return Err(CipherBreakError::MalformedModel(
                "frequency table is empty".into(),
            ));
        }

        let word_len = entries[0].0.len();
        if word_len == 0 {
            return Err(CipherBreakError::MalformedModel(
                "frequency table contains an empty n-gram".into(),
            ));
        }

        let mut total: u64 = 0;
        for (ngram, count) in &entries {
            if ngram.len() != word_len {
                return Err(CipherBreakError::MalformedModel(format!(
                    "n-gram '{}' has length {}, expected {}",
                    ngram,
                    ngram.len(),
                    word_len
                )));
            }
            total += count;
        }
        if total == 0 {
            return Err(CipherBreakError::MalformedModel(
                "frequency table has zero total mass".into(),
            ));
        }

        let total = total as f64;
        let floor_score = (0.01 / total).log10();
        let mut probs = HashMap::with_capacity(entries.len());
        for (ngram, count) in entries {
            probs.insert(
                ngram.into_bytes().into_boxed_slice(),
                (count as f64 / total).log10(),
            );
        }

        Ok(Self {
            probs,
            word_len,
            floor_score,
        })
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Log-probability charged to windows absent from the table.
    pub fn floor_score(&self) -> f64 {
        self.floor_score
    }

    /// Sum the log10 probability of every contiguous `word_len` window in
    /// `text`. Text shorter than `word_len` is an empty sum, not an error.
    pub fn score(&self, text: &str) -> CbResult<f64> {
        if text.is_empty() {
            return Err(CipherBreakError::EmptyInput("cannot score empty text"));
        }

        let mut score = 0.0;
        for window in text.as_bytes().windows(self.word_len) {
            score += self.probs.get(window).copied().unwrap_or(self.floor_score);
        }
        Ok(score)
    }
}

/// The three models one recovery run scores with, behind a single handle.
#[derive(Debug, Clone)]
pub struct LanguageModels {
    pub bigram: NgramModel,
    pub trigram: NgramModel,
    pub quadgram: NgramModel,
}

impl LanguageModels {
    /// Load all three tables from disk.
    pub fn load(paths: &ModelPaths) -> CbResult<Self> {
        let delimiter = paths.delimiter_byte()?;
        let load = |order: NgramOrder| -> CbResult<NgramModel> {
            let path = paths.path(order);
            debug!("loading {} table from {}", order, path);
            loader::load_model(path, delimiter)
        };

        Self::from_models(
            load(NgramOrder::Bigram)?,
            load(NgramOrder::Trigram)?,
            load(NgramOrder::Quadgram)?,
        )
    }

    /// Bundle pre-built models, verifying each holds n-grams of the length
    /// its slot expects.
    pub fn from_models(
        bigram: NgramModel,
        trigram: NgramModel,
        quadgram: NgramModel,
    ) -> CbResult<Self> {
        let models = Self {
            bigram,
            trigram,
            quadgram,
        };

        for order in NgramOrder::iter() {
            let word_len = models.model(order).word_len();
            if word_len != order.word_len() {
                return Err(CipherBreakError::MalformedModel(format!(
                    "{} model holds {}-grams, expected {}",
                    order,
                    word_len,
                    order.word_len()
                )));
            }
        }
        Ok(models)
    }

    pub fn model(&self, order: NgramOrder) -> &NgramModel {
        match order {
            NgramOrder::Bigram => &self.bigram,
            NgramOrder::Trigram => &self.trigram,
            NgramOrder::Quadgram => &self.quadgram,
        }
    }
}
