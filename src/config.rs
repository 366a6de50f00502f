use clap::Args;

use crate::error::{CbResult, CipherBreakError};
use crate::model::NgramOrder;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub models: ModelPaths,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Longest key length to attempt (clamped to the ciphertext length)
    #[arg(long, default_value_t = 20)]
    pub max_key_len: usize,

    /// Candidates retained per search stage
    #[arg(long, default_value_t = 100)]
    pub beam_capacity: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_key_len: 20,
            beam_capacity: 100,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ModelPaths {
    #[arg(long, default_value = "data/english_bigrams.txt")]
    pub bigrams: String,

    #[arg(long, default_value = "data/english_trigrams.txt")]
    pub trigrams: String,

    #[arg(long, default_value = "data/english_quadgrams.txt")]
    pub quadgrams: String,

    /// Field separator between n-gram and count in the table files
    #[arg(long, default_value = " ")]
    pub delimiter: String,
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            bigrams: "data/english_bigrams.txt".into(),
            trigrams: "data/english_trigrams.txt".into(),
            quadgrams: "data/english_quadgrams.txt".into(),
            delimiter: " ".into(),
        }
    }
}

impl ModelPaths {
    pub fn path(&self, order: NgramOrder) -> &str {
        match order {
            NgramOrder::Bigram => &self.bigrams,
            NgramOrder::Trigram => &self.trigrams,
            NgramOrder::Quadgram => &self.quadgrams,
        }
    }

    pub fn delimiter_byte(&self) -> CbResult<u8> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(CipherBreakError::Config(format!(
                "--delimiter must be a single byte, got '{}'",
                self.delimiter
            ))),
        }
    }
}
