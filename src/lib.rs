pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod error;
pub mod model;
pub mod search;

pub use cipher::poly::{decrypt, encrypt};
pub use error::{CbResult, CipherBreakError};
pub use model::{LanguageModels, NgramModel, NgramOrder};
pub use search::{Beam, Candidate, DecipherResult, KeyRecovery, RecoveryOptions};
