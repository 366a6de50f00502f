pub mod beam;
pub mod engine;

pub use beam::{Beam, Candidate};
pub use engine::{DecipherResult, KeyRecovery, RecoveryOptions, MIN_CIPHERTEXT_LEN};
