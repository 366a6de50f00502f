pub mod poly;
pub mod shift;

pub use poly::{decrypt, encrypt};
