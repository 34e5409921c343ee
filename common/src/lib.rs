pub mod config;
pub mod rng;
pub mod transposition;

pub use config::*;
pub use rng::*;
pub use transposition::*;
