#[cfg(test)]
mod counting_game;
pub mod evaluator;
pub mod negamax;
pub mod options;
pub mod search_details;
pub mod transposition;

pub use evaluator::*;
pub use negamax::*;
pub use options::*;
pub use search_details::*;
pub use transposition::*;
