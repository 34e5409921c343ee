pub mod action;
pub mod engine;
pub mod evaluation;
pub mod game_state;
pub mod value;

mod board;
mod constants;
mod direction;
mod display;
mod move_gen;

pub use action::*;
pub use board::Board;
pub use constants::*;
pub use direction::{Direction, DirectionSet};
pub use engine::*;
pub use evaluation::*;
pub use game_state::*;
pub use value::*;
