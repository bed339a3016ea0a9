pub mod action;
pub mod game_state;
pub mod heuristics;

mod board;
mod constants;

use board::*;
use constants::*;

pub use action::*;
pub use game_state::*;
pub use heuristics::*;
