pub mod error;
pub mod game_state;
pub mod heuristic;
pub mod players;

pub use crate::error::*;
pub use crate::game_state::*;
pub use crate::heuristic::*;
pub use crate::players::*;
