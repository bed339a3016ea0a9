pub mod action;
pub mod game_state;

mod constants;

use constants::*;

pub use action::*;
pub use game_state::*;
