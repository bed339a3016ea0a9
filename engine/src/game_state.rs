use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::{GameError, Player};

/// A state of a two-player, zero-sum, deterministic game of perfect information.
///
/// States are values: generating successors or taking an action returns a new state and never
/// mutates `self`. A terminal state has no successors, and a non-terminal state has at least one.
pub trait GameState: Clone + Debug + Display {
    type Action: FromStr + Display + Debug + Clone;

    fn initial() -> Self;

    fn is_terminal(&self) -> bool;

    /// The outcome of a terminal state from player zero's perspective: positive when player zero
    /// won, negative when it lost and zero for a draw.
    ///
    /// Returns `GameError::NonTerminalState` if the game is not over.
    fn terminal_value(&self) -> Result<f32, GameError>;

    /// The player to move in this state. The same player may be to move in a successor state.
    fn player_to_move(&self) -> Player;

    /// Every state one legal move away, in a stable order. Empty for terminal states.
    fn successors(&self) -> Vec<Self>;

    fn is_legal_move(&self, action: &Self::Action) -> bool;

    fn take_action(&self, action: &Self::Action) -> Result<Self, GameError>;

    /// Describes the expected input of a human player.
    fn turn_instructions(&self) -> &'static str;
}
