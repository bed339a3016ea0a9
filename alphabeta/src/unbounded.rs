//! Alpha-beta search of the complete game tree.
//!
//! `max_value` evaluates states in which player zero is to move and `min_value` states in which
//! player one is to move. Which of the two is applied to a successor is decided by the successor's
//! player to move, as a move may leave the same player to move again.
//!
//! Both require that every non-terminal state has at least one successor.

use engine::{GameError, GameState, Player};

use crate::Bounds;

/// The game-theoretic value of `state` when it lies within `(alpha, beta)`, otherwise the bound it
/// fell outside of.
pub fn max_value<S: GameState>(state: &S, alpha: f32, beta: f32) -> Result<f32, GameError> {
    if state.is_terminal() {
        return state.terminal_value();
    }

    let mut bounds = Bounds::new(alpha, beta);

    for successor in state.successors() {
        let value = value_within(&successor, bounds)?;
        if let Some(cutoff) = bounds.raise_alpha(value) {
            return Ok(cutoff);
        }
    }

    Ok(bounds.alpha)
}

/// The game-theoretic value of `state` when it lies within `(alpha, beta)`, otherwise the bound it
/// fell outside of.
pub fn min_value<S: GameState>(state: &S, alpha: f32, beta: f32) -> Result<f32, GameError> {
    if state.is_terminal() {
        return state.terminal_value();
    }

    let mut bounds = Bounds::new(alpha, beta);

    for successor in state.successors() {
        let value = value_within(&successor, bounds)?;
        if let Some(cutoff) = bounds.lower_beta(value) {
            return Ok(cutoff);
        }
    }

    Ok(bounds.beta)
}

/// The exact game-theoretic value of `state` for whichever player is to move.
pub fn value<S: GameState>(state: &S) -> Result<f32, GameError> {
    value_within(state, Bounds::full())
}

fn value_within<S: GameState>(state: &S, bounds: Bounds) -> Result<f32, GameError> {
    match state.player_to_move() {
        Player::Zero => max_value(state, bounds.alpha, bounds.beta),
        Player::One => min_value(state, bounds.alpha, bounds.beta),
    }
}
