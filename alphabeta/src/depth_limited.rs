//! Alpha-beta search truncated at a fixed number of plies.
//!
//! States at the horizon, and terminal states reached before it, are scored by the heuristic rather
//! than by `GameState::terminal_value`, so the heuristic should agree with the terminal value on
//! terminal states. Every level of recursion consumes one ply of depth, including levels where the
//! same player moves again.

use engine::{GameState, Heuristic, Player};

use crate::Bounds;

/// The estimated value of `state` searched `depth` plies deep when it lies within `(alpha, beta)`,
/// otherwise the bound it fell outside of.
pub fn max_value<S, H>(state: &S, alpha: f32, beta: f32, depth: usize, heuristic: &H) -> f32
where
    S: GameState,
    H: Heuristic<S> + ?Sized,
{
    if depth == 0 || state.is_terminal() {
        return heuristic.evaluate(state);
    }

    let mut bounds = Bounds::new(alpha, beta);

    for successor in state.successors() {
        let value = value_within(&successor, bounds, depth - 1, heuristic);
        if let Some(cutoff) = bounds.raise_alpha(value) {
            return cutoff;
        }
    }

    bounds.alpha
}

/// The estimated value of `state` searched `depth` plies deep when it lies within `(alpha, beta)`,
/// otherwise the bound it fell outside of.
pub fn min_value<S, H>(state: &S, alpha: f32, beta: f32, depth: usize, heuristic: &H) -> f32
where
    S: GameState,
    H: Heuristic<S> + ?Sized,
{
    if depth == 0 || state.is_terminal() {
        return heuristic.evaluate(state);
    }

    let mut bounds = Bounds::new(alpha, beta);

    for successor in state.successors() {
        let value = value_within(&successor, bounds, depth - 1, heuristic);
        if let Some(cutoff) = bounds.lower_beta(value) {
            return cutoff;
        }
    }

    bounds.beta
}

/// The estimated value of `state` for whichever player is to move, searched `depth` plies deep.
pub fn value<S, H>(state: &S, depth: usize, heuristic: &H) -> f32
where
    S: GameState,
    H: Heuristic<S> + ?Sized,
{
    value_within(state, Bounds::full(), depth, heuristic)
}

fn value_within<S, H>(state: &S, bounds: Bounds, depth: usize, heuristic: &H) -> f32
where
    S: GameState,
    H: Heuristic<S> + ?Sized,
{
    match state.player_to_move() {
        Player::Zero => max_value(state, bounds.alpha, bounds.beta, depth, heuristic),
        Player::One => min_value(state, bounds.alpha, bounds.beta, depth, heuristic),
    }
}
