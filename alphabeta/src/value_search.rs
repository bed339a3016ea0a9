use engine::{GameError, GameState, Heuristic, Player};

use crate::{depth_limited, unbounded, Bounds};

/// Scores the successors of the state a move is being chosen from.
pub trait ValueSearch<S: GameState> {
    fn max_value(&self, state: &S, alpha: f32, beta: f32) -> Result<f32, GameError>;

    fn min_value(&self, state: &S, alpha: f32, beta: f32) -> Result<f32, GameError>;

    fn value(&self, state: &S, bounds: Bounds) -> Result<f32, GameError> {
        match state.player_to_move() {
            Player::Zero => self.max_value(state, bounds.alpha, bounds.beta),
            Player::One => self.min_value(state, bounds.alpha, bounds.beta),
        }
    }
}

/// Searches to the end of the game. Only practical for small games.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSearch;

impl<S: GameState> ValueSearch<S> for ExhaustiveSearch {
    fn max_value(&self, state: &S, alpha: f32, beta: f32) -> Result<f32, GameError> {
        unbounded::max_value(state, alpha, beta)
    }

    fn min_value(&self, state: &S, alpha: f32, beta: f32) -> Result<f32, GameError> {
        unbounded::min_value(state, alpha, beta)
    }
}

/// Searches `depth` plies from the state being moved from and estimates the horizon with a
/// heuristic.
///
/// The move into a successor is the first of those plies, so successors themselves are searched
/// `depth - 1` plies deep. A depth of one scores every successor with the heuristic directly.
#[derive(Clone, Debug)]
pub struct DepthLimitedSearch<H> {
    depth: usize,
    heuristic: H,
}

impl<H> DepthLimitedSearch<H> {
    pub fn new(depth: usize, heuristic: H) -> Self {
        Self { depth, heuristic }
    }

    fn successor_depth(&self) -> usize {
        self.depth.saturating_sub(1)
    }
}

impl<S, H> ValueSearch<S> for DepthLimitedSearch<H>
where
    S: GameState,
    H: Heuristic<S>,
{
    fn max_value(&self, state: &S, alpha: f32, beta: f32) -> Result<f32, GameError> {
        Ok(depth_limited::max_value(
            state,
            alpha,
            beta,
            self.successor_depth(),
            &self.heuristic,
        ))
    }

    fn min_value(&self, state: &S, alpha: f32, beta: f32) -> Result<f32, GameError> {
        Ok(depth_limited::min_value(
            state,
            alpha,
            beta,
            self.successor_depth(),
            &self.heuristic,
        ))
    }
}
