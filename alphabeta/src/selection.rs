use engine::{GameError, GameState};
use log::{debug, trace};

use crate::{Bounds, ValueSearch};

/// The successor picked for the player to move.
#[derive(Clone, Debug)]
pub struct Choice<S> {
    /// Position of the chosen state within `GameState::successors`.
    pub index: usize,
    pub state: S,
    pub value: f32,
}

/// Picks the successor of `state` that is best for the player to move: the highest valued for
/// player zero and the lowest valued for player one. Ties go to the successor generated first.
///
/// Successors are searched left to right sharing a single root window, so later successors are
/// pruned against the best value found so far. Their returned values are then only bounds, which is
/// sufficient since a successor only replaces the incumbent on a strict improvement.
///
/// Returns `None` for terminal states.
pub fn choose_successor<S, V>(state: &S, search: &V) -> Result<Option<Choice<S>>, GameError>
where
    S: GameState,
    V: ValueSearch<S> + ?Sized,
{
    let player = state.player_to_move();
    let mut successors = state.successors();
    let mut bounds = Bounds::full();
    let mut best: Option<(usize, f32)> = None;

    for (index, successor) in successors.iter().enumerate() {
        let value = search.value(successor, bounds)?;
        trace!("Successor {} valued at {} for player {}", index, value, player);

        if bounds.improve(player, value) || best.is_none() {
            best = Some((index, value));
        }
    }

    Ok(best.map(|(index, value)| {
        debug!("Player {} chose successor {} with value {}", player, index, value);

        Choice {
            index,
            state: successors.swap_remove(index),
            value,
        }
    }))
}
