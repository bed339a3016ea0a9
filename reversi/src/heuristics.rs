use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use common::div_or_zero;
use engine::GameState as GameStateTrait;
use engine::Heuristic;

use crate::{GameState, CORNERS};

/// Disc difference as a share of all discs on the board.
pub fn piece_count(state: &GameState) -> f32 {
    let (zero, one) = state.disc_counts();
    let (zero, one) = (zero as f32, one as f32);

    div_or_zero(zero - one, zero + one)
}

/// Like `piece_count`, but a player's discs count double for every corner they own, and discs on
/// the squares next to an empty corner (which hand that corner to the opponent) are discounted.
pub fn corners(state: &GameState) -> f32 {
    let (zero, one) = state.disc_counts();
    let mut scores = [zero as f32, one as f32];

    for corner in CORNERS.iter() {
        if let Some(owner) = owner_of(state, corner.square) {
            scores[owner] *= 2.0;
            continue;
        }

        if let Some(owner) = owner_of(state, corner.x_square) {
            scores[owner] *= 0.75;
        }

        for c_square in corner.c_squares {
            if let Some(owner) = owner_of(state, c_square) {
                scores[owner] *= 0.9;
            }
        }
    }

    div_or_zero(scores[0] - scores[1], scores[0] + scores[1])
}

fn owner_of(state: &GameState, square: u64) -> Option<usize> {
    state.boards.iter().position(|board| board & square != 0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeuristicKind {
    #[default]
    PieceCount,
    Corners,
}

impl Heuristic<GameState> for HeuristicKind {
    /// Finished games are scored with their exact value.
    fn evaluate(&self, state: &GameState) -> f32 {
        if let Ok(value) = state.terminal_value() {
            return value;
        }

        match self {
            HeuristicKind::PieceCount => piece_count(state),
            HeuristicKind::Corners => corners(state),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "piece-count" | "piece_count" | "0" => Ok(HeuristicKind::PieceCount),
            "corners" | "1" => Ok(HeuristicKind::Corners),
            _ => Err(anyhow!(
                "Unknown heuristic {:?}, expected \"piece-count\" or \"corners\"",
                s
            )),
        }
    }
}

impl Display for HeuristicKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            HeuristicKind::PieceCount => write!(f, "piece-count"),
            HeuristicKind::Corners => write!(f, "corners"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;
    use assert_approx_eq::assert_approx_eq;
    use engine::Player;

    const EMPTY: &str = "--------";

    #[test]
    fn test_initial_position_is_even() {
        let state = GameState::initial();
        assert_eq!(piece_count(&state), 0.0);
        assert_eq!(corners(&state), 0.0);
    }

    #[test]
    fn test_piece_count_after_opening() {
        let state = GameState::initial().take_action(&Action::new(2, 4)).unwrap();
        assert_approx_eq!(piece_count(&state), 0.6);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let state = GameState::from_rows([EMPTY; 8], Player::Zero).unwrap();
        assert_eq!(piece_count(&state), 0.0);
        assert_eq!(corners(&state), 0.0);
    }

    #[test]
    fn test_corners_doubles_corner_owner_and_discounts_x_square() {
        let state = GameState::from_rows(
            ["0-------", EMPTY, EMPTY, "---0----", "---11---", EMPTY, "------1-", EMPTY],
            Player::One,
        )
        .unwrap();

        // Zero: 2 discs doubled for the corner. One: 3 discs, next to the empty bottom right
        // corner.
        assert_approx_eq!(corners(&state), (4.0 - 2.25) / 6.25);
        assert_approx_eq!(piece_count(&state), -0.2);
    }

    #[test]
    fn test_corners_discounts_each_c_square() {
        let state = GameState::from_rows(
            ["-0------", "0-------", EMPTY, "---01---", "---10---", EMPTY, EMPTY, EMPTY],
            Player::Zero,
        )
        .unwrap();

        let zero = 4.0 * 0.9 * 0.9;
        assert_approx_eq!(corners(&state), (zero - 2.0) / (zero + 2.0));
    }

    #[test]
    fn test_kind_scores_finished_games_exactly() {
        let state = GameState::from_rows(
            ["0-1-----", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "-----1-1"],
            Player::Zero,
        )
        .unwrap();

        assert!(state.is_terminal());
        assert_approx_eq!(piece_count(&state), -0.5);
        assert_eq!(HeuristicKind::PieceCount.evaluate(&state), -1.0);
        assert_eq!(HeuristicKind::Corners.evaluate(&state), -1.0);
    }

    #[test]
    fn test_kind_delegates_on_unfinished_games() {
        let state = GameState::initial().take_action(&Action::new(2, 4)).unwrap();
        assert_approx_eq!(HeuristicKind::PieceCount.evaluate(&state), 0.6);
        assert_approx_eq!(HeuristicKind::Corners.evaluate(&state), corners(&state));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("piece-count".parse::<HeuristicKind>().unwrap(), HeuristicKind::PieceCount);
        assert_eq!("Corners".parse::<HeuristicKind>().unwrap(), HeuristicKind::Corners);
        assert_eq!("1".parse::<HeuristicKind>().unwrap(), HeuristicKind::Corners);
        assert!("mobility".parse::<HeuristicKind>().is_err());
    }

    #[test]
    fn test_kind_display_parses_back() {
        for kind in [HeuristicKind::PieceCount, HeuristicKind::Corners] {
            assert_eq!(kind.to_string().parse::<HeuristicKind>().unwrap(), kind);
        }
    }
}
