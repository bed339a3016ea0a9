use std::fmt::{self, Display, Formatter};

use anyhow::{anyhow, Result};
use engine::{GameError, Player};

use crate::{Action, BOARD_SIZE, FULL_BOARD_MASK, WINNING_LINES};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub player_to_move: Player,
    pub x_board: u16,
    pub o_board: u16,
}

impl engine::GameState for GameState {
    type Action = Action;

    fn initial() -> Self {
        GameState {
            player_to_move: Player::Zero,
            x_board: 0,
            o_board: 0,
        }
    }

    fn is_terminal(&self) -> bool {
        self.is_over()
    }

    fn terminal_value(&self) -> Result<f32, GameError> {
        if self.has_line(self.x_board) {
            Ok(1.0)
        } else if self.has_line(self.o_board) {
            Ok(-1.0)
        } else if self.is_full() {
            Ok(0.0)
        } else {
            Err(GameError::NonTerminalState)
        }
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    fn successors(&self) -> Vec<Self> {
        if self.is_over() {
            return Vec::new();
        }

        self.empty_cells().map(|action| self.place(&action)).collect()
    }

    fn is_legal_move(&self, action: &Action) -> bool {
        self.can_place(action)
    }

    fn take_action(&self, action: &Action) -> Result<Self, GameError> {
        if !self.can_place(action) {
            return Err(GameError::IllegalMove(action.to_string()));
        }

        Ok(self.place(action))
    }

    fn turn_instructions(&self) -> &'static str {
        "Enter row and column separated by spaces (top row is 0, left column is 0):"
    }
}

impl GameState {
    /// Builds a position from three rows of `X`, `O` and blank (space, `.` or `-`) cells.
    pub fn from_rows(rows: [&str; BOARD_SIZE], player_to_move: Player) -> Result<Self> {
        let mut x_board = 0;
        let mut o_board = 0;

        for (row, cells) in rows.iter().enumerate() {
            if cells.chars().count() != BOARD_SIZE {
                return Err(anyhow!("Row {} must have exactly 3 cells: {:?}", row, cells));
            }

            for (column, cell) in cells.chars().enumerate() {
                let bit = Action::new(row, column).bit();
                match cell {
                    'X' | 'x' => x_board |= bit,
                    'O' | 'o' => o_board |= bit,
                    ' ' | '.' | '-' => {}
                    _ => return Err(anyhow!("Unexpected cell {:?} in row {}", cell, row)),
                }
            }
        }

        Ok(Self {
            player_to_move,
            x_board,
            o_board,
        })
    }

    fn is_over(&self) -> bool {
        self.has_line(self.x_board) || self.has_line(self.o_board) || self.is_full()
    }

    fn can_place(&self, action: &Action) -> bool {
        action.row < BOARD_SIZE
            && action.column < BOARD_SIZE
            && self.occupied() & action.bit() == 0
            && !self.is_over()
    }

    fn place(&self, action: &Action) -> Self {
        let bit = action.bit();
        let (x_board, o_board) = match self.player_to_move {
            Player::Zero => (self.x_board | bit, self.o_board),
            Player::One => (self.x_board, self.o_board | bit),
        };

        Self {
            player_to_move: self.player_to_move.opponent(),
            x_board,
            o_board,
        }
    }

    fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Action::from_index)
            .filter(move |action| self.occupied() & action.bit() == 0)
    }

    fn occupied(&self) -> u16 {
        self.x_board | self.o_board
    }

    fn is_full(&self) -> bool {
        self.occupied() & FULL_BOARD_MASK == FULL_BOARD_MASK
    }

    fn has_line(&self, board: u16) -> bool {
        WINNING_LINES.iter().any(|line| board & line == *line)
    }

    fn cell(&self, row: usize, column: usize) -> char {
        let bit = Action::new(row, column).bit();
        if self.x_board & bit != 0 {
            'X'
        } else if self.o_board & bit != 0 {
            'O'
        } else {
            ' '
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let cells = (0..BOARD_SIZE)
                .map(|column| self.cell(row, column).to_string())
                .collect::<Vec<_>>();

            writeln!(f, "{}", cells.join(" | "))?;

            if row < BOARD_SIZE - 1 {
                writeln!(f, "--+---+--")?;
            }
        }

        Ok(())
    }
}
