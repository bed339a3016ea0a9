use std::fmt::{self, Display, Formatter};

use anyhow::{anyhow, Result};
use common::set_bits;
use engine::{GameError, Player};

use crate::{flips, legal_moves, Action, BOARD_SIZE};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub player_to_move: Player,
    /// Discs of each player, indexed by `Player::index`.
    pub boards: [u64; 2],
}

impl engine::GameState for GameState {
    type Action = Action;

    fn initial() -> Self {
        let start = |squares: [(usize, usize); 2]| {
            squares
                .iter()
                .fold(0, |board, &(row, column)| board | Action::new(row, column).bit())
        };

        GameState {
            player_to_move: Player::Zero,
            boards: [start([(3, 3), (4, 4)]), start([(3, 4), (4, 3)])],
        }
    }

    fn is_terminal(&self) -> bool {
        self.is_over()
    }

    fn terminal_value(&self) -> Result<f32, GameError> {
        if !self.is_over() {
            return Err(GameError::NonTerminalState);
        }

        let (zero, one) = self.disc_counts();
        Ok(match zero.cmp(&one) {
            std::cmp::Ordering::Greater => 1.0,
            std::cmp::Ordering::Less => -1.0,
            std::cmp::Ordering::Equal => 0.0,
        })
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    fn successors(&self) -> Vec<Self> {
        set_bits(self.moves_for(self.player_to_move))
            .map(|square| self.place(square))
            .collect()
    }

    fn is_legal_move(&self, action: &Action) -> bool {
        self.can_place(action)
    }

    fn take_action(&self, action: &Action) -> Result<Self, GameError> {
        if !self.can_place(action) {
            return Err(GameError::IllegalMove(action.to_string()));
        }

        Ok(self.place(action.bit()))
    }

    fn turn_instructions(&self) -> &'static str {
        "Enter row and column separated by spaces:"
    }
}

impl GameState {
    /// Builds a position from eight rows of `0`, `1` and empty (`-` or `.`) squares.
    ///
    /// If `player_to_move` has no legal move but the opponent does, the turn passes to the
    /// opponent.
    pub fn from_rows(rows: [&str; BOARD_SIZE], player_to_move: Player) -> Result<Self> {
        let mut boards = [0; 2];

        for (row, squares) in rows.iter().enumerate() {
            if squares.chars().count() != BOARD_SIZE {
                return Err(anyhow!("Row {} must have exactly 8 squares: {:?}", row, squares));
            }

            for (column, square) in squares.chars().enumerate() {
                let bit = Action::new(row, column).bit();
                match square {
                    '0' => boards[0] |= bit,
                    '1' => boards[1] |= bit,
                    '-' | '.' => {}
                    _ => return Err(anyhow!("Unexpected square {:?} in row {}", square, row)),
                }
            }
        }

        let state = Self {
            player_to_move,
            boards,
        };

        Ok(state.with_turn_after(player_to_move.opponent()))
    }

    /// Legal moves of `player` as a bitboard.
    pub fn moves_for(&self, player: Player) -> u64 {
        legal_moves(self.board(player), self.board(player.opponent()))
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        set_bits(self.moves_for(self.player_to_move))
            .map(Action::from_bit)
            .collect()
    }

    pub fn board(&self, player: Player) -> u64 {
        self.boards[player.index()]
    }

    /// Number of discs of player zero and player one.
    pub fn disc_counts(&self) -> (u32, u32) {
        (self.boards[0].count_ones(), self.boards[1].count_ones())
    }

    fn is_over(&self) -> bool {
        self.moves_for(Player::Zero) == 0 && self.moves_for(Player::One) == 0
    }

    fn can_place(&self, action: &Action) -> bool {
        action.row < BOARD_SIZE
            && action.column < BOARD_SIZE
            && self.moves_for(self.player_to_move) & action.bit() != 0
    }

    fn place(&self, square: u64) -> Self {
        let mover = self.player_to_move;
        let player = self.board(mover);
        let opponent = self.board(mover.opponent());
        let flipped = flips(square, player, opponent);

        let mut boards = self.boards;
        boards[mover.index()] = player | square | flipped;
        boards[mover.opponent().index()] = opponent & !flipped;

        let next = Self {
            player_to_move: mover,
            boards,
        };

        next.with_turn_after(mover)
    }

    /// The opponent of `mover` moves next if able. Otherwise `mover` moves again, and when neither
    /// can move the game is over with the turn given to the opponent.
    fn with_turn_after(mut self, mover: Player) -> Self {
        let opponent = mover.opponent();
        self.player_to_move = if self.moves_for(opponent) == 0 && self.moves_for(mover) != 0 {
            mover
        } else {
            opponent
        };

        self
    }

    fn square(&self, row: usize, column: usize) -> char {
        let bit = Action::new(row, column).bit();
        if self.boards[0] & bit != 0 {
            '0'
        } else if self.boards[1] & bit != 0 {
            '1'
        } else {
            '-'
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let columns = (0..BOARD_SIZE).map(|c| c.to_string()).collect::<Vec<_>>();
        let rule = "_".repeat(BOARD_SIZE * 2 - 1);

        writeln!(f, "   {}", columns.join(" "))?;
        writeln!(f, "   {}", rule)?;

        for row in 0..BOARD_SIZE {
            let squares = (0..BOARD_SIZE)
                .map(|column| self.square(row, column).to_string())
                .collect::<Vec<_>>();

            writeln!(f, "{} |{}|", row, squares.join(" "))?;
        }

        writeln!(f, "   {}", rule)
    }
}
