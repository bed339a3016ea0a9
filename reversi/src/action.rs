use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use common::single_bit_index_u64;

use crate::BOARD_SIZE;

/// Places a disc for the mover. `row` 0 is the top row and `column` 0 the left column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Action {
    pub row: usize,
    pub column: usize,
}

impl Action {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub(crate) fn bit(&self) -> u64 {
        1 << (self.row * BOARD_SIZE + self.column)
    }

    pub(crate) fn from_bit(bit: u64) -> Self {
        let index = single_bit_index_u64(bit);
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        let (row, column) = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(column), None) => (row, column),
            _ => return Err(anyhow!("Expected a row and a column, got {:?}", s)),
        };

        let row = row.parse().with_context(|| format!("Invalid row {:?}", row))?;
        let column = column
            .parse()
            .with_context(|| format!("Invalid column {:?}", column))?;

        let action = Action::new(row, column);
        if !action.is_on_board() {
            return Err(anyhow!("Row and column must be between 0 and {}", BOARD_SIZE - 1));
        }

        Ok(action)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.column)
    }
}
