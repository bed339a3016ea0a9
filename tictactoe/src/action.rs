use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::BOARD_SIZE;

/// Places the mover's mark on a cell. Rows and columns start at zero in the top left corner.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Action {
    pub row: usize,
    pub column: usize,
}

impl Action {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub(crate) fn bit(&self) -> u16 {
        1 << (self.row * BOARD_SIZE + self.column)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coordinates = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()?;

        match coordinates.as_slice() {
            [row, column] if *row < BOARD_SIZE && *column < BOARD_SIZE => {
                Ok(Action::new(*row, *column))
            }
            [_, _] => Err(anyhow!("Row and column must be between 0 and 2")),
            _ => Err(anyhow!("Expected a row and a column, got {:?}", s)),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        assert_eq!("1 2".parse::<Action>().unwrap(), Action::new(1, 2));
    }

    #[test]
    fn test_parse_comma_separated_with_padding() {
        assert_eq!("  0, 1 ".parse::<Action>().unwrap(), Action::new(0, 1));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!("3 0".parse::<Action>().is_err());
        assert!("0 3".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_wrong_number_of_coordinates() {
        assert!("1".parse::<Action>().is_err());
        assert!("1 2 0".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!("a b".parse::<Action>().is_err());
        assert!("-1 0".parse::<Action>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let action = Action::new(2, 0);
        assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
    }

    #[test]
    fn test_bit_is_row_major() {
        assert_eq!(Action::new(0, 0).bit(), 0b1);
        assert_eq!(Action::new(1, 0).bit(), 0b1000);
        assert_eq!(Action::new(2, 2).bit(), 0b1_0000_0000);
        assert_eq!(Action::from_index(5), Action::new(1, 2));
    }
}
