use std::fmt::{self, Display, Formatter};

/// One of the two players of a zero-sum game. `Zero` always makes the first move of a game and
/// values are always expressed from its perspective, so it is the maximizing player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    pub fn index(&self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::Zero),
            1 => Some(Player::One),
            _ => None,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    pub fn is_maximizing(&self) -> bool {
        matches!(self, Player::Zero)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
