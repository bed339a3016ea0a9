pub const BOARD_SIZE: usize = 8;

pub const NOT_FIRST_COLUMN: u64 = 0xFEFE_FEFE_FEFE_FEFE;
pub const NOT_LAST_COLUMN: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Bit offsets of the eight neighbours of a square, with the mask removing bits that wrapped around
/// the edge of the board. Bit `row * 8 + column` represents a square.
pub const DIRECTIONS: [(i32, u64); 8] = [
    (-8, u64::MAX),
    (8, u64::MAX),
    (1, NOT_FIRST_COLUMN),
    (-1, NOT_LAST_COLUMN),
    (-7, NOT_FIRST_COLUMN),
    (9, NOT_FIRST_COLUMN),
    (-9, NOT_LAST_COLUMN),
    (7, NOT_LAST_COLUMN),
];

pub const CORNERS: [Corner; 4] = [
    Corner::new((0, 0), (1, 1), [(0, 1), (1, 0)]),
    Corner::new((7, 7), (6, 6), [(7, 6), (6, 7)]),
    Corner::new((0, 7), (1, 6), [(0, 6), (1, 7)]),
    Corner::new((7, 0), (6, 1), [(7, 1), (6, 0)]),
];

/// A corner with its diagonal neighbour and its two edge neighbours, all as single-bit masks.
pub struct Corner {
    pub square: u64,
    pub x_square: u64,
    pub c_squares: [u64; 2],
}

impl Corner {
    const fn new(
        square: (usize, usize),
        x_square: (usize, usize),
        c_squares: [(usize, usize); 2],
    ) -> Self {
        Self {
            square: bit(square),
            x_square: bit(x_square),
            c_squares: [bit(c_squares[0]), bit(c_squares[1])],
        }
    }
}

const fn bit((row, column): (usize, usize)) -> u64 {
    1 << (row * BOARD_SIZE + column)
}
