pub const BOARD_SIZE: usize = 3;
pub const FULL_BOARD_MASK: u16 = 0b111_111_111;

// Bit `row * 3 + column` is set for each occupied cell.
pub const WINNING_LINES: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];
