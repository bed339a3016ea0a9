use crate::DIRECTIONS;

fn shift(bits: u64, offset: i32, mask: u64) -> u64 {
    let shifted = if offset > 0 {
        bits << offset
    } else {
        bits >> -offset
    };

    shifted & mask
}

/// Empty squares where `player` would bracket at least one run of `opponent` discs.
pub fn legal_moves(player: u64, opponent: u64) -> u64 {
    let empty = !(player | opponent);
    let mut moves = 0;

    for (offset, mask) in DIRECTIONS {
        let mut run = shift(player, offset, mask) & opponent;
        while run != 0 {
            let next = shift(run, offset, mask);
            moves |= next & empty;
            run = next & opponent;
        }
    }

    moves
}

/// The `opponent` discs flipped when `player` places a disc on `square`.
pub fn flips(square: u64, player: u64, opponent: u64) -> u64 {
    let mut flipped = 0;

    for (offset, mask) in DIRECTIONS {
        let mut run = 0;
        let mut cursor = shift(square, offset, mask);
        while cursor & opponent != 0 {
            run |= cursor;
            cursor = shift(cursor, offset, mask);
        }

        if cursor & player != 0 {
            flipped |= run;
        }
    }

    flipped
}
