use crate::board::BOARD_SIZE;

/// Positional weights, indexed by `[row][col]`. Corners are worth the most;
/// the cells diagonally adjacent to a corner give the opponent access to it.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [ 99,  -8,   8,   6,   6,   8,  -8,  99],
    [ -8, -24,  -4,  -3,  -3,  -4, -24,  -8],
    [  8,  -4,   7,   4,   4,   7,  -4,   8],
    [  6,  -3,   4,   0,   0,   4,  -3,   6],
    [  6,  -3,   4,   0,   0,   4,  -3,   6],
    [  8,  -4,   7,   4,   4,   7,  -4,   8],
    [ -8, -24,  -4,  -3,  -3,  -4, -24,  -8],
    [ 99,  -8,   8,   6,   6,   8,  -8,  99],
];
