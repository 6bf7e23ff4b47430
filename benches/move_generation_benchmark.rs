use reversi::move_generator::{apply_move, generate_moves};
use reversi::prelude::*;
use reversi::reversi_position;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("generate midgame moves", |b| {
        b.iter(|| generate_moves(&board, Player::Black))
    });
    c.bench_function("apply every midgame move", |b| {
        b.iter(|| apply_all_moves(&board))
    });
}

fn midgame_board() -> Board {
    reversi_position! {
        ........
        ..O.....
        ..OOX...
        .XXOOO..
        ..XOXO..
        ...XOX..
        ....O...
        ........
    }
}

fn apply_all_moves(board: &Board) {
    for reversi_move in generate_moves(board, Player::Black) {
        apply_move(board, Player::Black, &reversi_move).unwrap();
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
