use tictactoe::alpha_beta_searcher::{
    exhaustive_minimax, minimax, search_root_parallel, SearchStrategy,
};
use tictactoe::board::{Board, Player};
use tictactoe::tictactoe_position;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta from the empty board", |b| {
        b.iter(|| minimax(Board::new(), Player::O))
    });
    c.bench_function("exhaustive minimax from the empty board", |b| {
        b.iter(|| exhaustive_minimax(Board::new(), Player::O))
    });
    c.bench_function("parallel alpha beta from the empty board", |b| {
        b.iter(|| search_root_parallel(Board::new(), Player::O, SearchStrategy::AlphaBeta))
    });
    c.bench_function("alpha beta self-play", |b| b.iter(play_out_game));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn play_out_game() {
    let mut board = tictactoe_position! {
        ...
        .O.
        ...
    };
    let mut mover = Player::X;

    while let Some(best_move) = minimax(board, mover).best_move {
        board = best_move;
        mover = mover.opposite();
    }
}
