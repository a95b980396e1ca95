use criterion::{black_box, criterion_group, criterion_main, Criterion};

use connect_four_ai::ai::{get_move, hard_move, score, Difficulty, SeededRandom};
use connect_four_ai::game::{Board, Player};

const MIDGAME: [&str; 6] = [
    ".......",
    ".......",
    "...O...",
    "..XX...",
    "..OXO..",
    ".XOXOX.",
];

fn bench_evaluate(c: &mut Criterion) {
    let board = Board::from_rows(&MIDGAME).unwrap();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| score(black_box(&board), black_box(Player::One)))
    });
}

fn bench_hard_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("hard_move");
    group.sample_size(20);
    let opening = Board::new().drop(3, Player::One).unwrap();
    let midgame = Board::from_rows(&MIDGAME).unwrap();
    for depth in [3, 5] {
        group.bench_function(format!("opening_depth_{depth}"), |b| {
            b.iter(|| hard_move(black_box(&opening), Player::Two, depth))
        });
        group.bench_function(format!("midgame_depth_{depth}"), |b| {
            b.iter(|| hard_move(black_box(&midgame), Player::One, depth))
        });
    }
    group.finish();
}

fn bench_medium_move(c: &mut Criterion) {
    let board = Board::from_rows(&MIDGAME).unwrap();
    let mut rng = SeededRandom::new(0);
    c.bench_function("medium_move_midgame", |b| {
        b.iter(|| get_move(black_box(&board), Player::One, Difficulty::Medium, &mut rng))
    });
}

criterion_group!(benches, bench_evaluate, bench_hard_move, bench_medium_move);
criterion_main!(benches);
