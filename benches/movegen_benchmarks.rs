//! Benchmarks for move generation, exchange evaluation and ordering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_movegen::board::search::{score_moves, HistoryTable, OrderingParams};
use chess_movegen::board::{MoveList, Position, ScoredMoves};

const POSITIONS: [(&str, &str); 3] = [
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "middlegame",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
];

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in POSITIONS {
        let position = Position::from_fen(fen);
        let mut moves = MoveList::new();
        group.bench_with_input(BenchmarkId::new("generate", name), &position, |b, position| {
            b.iter(|| black_box(position.generate_moves_into(false, &mut moves)))
        });
    }

    group.finish();
}

fn bench_see(c: &mut Criterion) {
    let mut group = c.benchmark_group("see");

    for (name, fen) in POSITIONS {
        let position = Position::from_fen(fen);
        let captures: Vec<_> = position
            .generate_moves(false)
            .iter()
            .copied()
            .filter(|&mv| position.is_capture(mv))
            .collect();
        group.bench_with_input(BenchmarkId::new("captures", name), &captures, |b, captures| {
            b.iter(|| {
                captures
                    .iter()
                    .filter(|&&mv| position.see(mv, black_box(0)))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering");
    let history = HistoryTable::new();
    let params = OrderingParams::default();

    for (name, fen) in POSITIONS {
        let position = Position::from_fen(fen);
        let moves = position.generate_moves(false);
        group.bench_with_input(BenchmarkId::new("score_select", name), &moves, |b, moves| {
            b.iter(|| {
                let mut scored = ScoredMoves::from_moves(moves.clone());
                score_moves(&position, &history, None, None, &params, &mut scored);
                let mut idx = 0;
                while scored.select_next(idx).is_some() {
                    idx += 1;
                }
                black_box(idx)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_see, bench_ordering);
criterion_main!(benches);
