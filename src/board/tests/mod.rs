//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move counts and special moves (promotion, castling, en passant)
//! - `ordering.rs` - Scoring precedence and best-first selection
//! - `proptest.rs` - Property-based tests on random positions

mod movegen;

use super::{Move, Position, Promotion, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn quiet(from: &str, to: &str) -> Move {
    Move::pack(sq(from), sq(to), Promotion::NoneOrKnight)
}

pub(super) fn moves_from(position: &Position, in_check: bool, from: &str) -> Vec<Move> {
    let origin = sq(from);
    position
        .generate_moves(in_check)
        .iter()
        .copied()
        .filter(|mv| mv.from() == origin)
        .collect()
}
