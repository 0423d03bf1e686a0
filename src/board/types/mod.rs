//! Core chess types.
//!
//! This module contains the fundamental types used by the move generator:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square representation (u8)
//! - `Move`, `MoveList` and `ScoredMoves` - move representation and buffers
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, Wing};
pub use moves::{select_next, Move, MoveList, Promotion, ScoredMoves, MAX_MOVES, MAX_PLY};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
pub(crate) use moves::EMPTY_MOVE;
