//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//!
//! let moves = Position::new().generate_moves(false);
//! assert_eq!(moves.len(), 20);
//! ```

pub use super::search::{score_moves, HistoryTable, KillerTable, OrderingParams};
pub use super::{
    Color, FenError, Move, MoveList, Piece, Position, PositionBuilder, Promotion, ScoredMoves,
    Square,
};
