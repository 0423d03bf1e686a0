//! Board snapshot, pseudo-legal move generation, static exchange evaluation
//! and move ordering.
//!
//! # Example
//! ```
//! use chess_movegen::board::search::{score_moves, HistoryTable, OrderingParams};
//! use chess_movegen::board::{Position, ScoredMoves};
//!
//! let position = Position::new();
//! let in_check = position.is_in_check(position.side_to_move());
//! let mut scored = ScoredMoves::from_moves(position.generate_moves(in_check));
//! score_moves(
//!     &position,
//!     &HistoryTable::new(),
//!     None,
//!     None,
//!     &OrderingParams::default(),
//!     &mut scored,
//! );
//! let mut idx = 0;
//! while let Some(mv) = scored.select_next(idx) {
//!     println!("{mv}");
//!     idx += 1;
//! }
//! assert_eq!(idx, 20);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
pub mod search;
mod see;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, SquareError};
pub use state::Position;
pub use types::{
    select_next, CastlingRights, Color, Move, MoveList, Piece, Promotion, ScoredMoves, Square,
    Wing, MAX_MOVES, MAX_PLY,
};

pub(crate) use types::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, EMPTY_MOVE};
