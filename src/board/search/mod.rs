//! Search-facing support: move ordering and the data a search driver
//! configures once and then reads at every node.
//!
//! - Move scoring (hash move, queen promotion, SEE-adjusted captures,
//!   killer, history) feeding `ScoredMoves::select_next`
//! - Killer and history tables
//! - Search parameters and the late move reduction table

mod constants;
mod move_order;
mod params;
mod tables;

pub use constants::{
    ATTACKER_VALUE_DIVISOR, CAPTURE_BASE_SCORE, KILLER_SCORE, LOSING_CAPTURE_PENALTY,
    QUEEN_PROMO_SCORE, TT_MOVE_SCORE,
};
pub use move_order::{score_moves, OrderingParams};
pub use params::{ReductionTable, SearchParams};
pub use tables::{HistoryTable, KillerTable, HISTORY_MAX};
