//! Move ordering constants.
//!
//! Higher scores are tried earlier. Ordered: hash move > queen promotion >
//! captures > killer > history.

/// Hash move (from transposition table) - highest priority
pub const TT_MOVE_SCORE: i32 = 10_000_000;

/// Any move carrying the queen promotion tag
pub const QUEEN_PROMO_SCORE: i32 = 5_000_000;

/// Base added to every capture before victim/attacker adjustment
pub const CAPTURE_BASE_SCORE: i32 = 2_000_000;

/// Subtracted from captures that lose material by static exchange
pub const LOSING_CAPTURE_PENALTY: i32 = 5_000;

/// Attacker value is divided by this before being subtracted
pub const ATTACKER_VALUE_DIVISOR: i32 = 20;

/// Quiet move that caused a cutoff at the same ply
pub const KILLER_SCORE: i32 = 100_000;
