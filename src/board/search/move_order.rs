//! Move scoring for best-first selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::{Move, Piece, Position, Promotion, ScoredMoves};
use super::constants::{
    ATTACKER_VALUE_DIVISOR, CAPTURE_BASE_SCORE, KILLER_SCORE, LOSING_CAPTURE_PENALTY,
    QUEEN_PROMO_SCORE, TT_MOVE_SCORE,
};
use super::tables::{HistoryTable, HISTORY_MAX};

/// Tunable ordering scores. Only the relative order of the classes is
/// relied on; see [`OrderingParams::preserves_precedence`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderingParams {
    pub tt_move: i32,
    pub queen_promotion: i32,
    pub capture_base: i32,
    pub attacker_divisor: i32,
    pub losing_capture_penalty: i32,
    pub killer: i32,
}

impl Default for OrderingParams {
    fn default() -> Self {
        OrderingParams {
            tt_move: TT_MOVE_SCORE,
            queen_promotion: QUEEN_PROMO_SCORE,
            capture_base: CAPTURE_BASE_SCORE,
            attacker_divisor: ATTACKER_VALUE_DIVISOR,
            losing_capture_penalty: LOSING_CAPTURE_PENALTY,
            killer: KILLER_SCORE,
        }
    }
}

impl OrderingParams {
    /// True if every score class stays strictly inside its band: the best
    /// capture is below a queen promotion, the worst capture is above a
    /// killer, and a killer is above any history value.
    #[must_use]
    pub fn preserves_precedence(&self) -> bool {
        if self.attacker_divisor <= 0 {
            return false;
        }
        let best_capture = self.capture_base + Piece::King.see_value();
        let worst_capture = self.capture_base
            - Piece::King.see_value() / self.attacker_divisor
            - self.losing_capture_penalty;
        self.tt_move > self.queen_promotion
            && self.queen_promotion > best_capture
            && worst_capture > self.killer
            && self.killer > HISTORY_MAX
    }
}

/// Piece removed by a capture, counting en passant.
#[inline]
fn captured_piece(position: &Position, mv: Move) -> Piece {
    position.piece_at(mv.to()).map_or(Piece::Pawn, |(_, piece)| piece)
}

/// Score every move in `scored` in one pass. First matching class wins:
///
/// 1. the hash move
/// 2. queen promotions
/// 3. captures, by victim value minus a fraction of the attacker value,
///    with a penalty when the exchange loses material
/// 4. the killer for this ply
/// 5. history for (piece, destination)
pub fn score_moves(
    position: &Position,
    history: &HistoryTable,
    killer: Option<Move>,
    tt_move: Option<Move>,
    params: &OrderingParams,
    scored: &mut ScoredMoves,
) {
    debug_assert!(params.preserves_precedence());
    let (moves, scores) = scored.moves_and_scores_mut();

    for (&mv, score) in moves.iter().zip(scores.iter_mut()) {
        *score = if Some(mv) == tt_move {
            params.tt_move
        } else if mv.promotion() == Promotion::Queen {
            params.queen_promotion
        } else if position.is_capture(mv) {
            let mover = position.piece_at(mv.from()).map_or(0, |(_, p)| p.see_value());
            let victim = captured_piece(position, mv).see_value();
            let penalty = if position.see(mv, 0) {
                0
            } else {
                params.losing_capture_penalty
            };
            params.capture_base + victim - mover / params.attacker_divisor - penalty
        } else if Some(mv) == killer {
            params.killer
        } else {
            position
                .piece_at(mv.from())
                .map_or(0, |(_, piece)| history.get(piece, mv.to()))
        };
    }
}
