use super::super::{Color, Move, MoveList, Position, Promotion, Square};

#[inline]
fn push_pawn_move(from: Square, to: Square, promotes: bool, moves: &mut MoveList) {
    if promotes {
        for promo in Promotion::ALL {
            moves.push(Move::pack(from, to, promo));
        }
    } else {
        moves.push(Move::pack(from, to, Promotion::NoneOrKnight));
    }
}

impl Position {
    pub(super) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let Some(forward) = from.offset(dir, 0) else {
            return;
        };
        let promotes = forward.rank() == color.pawn_promotion_rank();

        if self.is_empty(forward) {
            push_pawn_move(from, forward, promotes, moves);
            if from.rank() == color.pawn_start_rank() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        moves.push(Move::pack(from, double, Promotion::NoneOrKnight));
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(dir, d_file) else {
                continue;
            };
            let takes = match self.piece_at(target) {
                Some((owner, _)) => owner != color,
                None => self.en_passant_target == Some(target),
            };
            if takes {
                push_pawn_move(from, target, promotes, moves);
            }
        }
    }
}
