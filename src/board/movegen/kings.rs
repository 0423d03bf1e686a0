use super::super::attacks::KING_OFFSETS;
use super::super::{Color, Move, MoveList, Position, Promotion, Square, Wing};

impl Position {
    pub(super) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_step_moves(from, color, &KING_OFFSETS, moves);
    }

    /// Castling needs the right, an empty gap to the rook (three squares
    /// queenside, two kingside) and an unattacked transit square next to the
    /// king. Whether the king lands in check is left to legality filtering.
    pub(super) fn generate_castling_moves(&self, color: Color, moves: &mut MoveList) {
        let Some(king) = self.king_square(color) else {
            return;
        };
        let them = color.opponent();

        if self.castling_rights.has(color, Wing::Queenside) {
            if let (Some(transit), Some(dest), Some(rook_side)) =
                (king.offset(0, -1), king.offset(0, -2), king.offset(0, -3))
            {
                if self.is_empty(transit)
                    && self.is_empty(dest)
                    && self.is_empty(rook_side)
                    && !self.attacks_square(transit, them)
                {
                    moves.push(Move::pack(king, dest, Promotion::NoneOrKnight));
                }
            }
        }

        if self.castling_rights.has(color, Wing::Kingside) {
            if let (Some(transit), Some(dest)) = (king.offset(0, 1), king.offset(0, 2)) {
                if self.is_empty(transit) && self.is_empty(dest) && !self.attacks_square(transit, them)
                {
                    moves.push(Move::pack(king, dest, Promotion::NoneOrKnight));
                }
            }
        }
    }
}
