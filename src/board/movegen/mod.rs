//! Pseudo-legal move generation.
//!
//! Moves that leave the mover's own king in check are emitted like any
//! other; filtering them is the search's job. Nothing here allocates:
//! the caller owns the `MoveList` and reuses it across nodes.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Color, Move, MoveList, Piece, Position, Promotion, Square};

impl Position {
    /// Fill `moves` with every pseudo-legal move for the side to move and
    /// return how many were written.
    ///
    /// The list is cleared first. Castling is not considered when
    /// `in_check` is set.
    pub fn generate_moves_into(&self, in_check: bool, moves: &mut MoveList) -> usize {
        moves.clear();
        let color = self.side_to_move;

        for from in Square::all() {
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }

            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, moves),
                Piece::Knight => self.generate_knight_moves(from, color, moves),
                Piece::Bishop => self.generate_slider_moves(from, color, &BISHOP_DIRECTIONS, moves),
                Piece::Rook => self.generate_slider_moves(from, color, &ROOK_DIRECTIONS, moves),
                Piece::Queen => self.generate_slider_moves(from, color, &QUEEN_DIRECTIONS, moves),
                Piece::King => self.generate_king_moves(from, color, moves),
            }
        }

        if !in_check {
            self.generate_castling_moves(color, moves);
        }

        moves.len()
    }

    /// Convenience wrapper around [`Position::generate_moves_into`].
    #[must_use]
    pub fn generate_moves(&self, in_check: bool) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves_into(in_check, &mut moves);
        moves
    }

    /// Single-step moves for knights and kings: any target not holding a
    /// piece of `color`.
    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(d_rank, d_file) in offsets {
            let Some(to) = from.offset(d_rank, d_file) else {
                continue;
            };
            match self.piece_at(to) {
                Some((owner, _)) if owner == color => {}
                _ => moves.push(Move::pack(from, to, Promotion::NoneOrKnight)),
            }
        }
    }
}
