use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Color, MoveList, Position, Square};

impl Position {
    pub(super) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS, moves);
    }
}
