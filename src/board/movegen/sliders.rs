use super::super::{Color, Move, MoveList, Position, Promotion, Square};

impl Position {
    /// Walk each ray: quiet moves while empty, one capture on an enemy piece,
    /// nothing once a friendly piece is reached.
    pub(super) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(d_rank, d_file) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_rank, d_file) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::pack(from, to, Promotion::NoneOrKnight));
                        current = to;
                    }
                    Some((owner, _)) => {
                        if owner != color {
                            moves.push(Move::pack(from, to, Promotion::NoneOrKnight));
                        }
                        break;
                    }
                }
            }
        }
    }
}
