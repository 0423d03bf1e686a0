//! Attack detection on the mailbox board.
//!
//! Rays are walked square by square from the target outward; the first
//! occupied square on a ray is the only one that can attack along it.

use super::{Color, Piece, Position, Square};

/// Orthogonal rays first, then diagonals. `cheapest_attacker` relies on
/// this split.
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

#[inline]
fn cheaper(
    best: Option<(Piece, Square)>,
    piece: Piece,
    from: Square,
) -> Option<(Piece, Square)> {
    match best {
        Some((current, _)) if current.see_value() <= piece.see_value() => best,
        _ => Some((piece, from)),
    }
}

impl Position {
    /// Least valuable piece of `color` that could capture on `sq`, with the
    /// square it stands on.
    ///
    /// Among attackers of equal value the first one found is returned. A
    /// pawn is returned as soon as it is seen since nothing is cheaper.
    #[must_use]
    pub fn cheapest_attacker(&self, sq: Square, color: Color) -> Option<(Piece, Square)> {
        let mut best = None;

        for (i, &(d_rank, d_file)) in QUEEN_DIRECTIONS.iter().enumerate() {
            let diagonal = i >= 4;
            let mut current = sq;
            let mut adjacent = true;

            while let Some(next) = current.offset(d_rank, d_file) {
                current = next;
                let Some((owner, piece)) = self.piece_at(current) else {
                    adjacent = false;
                    continue;
                };
                if owner == color {
                    let reaches = match piece {
                        Piece::Pawn => {
                            // Pawns capture toward their own forward direction,
                            // so the attacker sits one rank behind the target.
                            adjacent && diagonal && d_rank == -color.pawn_direction()
                        }
                        Piece::King => adjacent,
                        Piece::Knight => false,
                        _ if diagonal => piece.attacks_diagonally(),
                        _ => piece.attacks_straight(),
                    };
                    if reaches {
                        if piece == Piece::Pawn {
                            return Some((Piece::Pawn, current));
                        }
                        best = cheaper(best, piece, current);
                    }
                }
                break;
            }
        }

        for &(d_rank, d_file) in &KNIGHT_OFFSETS {
            if let Some(from) = sq.offset(d_rank, d_file) {
                if self.piece_at(from) == Some((color, Piece::Knight)) {
                    best = cheaper(best, Piece::Knight, from);
                }
            }
        }

        best
    }

    /// True if any piece of `color` attacks `sq`.
    #[inline]
    #[must_use]
    pub fn attacks_square(&self, sq: Square, color: Color) -> bool {
        self.cheapest_attacker(sq, color).is_some()
    }

    /// True if `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.attacks_square(king, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_pawn_is_preferred_over_queen() {
        let position = Position::from_fen("4k3/8/8/8/8/3Q4/8/4K3 w - - 0 1");
        let target = sq("e4");
        assert_eq!(
            position.cheapest_attacker(target, Color::White),
            Some((Piece::Queen, sq("d3")))
        );
        let with_pawn = Position::from_fen("4k3/8/8/8/8/3Q1P2/8/4K3 w - - 0 1");
        assert_eq!(
            with_pawn.cheapest_attacker(target, Color::White),
            Some((Piece::Pawn, sq("f3")))
        );
    }

    #[test]
    fn test_pawn_direction_matters() {
        // A white pawn on d5 does not attack e4, a black one does.
        let white = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1");
        assert!(!white.attacks_square(sq("e4"), Color::White));
        let black = Position::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            black.cheapest_attacker(sq("e4"), Color::Black),
            Some((Piece::Pawn, sq("d5")))
        );
    }

    #[test]
    fn test_blocked_ray_is_abandoned() {
        // Rook on a4 is screened by the knight on c4.
        let position = Position::from_fen("4k3/8/8/8/R1n1p3/8/8/4K3 w - - 0 1");
        assert_eq!(position.cheapest_attacker(sq("e4"), Color::White), None);
        let open = Position::from_fen("4k3/8/8/8/R3p3/8/8/4K3 w - - 0 1");
        assert_eq!(
            open.cheapest_attacker(sq("e4"), Color::White),
            Some((Piece::Rook, sq("a4")))
        );
    }

    #[test]
    fn test_slider_geometry() {
        // Bishop on an orthogonal ray and rook on a diagonal do not attack.
        let position = Position::from_fen("4k3/8/8/8/B7/8/8/R3K3 w - - 0 1");
        assert!(!position.attacks_square(sq("e4"), Color::White));
        assert!(!position.attacks_square(sq("c3"), Color::White));
        assert!(position.attacks_square(sq("b3"), Color::White));
    }

    #[test]
    fn test_knight_beats_rook_and_king_only_adjacent() {
        let position = Position::from_fen("4k3/8/8/8/8/5N2/8/R3K3 w - - 0 1");
        assert_eq!(
            position.cheapest_attacker(sq("d2"), Color::White),
            Some((Piece::Knight, sq("f3")))
        );
        assert_eq!(
            position.cheapest_attacker(sq("e2"), Color::White),
            Some((Piece::King, sq("e1")))
        );
        assert!(!position.attacks_square(sq("e3"), Color::White));
    }

    #[test]
    fn test_is_in_check() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
        assert!(position.is_in_check(Color::White));
        assert!(!position.is_in_check(Color::Black));
    }
}
