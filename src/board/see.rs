//! Static Exchange Evaluation (SEE).
//!
//! Decides whether the capture sequence started by a move on its
//! destination square nets at least a given amount of material, without
//! searching. Each side recaptures with its cheapest attacker and may stop
//! whenever continuing would not help it.

use super::{Move, Piece, Position, Square};

impl Position {
    /// Returns true if playing `mv` and resolving the exchange on its
    /// destination square gains at least `threshold` for the side to move.
    ///
    /// Works on a private copy of the position; `self` is never modified.
    /// Sliding attackers revealed behind a capturing piece are picked up
    /// because the copy is updated after every capture.
    #[must_use]
    pub fn see(&self, mv: Move, threshold: i32) -> bool {
        let (from, to, _) = mv.unpack();
        let us = self.side_to_move;
        let them = us.opponent();

        let Some((_, mover)) = self.piece_at(from) else {
            return 0 >= threshold;
        };

        let mut scratch = *self;
        let mut gain = match self.piece_at(to) {
            Some((_, victim)) => victim.see_value(),
            None if self.is_en_passant(mv) => {
                scratch.clear_square(Square::new(from.rank(), to.file()));
                Piece::Pawn.see_value()
            }
            None => 0,
        };
        let mut risk = mover.see_value();

        if gain < threshold {
            return false;
        }

        scratch.clear_square(from);

        while gain - risk < threshold {
            let Some((piece, square)) = scratch.cheapest_attacker(to, them) else {
                return true;
            };
            gain -= risk;
            risk = piece.see_value();
            if gain + risk < threshold {
                return false;
            }
            scratch.clear_square(square);

            let Some((piece, square)) = scratch.cheapest_attacker(to, us) else {
                return false;
            };
            gain += risk;
            risk = piece.see_value();
            scratch.clear_square(square);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Promotion;

    fn mv(from: &str, to: &str) -> Move {
        Move::pack(
            from.parse().expect("valid square"),
            to.parse().expect("valid square"),
            Promotion::NoneOrKnight,
        )
    }

    #[test]
    fn test_see_undefended_pawn() {
        let position = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let capture = mv("e4", "d5");
        assert!(position.see(capture, 100));
        assert!(!position.see(capture, 101));
    }

    #[test]
    fn test_see_pawn_defended_by_rook_is_even() {
        let position = Position::from_fen("3rk3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let capture = mv("e4", "d5");
        assert!(position.see(capture, 0));
        assert!(!position.see(capture, 1));
    }

    #[test]
    fn test_see_backed_rook_wins_pawn() {
        // The rook on d1 makes recapturing with the d8 rook a losing trade.
        let position = Position::from_fen("3rk3/8/8/3p4/4P3/8/8/3RK3 w - - 0 1");
        let capture = mv("e4", "d5");
        assert!(position.see(capture, 100));
        assert!(position.see(capture, 50));
        assert!(!position.see(capture, 101));
    }

    #[test]
    fn test_see_queen_takes_defended_pawn() {
        let position = Position::from_fen("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1");
        let capture = mv("d1", "d5");
        assert!(!position.see(capture, 0));
        assert!(position.see(capture, -800));
        assert!(!position.see(capture, -799));
    }

    #[test]
    fn test_see_xray_recapture() {
        // Rxd5 Rxd5 Rxd5: the doubled white rooks win the exchange.
        let position = Position::from_fen("3rk3/8/8/3p4/8/8/3R4/3RK3 w - - 0 1");
        let capture = mv("d2", "d5");
        assert!(position.see(capture, 100));
        assert!(!position.see(capture, 101));
    }

    #[test]
    fn test_see_quiet_move_threshold() {
        let position = Position::new();
        let push = mv("e2", "e4");
        assert!(position.see(push, 0));
        assert!(!position.see(push, 1));
    }

    #[test]
    fn test_see_en_passant() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let capture = mv("e5", "d6");
        assert!(position.see(capture, 100));
        assert!(!position.see(capture, 101));
    }

    #[test]
    fn test_see_does_not_touch_position() {
        let position = Position::from_fen("3rk3/8/8/3p4/4P3/8/8/3RK3 w - - 0 1");
        let before = position;
        let _ = position.see(mv("e4", "d5"), 0);
        assert_eq!(position, before);
    }
}
