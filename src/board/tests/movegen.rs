//! Move generation tests.

use super::{moves_from, quiet, sq};
use crate::board::{Move, MoveList, Position, Promotion, MAX_MOVES};

#[test]
fn test_start_position_has_twenty_moves() {
    let position = Position::new();
    let mut moves = MoveList::new();
    assert_eq!(position.generate_moves_into(false, &mut moves), 20);
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_black_reply_has_twenty_moves() {
    let position =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    assert_eq!(position.generate_moves(false).len(), 20);
}

#[test]
fn test_buffer_is_reset_between_calls() {
    let position = Position::new();
    let mut moves = MoveList::new();
    position.generate_moves_into(false, &mut moves);
    let written = position.generate_moves_into(false, &mut moves);
    assert_eq!(written, 20);
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_maximum_move_position_fits() {
    let position = Position::from_fen("R6R/3Q4/1Q4Q1/4Q3/2Q4Q/Q4Q2/pp1Q4/kBNN1KB1 w - - 0 1");
    let moves = position.generate_moves(false);
    assert_eq!(moves.len(), 218);
    assert!(moves.len() < MAX_MOVES);
}

#[test]
fn test_push_promotion_emits_four_tags() {
    let position = Position::from_fen("7k/4P3/8/8/8/8/8/K7 w - - 0 1");
    let moves = moves_from(&position, false, "e7");
    assert_eq!(moves.len(), 4);
    for promo in Promotion::ALL {
        assert!(moves.contains(&Move::pack(sq("e7"), sq("e8"), promo)));
    }
}

#[test]
fn test_capture_promotion_emits_four_tags() {
    let position = Position::from_fen("3r3k/4P3/8/8/8/8/8/K7 w - - 0 1");
    let moves = moves_from(&position, false, "e7");
    assert_eq!(moves.len(), 8);
    for promo in Promotion::ALL {
        assert!(moves.contains(&Move::pack(sq("e7"), sq("d8"), promo)));
    }
}

#[test]
fn test_black_promotion() {
    let position = Position::from_fen("k7/8/8/8/8/8/3p4/7K b - - 0 1");
    let moves = moves_from(&position, false, "d2");
    assert_eq!(moves.len(), 4);
    assert!(moves.contains(&Move::pack(sq("d2"), sq("d1"), Promotion::Queen)));
}

#[test]
fn test_double_push_needs_both_squares() {
    let blocked_far = Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    assert_eq!(moves_from(&blocked_far, false, "e2"), vec![quiet("e2", "e3")]);

    let blocked_near = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(moves_from(&blocked_near, false, "e2").is_empty());

    let open = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    let moves = moves_from(&open, false, "e2");
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&quiet("e2", "e4")));
}

#[test]
fn test_no_double_push_off_start_rank() {
    let position = Position::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
    assert_eq!(moves_from(&position, false, "e3"), vec![quiet("e3", "e4")]);
}

#[test]
fn test_en_passant_only_with_target() {
    let with_target = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    assert!(moves_from(&with_target, false, "e5").contains(&quiet("e5", "d6")));

    let without_target = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2");
    assert!(!moves_from(&without_target, false, "e5").contains(&quiet("e5", "d6")));
}

#[test]
fn test_slider_stops_at_enemy_and_friend() {
    let capture = Position::from_fen("4k3/8/8/8/8/8/8/R2pK3 w - - 0 1");
    let rook = moves_from(&capture, false, "a1");
    assert_eq!(rook.len(), 10);
    assert!(rook.contains(&quiet("a1", "d1")));

    let friendly = Position::from_fen("4k3/8/8/8/8/8/P7/R3K3 w - - 0 1");
    let rook = moves_from(&friendly, false, "a1");
    assert_eq!(rook.len(), 3);
    assert!(!rook.contains(&quiet("a1", "e1")));
}

#[test]
fn test_knight_in_corner() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    let moves = moves_from(&position, false, "a1");
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&quiet("a1", "b3")));
    assert!(moves.contains(&quiet("a1", "c2")));
}

#[test]
fn test_king_steps_skip_own_pieces() {
    let position = Position::from_fen("4k3/8/8/8/8/8/3PP3/3QK3 w - - 0 1");
    let moves = moves_from(&position, false, "e1");
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&quiet("e1", "f1")));
    assert!(moves.contains(&quiet("e1", "f2")));
}

const CASTLE_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_castling_both_wings() {
    let position = Position::from_fen(CASTLE_FEN);
    let moves = position.generate_moves(false);
    assert!(moves.contains(quiet("e1", "g1")));
    assert!(moves.contains(quiet("e1", "c1")));
    assert!(position.is_castling(quiet("e1", "g1")));
    assert!(!position.is_castling(quiet("e1", "f1")));
}

#[test]
fn test_castling_skipped_in_check() {
    let position = Position::from_fen(CASTLE_FEN);
    let free = position.generate_moves(false);
    let checked = position.generate_moves(true);
    assert!(!checked.contains(quiet("e1", "g1")));
    assert!(!checked.contains(quiet("e1", "c1")));
    assert_eq!(checked.len() + 2, free.len());
}

#[test]
fn test_castling_for_black() {
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b kq - 0 1");
    let moves = position.generate_moves(false);
    assert!(moves.contains(quiet("e8", "g8")));
    assert!(moves.contains(quiet("e8", "c8")));
    assert!(!moves.contains(quiet("e1", "g1")));
}

#[test]
fn test_castling_needs_rights() {
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1");
    let moves = position.generate_moves(false);
    assert!(!moves.contains(quiet("e1", "g1")));
    assert!(moves.contains(quiet("e1", "c1")));
}

#[test]
fn test_castling_blocked_by_attacked_transit() {
    // The rook on f8 covers f1.
    let position = Position::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = position.generate_moves(false);
    assert!(!moves.contains(quiet("e1", "g1")));
    assert!(moves.contains(quiet("e1", "c1")));
}

#[test]
fn test_castling_ignores_attacked_destination() {
    // g1 is covered by the rook on g8, f1 is not.
    let position = Position::from_fen("r3k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(position.generate_moves(false).contains(quiet("e1", "g1")));

    // On the queenside only d1 has to be safe; b1 may be attacked.
    let position = Position::from_fen("1r2k2r/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(position.generate_moves(false).contains(quiet("e1", "c1")));
}

#[test]
fn test_queenside_castling_needs_knight_square_empty() {
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    let moves = position.generate_moves(false);
    assert!(!moves.contains(quiet("e1", "c1")));
    assert!(moves.contains(quiet("e1", "g1")));
}

#[test]
fn test_pseudo_legal_moves_into_check_are_kept() {
    // The king may step onto e2, which the rook on e8 attacks.
    let position = Position::from_fen("4r2k/8/8/8/8/8/8/3K4 w - - 0 1");
    assert!(position.generate_moves(false).contains(quiet("d1", "e2")));
}
