//! Move types, move lists and best-first move selection.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

const FROM_MASK: u16 = 0x3F;
const TO_SHIFT: u16 = 6;
const PROMO_SHIFT: u16 = 12;
const PROMO_MASK: u16 = 0x3;

/// Promotion tag carried in the top bits of a `Move`.
///
/// A knight promotion has no tag of its own: a pawn landing on its last rank
/// with `NoneOrKnight` becomes a knight. Use `Position::promotion_piece` to
/// resolve the tag against the position the move was generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Promotion {
    NoneOrKnight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl Promotion {
    /// Tags generated for every pawn move onto the last rank, in emission order.
    pub const ALL: [Promotion; 4] = [
        Promotion::NoneOrKnight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        match bits & PROMO_MASK {
            0 => Promotion::NoneOrKnight,
            1 => Promotion::Bishop,
            2 => Promotion::Rook,
            _ => Promotion::Queen,
        }
    }

    /// The piece this tag promotes to, given that the move is a promotion.
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        match self {
            Promotion::NoneOrKnight => Piece::Knight,
            Promotion::Bishop => Piece::Bishop,
            Promotion::Rook => Piece::Rook,
            Promotion::Queen => Piece::Queen,
        }
    }
}

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-13: promotion tag
///
/// A move does not know which position it belongs to. Captures, castling
/// and en passant are recognised by looking at the position it was
/// generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Create a null/empty move (a1a1, never generated)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    /// Pack from, to and promotion tag into one value.
    #[inline]
    #[must_use]
    pub const fn pack(from: Square, to: Square, promo: Promotion) -> Self {
        let from_idx = from.index() as u16;
        let to_idx = to.index() as u16;
        Move(from_idx | (to_idx << TO_SHIFT) | ((promo as u16) << PROMO_SHIFT))
    }

    /// Inverse of [`Move::pack`].
    #[inline]
    #[must_use]
    pub const fn unpack(self) -> (Square, Square, Promotion) {
        (self.from(), self.to(), self.promotion())
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & FROM_MASK) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> TO_SHIFT) & FROM_MASK) as usize)
    }

    /// Get the promotion tag
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Promotion {
        Promotion::from_bits(self.0 >> PROMO_SHIFT)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Get the raw 16-bit value (for hashing/storage)
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Create from raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if self.promotion() != Promotion::NoneOrKnight {
            write!(f, " {:?}", self.promotion())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    /// Coordinate notation. A knight promotion prints without a suffix,
    /// since the tag alone cannot tell it apart from a plain move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if self.promotion() != Promotion::NoneOrKnight {
            write!(f, "{}", self.promotion().piece().to_char())?;
        }
        Ok(())
    }
}

/// Capacity of every move buffer; the known maximum for a reachable
/// position is 218.
pub const MAX_MOVES: usize = 256;
pub const MAX_PLY: usize = 128;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "MoveList overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// Find the best-scoring move in `start..` and swap it (and its score) into
/// `start`, returning it.
///
/// Incremental selection sort: O(n - start) per call, so a search that cuts
/// off after a few moves never pays for ordering the rest. Ties keep the
/// earliest index.
///
/// # Panics
/// Panics if `start` is out of range or the slices differ in length.
#[inline]
pub fn select_next(moves: &mut [Move], scores: &mut [i32], start: usize) -> Move {
    debug_assert_eq!(moves.len(), scores.len());
    let mut best_idx = start;
    let mut best_score = scores[start];
    for i in (start + 1)..scores.len() {
        if scores[i] > best_score {
            best_score = scores[i];
            best_idx = i;
        }
    }

    if best_idx != start {
        moves.swap(start, best_idx);
        scores.swap(start, best_idx);
    }

    moves[start]
}

/// Moves paired with an index-aligned score array.
#[derive(Clone, Debug)]
pub struct ScoredMoves {
    moves: MoveList,
    scores: [i32; MAX_MOVES],
}

impl ScoredMoves {
    /// Create an empty scored set.
    #[must_use]
    pub fn new() -> Self {
        ScoredMoves {
            moves: MoveList::new(),
            scores: [0; MAX_MOVES],
        }
    }

    /// Take ownership of a generated list; scores start at zero.
    #[must_use]
    pub fn from_moves(moves: MoveList) -> Self {
        ScoredMoves {
            moves,
            scores: [0; MAX_MOVES],
        }
    }

    /// Mutable access to the underlying list, for the generator to refill.
    pub fn moves_mut(&mut self) -> &mut MoveList {
        &mut self.moves
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        self.moves.as_slice()
    }

    #[must_use]
    pub fn scores(&self) -> &[i32] {
        &self.scores[..self.moves.len()]
    }

    /// Split into the move slice and the matching mutable score slice.
    pub(crate) fn moves_and_scores_mut(&mut self) -> (&[Move], &mut [i32]) {
        let len = self.moves.len();
        (self.moves.as_slice(), &mut self.scores[..len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Best remaining move from `start`, or `None` once the set is exhausted.
    #[inline]
    pub fn select_next(&mut self, start: usize) -> Option<Move> {
        let len = self.moves.len();
        if start >= len {
            return None;
        }
        Some(select_next(
            self.moves.as_mut_slice(),
            &mut self.scores[..len],
            start,
        ))
    }
}

impl Default for ScoredMoves {
    fn default() -> Self {
        ScoredMoves::new()
    }
}
