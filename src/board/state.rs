use super::{CastlingRights, Color, Move, Piece, Promotion, Square};

/// Read-only board snapshot consumed by move generation, exchange evaluation
/// and ordering.
///
/// A 64-entry mailbox indexed by `Square::index`, with piece type and color
/// stored as separate fields. The type is `Copy`: exchange evaluation works
/// on a throwaway copy and never touches the caller's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) kings: [Option<Square>; 2],
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            let file = file as u8;
            position.set_piece(Square::new(0, file), Color::White, piece);
            position.set_piece(Square::new(7, file), Color::Black, piece);
            position.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    /// A board with no pieces, White to move, no rights.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            kings: [None; 2],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub const fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Place a piece, replacing whatever stood there.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.clear_square(sq);
        self.squares[sq.index()] = Some((color, piece));
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        }
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        if let Some((color, Piece::King)) = self.squares[sq.index()] {
            if self.kings[color.index()] == Some(sq) {
                self.kings[color.index()] = None;
            }
        }
        self.squares[sq.index()] = None;
    }

    /// True if `mv` takes an enemy piece, counting en passant.
    #[inline]
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        match self.piece_at(mv.to()) {
            Some((color, _)) => color != self.side_to_move,
            None => self.is_en_passant(mv),
        }
    }

    /// True if `mv` is a pawn capturing onto the en passant target.
    #[inline]
    #[must_use]
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.en_passant_target == Some(mv.to())
            && matches!(self.piece_at(mv.from()), Some((_, Piece::Pawn)))
            && mv.from().file() != mv.to().file()
    }

    /// True if `mv` is a king moving two files.
    #[inline]
    #[must_use]
    pub fn is_castling(&self, mv: Move) -> bool {
        matches!(self.piece_at(mv.from()), Some((_, Piece::King)))
            && mv.from().file().abs_diff(mv.to().file()) == 2
    }

    /// Resolve a move's promotion tag to a piece, or `None` if the move is
    /// not a promotion in this position.
    #[must_use]
    pub fn promotion_piece(&self, mv: Move) -> Option<Piece> {
        match self.piece_at(mv.from()) {
            Some((color, Piece::Pawn)) if mv.to().rank() == color.pawn_promotion_rank() => {
                Some(mv.promotion().piece())
            }
            _ => {
                debug_assert_eq!(mv.promotion(), Promotion::NoneOrKnight);
                None
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
