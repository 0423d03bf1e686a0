use std::str::FromStr;

use super::error::FenError;
use super::{
    CastlingRights, Color, Piece, Position, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Only the first four fields are read; move counters are ignored
    /// since nothing in this crate depends on them.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let sq = Square::new(7 - rank_idx as u8, file as u8);
                if piece == Piece::King && position.king_square(color).is_some() {
                    return Err(FenError::DuplicateKing { color: c });
                }
                position.set_piece(sq, color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Parse side to move
        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let mut rights = 0u8;
        for c in parts[2].chars() {
            match c {
                'K' => rights |= CASTLE_WHITE_K,
                'Q' => rights |= CASTLE_WHITE_Q,
                'k' => rights |= CASTLE_BLACK_K,
                'q' => rights |= CASTLE_BLACK_Q,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        position.castling_rights = CastlingRights::from_u8(rights);

        // Parse en passant target
        position.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            if sq.rank() != 2 && sq.rank() != 5 {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
            Some(sq)
        };

        #[cfg(feature = "logging")]
        log::trace!("parsed FEN '{fen}'");

        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation. Move counters are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let bits = self.castling_rights.as_u8();
        let mut castling = String::new();
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if bits & bit != 0 {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Wing;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_fen_matches_new() {
        let parsed: Position = START_FEN.parse().expect("valid fen");
        assert_eq!(parsed, Position::new());
        assert_eq!(parsed.to_fen(), START_FEN);
    }

    #[test]
    fn test_parse_fields() {
        let position = Position::from_fen("4k2r/8/8/3pP3/8/8/8/R3K3 w Qk d6 0 3");
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.en_passant_target(), Some("d6".parse().expect("sq")));
        let rights = position.castling_rights();
        assert!(rights.has(Color::White, Wing::Queenside));
        assert!(!rights.has(Color::White, Wing::Kingside));
        assert!(rights.has(Color::Black, Wing::Kingside));
        assert!(!rights.has(Color::Black, Wing::Queenside));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Position::try_from_fen("8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidRank { rank: 7 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 w X - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 w - e4 0 1"),
            Err(FenError::InvalidEnPassant {
                found: "e4".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("K6K/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::DuplicateKing { color: 'K' })
        );
        assert!(matches!(
            Position::try_from_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::TooManyFiles { rank: 0, .. })
        ));
    }

    #[test]
    fn test_fen_roundtrip_black_to_move() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1";
        let position = Position::from_fen(fen);
        assert_eq!(position.to_fen(), fen);
    }
}
