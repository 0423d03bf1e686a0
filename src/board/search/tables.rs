//! Per-thread ordering heuristics: killer moves and the history table.
//!
//! The search driver owns and updates these; move scoring only reads them.

use super::super::{Move, Piece, Square, EMPTY_MOVE, MAX_PLY};

/// Upper bound on the magnitude of any history entry. Kept below the killer
/// score so a quiet move's history can never outrank a killer.
pub const HISTORY_MAX: i32 = 16_384;

/// One killer move per search ply.
#[derive(Clone, Debug)]
pub struct KillerTable {
    slots: [Move; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [EMPTY_MOVE; MAX_PLY],
        }
    }

    /// Killer for `ply`, or `None` if nothing is stored or the ply is out of range.
    #[must_use]
    pub fn get(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).copied().filter(|mv| !mv.is_null())
    }

    /// Remember a quiet move that caused a cutoff at `ply`.
    pub fn store(&mut self, ply: usize, mv: Move) {
        if let Some(slot) = self.slots.get_mut(ply) {
            *slot = mv;
        }
    }

    pub fn clear(&mut self) {
        self.slots = [EMPTY_MOVE; MAX_PLY];
    }
}

/// Cutoff history indexed by (piece type, destination square).
#[derive(Clone, Debug)]
pub struct HistoryTable {
    entries: [[i32; 64]; 6],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: [[0; 64]; 6],
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, piece: Piece, to: Square) -> i32 {
        self.entries[piece.index()][to.index()]
    }

    /// Reward a quiet move that caused a beta cutoff.
    pub fn update(&mut self, piece: Piece, to: Square, depth: u32) {
        let bonus = depth.saturating_mul(depth).min(HISTORY_MAX as u32) as i32;
        self.adjust(piece, to, bonus);
    }

    /// Penalize a quiet move that was searched but failed to cut off.
    pub fn penalize(&mut self, piece: Piece, to: Square, depth: u32) {
        let malus = depth.min(HISTORY_MAX as u32) as i32;
        self.adjust(piece, to, -malus);
    }

    /// Halve every entry, typically between iterations.
    pub fn age(&mut self) {
        for entry in self.entries.iter_mut().flatten() {
            *entry /= 2;
        }
    }

    pub fn clear(&mut self) {
        self.entries = [[0; 64]; 6];
    }

    fn adjust(&mut self, piece: Piece, to: Square, delta: i32) {
        let entry = &mut self.entries[piece.index()][to.index()];
        *entry = entry.saturating_add(delta).clamp(-HISTORY_MAX, HISTORY_MAX);
    }
}
