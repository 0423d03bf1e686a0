#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::{MAX_MOVES, MAX_PLY};

/// Pruning and reduction parameters for a search driver.
///
/// `lmr_base` and `lmr_ratio` are stored in tenths so they stay integral.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    pub nmp_min_depth: i32,
    pub nmp_base: i32,
    pub nmp_depth_divisor: i32,
    pub rfp_margin: i32,
    pub rfp_max_depth: i32,
    pub lmr_base: i32,
    pub lmr_ratio: i32,
    pub lmp_base: i32,
    pub lmp_depth: i32,
    pub singular_depth: i32,
    pub double_extension_margin: i32,
    pub futility_depth: i32,
    pub iir_min_depth: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            nmp_min_depth: 3,
            nmp_base: 3,
            nmp_depth_divisor: 6,
            rfp_margin: 80,
            rfp_max_depth: 9,
            lmr_base: 5,
            lmr_ratio: 23,
            lmp_base: 5,
            lmp_depth: 5,
            singular_depth: 7,
            double_extension_margin: 20,
            futility_depth: 8,
            iir_min_depth: 3,
        }
    }
}

/// Late move reductions indexed by depth and move number.
///
/// Built once from [`SearchParams`] and shared by reference between search
/// threads; never mutated after construction.
#[derive(Clone, Debug)]
pub struct ReductionTable {
    table: Box<[[i32; MAX_MOVES]]>,
}

impl ReductionTable {
    /// `reduction(d, n) = base / 10 + ln(d) * ln(n) / (ratio / 10)`, truncated.
    /// Row and column zero stay zero.
    #[must_use]
    pub fn new(params: &SearchParams) -> Self {
        let mut table = vec![[0i32; MAX_MOVES]; MAX_PLY].into_boxed_slice();
        let base = f64::from(params.lmr_base) / 10.0;
        let ratio = f64::from(params.lmr_ratio) / 10.0;

        for (depth, row) in table.iter_mut().enumerate().skip(1) {
            let ln_depth = (depth as f64).ln();
            for (index, cell) in row.iter_mut().enumerate().skip(1) {
                *cell = (base + ln_depth * (index as f64).ln() / ratio) as i32;
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "built reduction table: base {base}, ratio {ratio}, max {}",
            table[MAX_PLY - 1][MAX_MOVES - 1]
        );

        ReductionTable { table }
    }

    /// Reduction for a move at `depth` that was the `move_index`-th tried.
    /// Arguments beyond the table are clamped to its last row or column.
    #[inline]
    #[must_use]
    pub fn reduction(&self, depth: usize, move_index: usize) -> i32 {
        self.table[depth.min(MAX_PLY - 1)][move_index.min(MAX_MOVES - 1)]
    }
}

impl Default for ReductionTable {
    fn default() -> Self {
        ReductionTable::new(&SearchParams::default())
    }
}
