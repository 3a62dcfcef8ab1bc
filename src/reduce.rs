//! Min/max range reduction over contiguous sample windows.
//!
//! The decimated renderer asks for the extrema of one index window per
//! pixel column. [`RangeReducer`] is the seam that makes the lookup
//! strategy pluggable: [`LinearScanReducer`] walks the window directly,
//! [`BlockedReducer`] answers from precomputed block extrema plus a sparse
//! table over blocks, in O(1) per query after an O(N) build. Both return
//! identical results for every window.

use std::fmt;

use crate::error::{Error, Result};

/// Running extrema of a sample window.
///
/// Comparisons are strict (`<` / `>`), so NaN samples never displace an
/// established extremum; a window whose seed sample is NaN stays NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MinMax {
    min: f64,
    max: f64,
}

impl MinMax {
    fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    fn include(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    fn combine(&self, other: &Self) -> Self {
        let mut result = *self;
        result.include(other.min);
        result.include(other.max);
        result
    }

    fn from_slice(values: &[f64]) -> Self {
        let mut result = Self::new(values[0]);
        for &v in &values[1..] {
            result.include(v);
        }
        result
    }
}

/// Computes the minimum and maximum value over a sample-index window.
///
/// The window convention is fixed: the result is seeded with
/// `values[index1]`, then every `values[i]` for `i` in `[index1, index2)`
/// is compared; `values[index2]` itself never is. Callers pass indices
/// already clamped to `[0, len - 1]`.
pub trait RangeReducer: fmt::Debug {
    /// Return `(lowest, highest)` over the window starting at `index1`.
    fn reduce(&self, values: &[f64], index1: usize, index2: usize) -> (f64, f64);
}

/// Baseline reducer: one linear pass over the window. O(window length).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanReducer;

impl RangeReducer for LinearScanReducer {
    fn reduce(&self, values: &[f64], index1: usize, index2: usize) -> (f64, f64) {
        let index1 = index1.min(values.len() - 1);
        let end = index2.min(values.len());

        let mut extrema = MinMax::new(values[index1]);
        for &v in &values[index1..end] {
            extrema.include(v);
        }
        (extrema.min, extrema.max)
    }
}

/// Reducer backed by precomputed block extrema and a sparse table.
///
/// The sample array is split into fixed-size blocks; each block's extrema
/// are precomputed, and a sparse table over the block summaries answers
/// any run of complete blocks in O(1). A query scans at most two partial
/// blocks plus one table lookup.
///
/// Construction: O(N + N/B · log(N/B)). Query: O(B). Memory: O(N/B · log(N/B)).
///
/// The structure is bound to the array it was built from; queries against
/// a different array are a caller bug (checked with a debug assertion on
/// length).
#[derive(Debug, Clone)]
pub struct BlockedReducer {
    len: usize,
    block_size: usize,
    /// Extrema of each block.
    block_summaries: Vec<MinMax>,
    /// `sparse_table[level][i]` holds extrema for `2^level` blocks starting at `i`.
    sparse_table: Vec<Vec<MinMax>>,
}

impl BlockedReducer {
    /// Default block size; balances partial-block scan cost against table memory.
    pub const DEFAULT_BLOCK_SIZE: usize = 64;

    /// Build the structure over `values` with the default block size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty array.
    pub fn new(values: &[f64]) -> Result<Self> {
        Self::with_block_size(values, Self::DEFAULT_BLOCK_SIZE)
    }

    /// Build the structure over `values` with a custom block size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty array.
    pub fn with_block_size(values: &[f64], block_size: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyData);
        }
        let block_size = block_size.max(1);

        let n = values.len();
        let num_blocks = n.div_ceil(block_size);

        let mut block_summaries = Vec::with_capacity(num_blocks);
        for block_idx in 0..num_blocks {
            let start = block_idx * block_size;
            let end = (start + block_size).min(n);
            block_summaries.push(MinMax::from_slice(&values[start..end]));
        }

        let sparse_table = Self::build_sparse_table(&block_summaries);

        Ok(Self {
            len: n,
            block_size,
            block_summaries,
            sparse_table,
        })
    }

    /// Number of samples the structure was built over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the structure covers no samples. Construction forbids this.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn build_sparse_table(block_summaries: &[MinMax]) -> Vec<Vec<MinMax>> {
        let num_blocks = block_summaries.len();
        let max_level = if num_blocks <= 1 {
            1
        } else {
            num_blocks.ilog2() as usize + 1
        };

        let mut table = Vec::with_capacity(max_level);
        table.push(block_summaries.to_vec());

        for level in 1..max_level {
            let prev_level = &table[level - 1];
            let jump = 1 << level;
            let mut current_level = Vec::with_capacity(num_blocks);

            for i in 0..num_blocks {
                if i + jump / 2 < num_blocks {
                    current_level.push(prev_level[i].combine(&prev_level[i + jump / 2]));
                } else {
                    current_level.push(prev_level[i]);
                }
            }

            table.push(current_level);
        }

        table
    }

    /// Extrema over the inclusive index range `[l, r]`.
    fn query_inclusive(&self, values: &[f64], l: usize, r: usize) -> MinMax {
        let l_block = l / self.block_size;
        let r_block = r / self.block_size;

        // Whole query inside one block: scan it directly
        if l_block == r_block {
            return MinMax::from_slice(&values[l..=r]);
        }

        let mut result = MinMax::new(values[l]);

        // Left partial block
        let l_block_end = (l_block + 1) * self.block_size - 1;
        result = result.combine(&MinMax::from_slice(&values[l..=l_block_end.min(r)]));

        // Right partial block
        let r_block_start = r_block * self.block_size;
        if r_block_start <= r {
            result = result.combine(&MinMax::from_slice(&values[r_block_start..=r]));
        }

        // Complete blocks in the middle via the sparse table
        let first_full = l_block + 1;
        let last_full = r_block - 1;
        if first_full <= last_full {
            result = result.combine(&self.query_blocks(first_full, last_full));
        }

        result
    }

    /// Extrema over a run of complete blocks `[l_block, r_block]`.
    fn query_blocks(&self, l_block: usize, r_block: usize) -> MinMax {
        if l_block == r_block {
            return self.block_summaries[l_block];
        }

        // Two overlapping power-of-two spans cover the run
        let range_len = r_block - l_block + 1;
        let level = range_len.ilog2() as usize;
        let jump = 1 << level;

        let left = self.sparse_table[level][l_block];
        let right = self.sparse_table[level][r_block - jump + 1];
        left.combine(&right)
    }
}

impl RangeReducer for BlockedReducer {
    fn reduce(&self, values: &[f64], index1: usize, index2: usize) -> (f64, f64) {
        debug_assert_eq!(
            values.len(),
            self.len,
            "BlockedReducer queried against a different array than it was built from"
        );

        let l = index1.min(self.len - 1);
        // The scan convention excludes index2, so the inclusive upper bound
        // is index2 - 1 (but never below the seed index).
        let r = if index2 > l { (index2 - 1).min(self.len - 1) } else { l };

        let extrema = self.query_inclusive(values, l, r);
        (extrema.min, extrema.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sawtooth(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i % 100) as f64).collect()
    }

    #[test]
    fn test_linear_scan_basic() {
        let values = vec![3.0, -1.0, 4.0, 1.0, 5.0];
        let (lo, hi) = LinearScanReducer.reduce(&values, 0, 4);
        assert_eq!(lo, -1.0);
        assert_eq!(hi, 4.0);
    }

    #[test]
    fn test_linear_scan_excludes_upper_index() {
        // The upper index itself is never compared
        let values = vec![1.0, 2.0, 100.0];
        let (lo, hi) = LinearScanReducer.reduce(&values, 0, 2);
        assert_eq!(lo, 1.0);
        assert_eq!(hi, 2.0);
    }

    #[test]
    fn test_linear_scan_degenerate_window() {
        let values = vec![7.0, 8.0];
        let (lo, hi) = LinearScanReducer.reduce(&values, 1, 1);
        assert_eq!(lo, 8.0);
        assert_eq!(hi, 8.0);
    }

    #[test]
    fn test_blocked_empty_rejected() {
        assert!(BlockedReducer::new(&[]).is_err());
    }

    #[test]
    fn test_blocked_single_sample() {
        let values = vec![5.0];
        let reducer = BlockedReducer::new(&values).unwrap();
        assert_eq!(reducer.reduce(&values, 0, 0), (5.0, 5.0));
    }

    #[test]
    fn test_blocked_matches_linear_scan() {
        let values = sawtooth(1000);
        let reducer = BlockedReducer::with_block_size(&values, 32).unwrap();
        let scan = LinearScanReducer;

        for &(i1, i2) in &[
            (0, 999),
            (0, 0),
            (0, 31),
            (0, 32),
            (31, 33),
            (50, 150),
            (500, 501),
            (998, 999),
            (999, 999),
        ] {
            assert_eq!(
                reducer.reduce(&values, i1, i2),
                scan.reduce(&values, i1, i2),
                "window ({i1}, {i2})"
            );
        }
    }

    #[test]
    fn test_blocked_zigzag_full_period() {
        let values: Vec<f64> = (0..8000)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let reducer = BlockedReducer::new(&values).unwrap();

        // Any window spanning a full period reduces to exactly (-1, 1)
        assert_eq!(reducer.reduce(&values, 100, 110), (-1.0, 1.0));
        assert_eq!(reducer.reduce(&values, 0, 7999), (-1.0, 1.0));
    }

    #[test]
    fn test_blocked_negative_values() {
        let values = vec![-5.0, 3.0, -2.0, 8.0, -10.0];
        let reducer = BlockedReducer::with_block_size(&values, 2).unwrap();

        // The upper index is excluded, so values[4] stays out of the first window
        assert_eq!(reducer.reduce(&values, 0, 4), (-5.0, 8.0));
        assert_eq!(reducer.reduce(&values, 0, 2), (-5.0, 3.0));
        assert_eq!(reducer.reduce(&values, 3, 4), (8.0, 8.0));
    }

    #[test]
    fn test_blocked_cross_block_boundary() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let reducer = BlockedReducer::with_block_size(&values, 32).unwrap();

        assert_eq!(reducer.reduce(&values, 30, 36), (30.0, 35.0));
    }

    #[test]
    fn test_blocked_block_size_larger_than_data() {
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let reducer = BlockedReducer::with_block_size(&values, 100).unwrap();

        assert_eq!(reducer.reduce(&values, 0, 19), (0.0, 18.0));
    }

    #[test]
    fn test_monotonic_decreasing() {
        let values: Vec<f64> = (0..100).map(|i| (99 - i) as f64).collect();
        let reducer = BlockedReducer::with_block_size(&values, 32).unwrap();

        let (lo, hi) = reducer.reduce(&values, 20, 41);
        assert_eq!(lo, 59.0);
        assert_eq!(hi, 79.0);
    }
}
