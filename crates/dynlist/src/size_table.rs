//! Measured extents per list slot.
//!
//! Entry `i` always holds the last measured extent of the item currently in
//! slot `i`. The table follows the logical order: every accepted swap exchanges
//! two entries so that thresholds computed from neighbor sizes stay accurate
//! while items of different sizes move past each other.

use dynlist_core::profiling::profile_function;

use crate::error::{ReorderError, ReorderResult};

/// Ordered extents, one per slot. Unmeasured slots hold `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeTable {
    sizes: Vec<f32>,
}

impl SizeTable {
    /// Creates a table of `len` unmeasured slots.
    pub fn new(len: usize) -> Self {
        Self {
            sizes: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Extent at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.sizes.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.sizes.iter().copied()
    }

    /// Records the extent of the item in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn measure(&mut self, index: usize, size: f32) {
        let len = self.sizes.len();
        assert!(index < len, "measure index {index} out of bounds (len {len})");
        self.sizes[index] = size;
    }

    /// Fallible [`measure`](Self::measure).
    ///
    /// Returns whether the stored extent changed.
    pub fn try_measure(&mut self, index: usize, size: f32) -> ReorderResult<bool> {
        let len = self.sizes.len();
        let slot = self
            .sizes
            .get_mut(index)
            .ok_or(ReorderError::IndexOutOfBounds { index, len })?;
        let changed = *slot != size;
        *slot = size;
        Ok(changed)
    }

    /// Exchanges the extents at `a` and `b`. No-op when `a == b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        profile_function!();
        let len = self.sizes.len();
        assert!(
            a < len && b < len,
            "swap indices ({a}, {b}) out of bounds (len {len})"
        );
        self.sizes.swap(a, b);
    }

    /// Fallible [`swap`](Self::swap).
    pub fn try_swap(&mut self, a: usize, b: usize) -> ReorderResult<()> {
        let len = self.sizes.len();
        for index in [a, b] {
            if index >= len {
                return Err(ReorderError::IndexOutOfBounds { index, len });
            }
        }
        self.sizes.swap(a, b);
        Ok(())
    }

    /// Grows with unmeasured slots or truncates to `len`.
    pub fn resize(&mut self, len: usize) {
        self.sizes.resize(len, 0.0);
    }

    /// Removes slot `index`, shifting later slots down. Returns the removed extent.
    pub fn try_remove(&mut self, index: usize) -> ReorderResult<f32> {
        let len = self.sizes.len();
        if index >= len {
            return Err(ReorderError::IndexOutOfBounds { index, len });
        }
        Ok(self.sizes.remove(index))
    }

    /// Leading edge of slot `index`: the sum of all extents before it.
    pub fn offset_of(&self, index: usize) -> f32 {
        self.sizes.iter().take(index).sum()
    }

    /// Sum of every measured extent.
    pub fn total_extent(&self) -> f32 {
        self.sizes.iter().sum()
    }
}

impl From<Vec<f32>> for SizeTable {
    fn from(sizes: Vec<f32>) -> Self {
        Self { sizes }
    }
}
