use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    #[inline]
    pub fn cell_count(&self) -> usize { self.colors.len() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, col: u32, row: u32) -> usize {
        (row as usize) * (self.size as usize) + (col as usize)
    }

    /// `(col, row)` for a linear index
    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let size = self.size as usize;
        ((idx % size) as u32, (idx / size) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, col: i64, row: i64) -> bool {
        let n = self.size as i64;
        col >= 0 && col < n && row >= 0 && row < n
    }
}
