use super::super::*;

impl Grid {
    #[inline]
    pub fn blank(&self) -> Color {
        self.blank
    }

    #[inline]
    pub fn color(&self, idx: usize) -> Option<Color> {
        self.colors.get(idx).copied()
    }

    /// Out-of-range indices are never blank
    #[inline]
    pub fn is_blank(&self, idx: usize) -> bool {
        self.color(idx) == Some(self.blank)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn count_painted(&self) -> usize {
        self.colors.iter().filter(|&&c| c != self.blank).count()
    }
}
