use super::super::*;

impl Grid {
    // === Raw pointers for JS interop ===
    // `Color` is `repr(transparent)` over the ABGR `u32`
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr().cast::<u32>()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.colors.len() * std::mem::size_of::<u32>()
    }
}
