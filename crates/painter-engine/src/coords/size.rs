/// Size of a surface in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::square(400)
    }
}
