use anyhow::ensure;

use crate::coords::{Point, Rect, SurfaceSize};
use crate::paint::Color;

use super::{Surface, SurfaceProvider};

/// Row-major RGBA8 bitmap.
///
/// New surfaces are zeroed ([`Color::TRANSPARENT`]).
#[derive(Clone, PartialEq, Eq)]
pub struct CpuSurface {
    size: SurfaceSize,
    pixels: Vec<Color>,
}

impl CpuSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixels: vec![Color::TRANSPARENT; size.area()],
        }
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.bounds().contains(Point::new(x, y)) {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major, no padding between rows.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels currently holding exactly `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }
}

impl Surface for CpuSurface {
    fn fill(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.intersect(self.bounds()) else {
            return;
        };

        let width = self.size.width as usize;
        let (x0, x1) = (clipped.min.x as usize, clipped.max.x as usize);
        for y in clipped.min.y as usize..clipped.max.y as usize {
            let row = y * width;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }

    #[inline]
    fn bounds(&self) -> Rect {
        Rect::from_size(self.size.width, self.size.height)
    }
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.size.width)
            .field("height", &self.size.height)
            .finish()
    }
}

/// Provider of [`CpuSurface`]s.
#[derive(Debug, Copy, Clone, Default)]
pub struct CpuSurfaceProvider;

impl SurfaceProvider for CpuSurfaceProvider {
    type Surface = CpuSurface;

    fn create_surface(&self, size: SurfaceSize) -> anyhow::Result<CpuSurface> {
        ensure!(
            size.is_valid(),
            "cannot create a {}x{} surface",
            size.width,
            size.height
        );
        ensure!(
            size.width <= i32::MAX as u32 && size.height <= i32::MAX as u32,
            "surface size {}x{} exceeds coordinate range",
            size.width,
            size.height
        );
        Ok(CpuSurface::new(size))
    }
}
