//! Drawable surfaces.
//!
//! A [`Surface`] is a fixed-size 2D target supporting exactly two primitives:
//! fill a rectangle with a solid color, and report its bounds. Backends supply
//! surfaces through a [`SurfaceProvider`]; [`CpuSurface`] is the in-crate
//! bitmap implementation used by tests and headless hosts.

mod cpu;

pub use cpu::{CpuSurface, CpuSurfaceProvider};

use crate::coords::{Rect, SurfaceSize};
use crate::paint::Color;

/// Fixed-size drawable target.
///
/// Implementations must treat empty or inverted rectangles as a no-op and clip
/// anything outside [`bounds`](Surface::bounds).
pub trait Surface {
    /// Overwrites every pixel of `rect` (clipped to bounds) with `color`.
    fn fill(&mut self, rect: Rect, color: Color);

    /// Full extent of the surface, with `min` at the origin.
    fn bounds(&self) -> Rect;
}

/// Creates surfaces for the render loop.
///
/// Called on the thread that starts the loop; the created surfaces are then
/// moved to the render thread, hence the `Send` bound.
pub trait SurfaceProvider {
    type Surface: Surface + Send + 'static;

    fn create_surface(&self, size: SurfaceSize) -> anyhow::Result<Self::Surface>;
}
