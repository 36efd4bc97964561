//! Coordinate and geometry types shared by surfaces and operations.
//!
//! Canonical space:
//! - Integer surface units (one unit = one pixel of a CPU surface)
//! - Origin top-left
//! - +X right, +Y down

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::SurfaceSize;
