//! Paint model shared between operations and surfaces.
//!
//! Only solid fills exist; there is no blending. A fill overwrites the
//! destination pixels (source-copy semantics).

pub mod color;

pub use color::Color;
