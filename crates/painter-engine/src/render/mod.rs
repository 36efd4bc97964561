//! Render loop and display plumbing.
//!
//! The loop owns two surfaces and a single consumer thread. Producers reach
//! it only through [`OpSender`]/[`RenderLoop::post`]; they never touch a
//! surface.

mod fallback;
mod render_loop;
mod sink;

pub use fallback::FallbackView;
pub use render_loop::{OpSender, RenderLoop};
pub use sink::DisplaySink;
