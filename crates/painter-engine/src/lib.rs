//! Painter engine crate.
//!
//! Off-screen 2D rendering driven by a queue of drawing operations. Producers
//! on any thread post [`op::Operation`]s; a single render thread applies them
//! to a double-buffered [`surface::Surface`] and hands finished frames to a
//! [`render::DisplaySink`].
//!
//! ```rust
//! use painter_engine::config::LoopConfig;
//! use painter_engine::op::Operation;
//! use painter_engine::paint::Color;
//! use painter_engine::render::RenderLoop;
//! use painter_engine::surface::{CpuSurface, CpuSurfaceProvider};
//!
//! let mut lp = RenderLoop::start(
//!     &CpuSurfaceProvider,
//!     |frame: &CpuSurface| assert_eq!(frame.count(Color::WHITE), 400 * 400),
//!     LoopConfig::default(),
//! )
//! .unwrap();
//!
//! lp.post_all([Operation::white(), Operation::Publish]);
//! lp.stop_and_wait().unwrap();
//! ```

pub mod config;
pub mod coords;
pub mod logging;
pub mod op;
pub mod paint;
pub mod queue;
pub mod render;
pub mod surface;
