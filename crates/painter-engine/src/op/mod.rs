//! Drawing operations.
//!
//! An [`Operation`] is a unit of work applied to a [`Surface`] by the render
//! loop. Applying it returns whether the surface should now be published.
//! Only [`Operation::Publish`] (directly or inside a batch) ever returns
//! `true`; painting never does.

mod figure;

pub use figure::{glyph_at, Figure};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::surface::Surface;

/// Color of figure glyphs.
pub const FIGURE_COLOR: Color = Color::BLUE;
/// Color used by [`Operation::Reset`] and background rectangles.
pub const BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Debug)]
pub enum Operation {
    /// Fills the full bounds with a solid color.
    Fill(Color),
    /// Fills `[x1, x2) × [y1, y2)` with the background color. Degenerate
    /// rectangles are passed through unchanged.
    FillBackgroundRect(Rect),
    /// Draws the figure's glyph at its position at apply time.
    AddFigure(Figure),
    /// Shifts every referenced figure by `delta`. Draws nothing.
    MoveFigures { delta: Point, figures: Vec<Figure> },
    /// Fills the full bounds with the background color.
    Reset,
    /// Mutates nothing; marks the surface ready.
    Publish,
    /// Applies members in order; ready if any member is.
    Batch(Vec<Operation>),
    /// Raises a render loop's stop flag. Only the loop creates these.
    Stop(StopRequest),
}

impl Operation {
    #[inline]
    pub fn white() -> Self {
        Operation::Fill(Color::WHITE)
    }

    #[inline]
    pub fn green() -> Self {
        Operation::Fill(Color::GREEN)
    }

    #[inline]
    pub fn background_rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Operation::FillBackgroundRect(Rect::new(x1, y1, x2, y2))
    }

    /// Applies the operation, returning `true` if the surface is ready to publish.
    pub fn apply(&self, surface: &mut dyn Surface) -> bool {
        match self {
            Operation::Fill(color) => {
                let bounds = surface.bounds();
                surface.fill(bounds, *color);
                false
            }
            Operation::FillBackgroundRect(rect) => {
                surface.fill(*rect, BACKGROUND_COLOR);
                false
            }
            Operation::AddFigure(figure) => {
                for part in figure.glyph() {
                    surface.fill(part, FIGURE_COLOR);
                }
                false
            }
            Operation::MoveFigures { delta, figures } => {
                for figure in figures {
                    figure.translate(*delta);
                }
                false
            }
            Operation::Reset => {
                let bounds = surface.bounds();
                surface.fill(bounds, BACKGROUND_COLOR);
                false
            }
            Operation::Publish => true,
            Operation::Batch(ops) => {
                // Every member runs even after one reports ready.
                let mut ready = false;
                for op in ops {
                    ready |= op.apply(surface);
                }
                ready
            }
            Operation::Stop(request) => {
                request.raise();
                false
            }
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Fill(_) => "fill",
            Operation::FillBackgroundRect(_) => "bgrect",
            Operation::AddFigure(_) => "figure",
            Operation::MoveFigures { .. } => "move",
            Operation::Reset => "reset",
            Operation::Publish => "publish",
            Operation::Batch(_) => "batch",
            Operation::Stop(_) => "stop",
        }
    }
}

/// Handle onto a render loop's stop flag.
///
/// Cannot be constructed outside this crate.
#[derive(Debug, Clone)]
pub struct StopRequest {
    flag: Arc<AtomicBool>,
}

impl StopRequest {
    pub(crate) fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    fn raise(&self) {
        self.flag.store(true, Ordering::Release);
    }
}
