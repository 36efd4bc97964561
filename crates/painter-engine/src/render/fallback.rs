use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::surface::Surface;

const BORDER_WIDTH: i32 = 10;
const CELL: i32 = 40;

/// Default frame a display shows before anything has been published.
///
/// Green background, white border, and a blue T built from square cells.
/// The T's position is state owned by the view; hosts move it with
/// [`set_figure`](FallbackView::set_figure) (e.g. on a pointer click) and
/// repaint.
#[derive(Debug, Clone)]
pub struct FallbackView {
    figure: Point,
}

impl FallbackView {
    pub fn new(figure: Point) -> Self {
        Self { figure }
    }

    /// View with the figure centred on `bounds`.
    pub fn centered(bounds: Rect) -> Self {
        Self::new(Point::new(
            bounds.min.x + bounds.width() / 2,
            bounds.min.y + bounds.height() / 2,
        ))
    }

    #[inline]
    pub fn figure(&self) -> Point {
        self.figure
    }

    #[inline]
    pub fn set_figure(&mut self, at: Point) {
        self.figure = at;
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        let bounds = surface.bounds();
        surface.fill(bounds, Color::GREEN);
        for edge in border(bounds, BORDER_WIDTH) {
            surface.fill(edge, Color::WHITE);
        }
        for cell in self.cells() {
            surface.fill(cell, Color::BLUE);
        }
    }

    /// Three cells on top, one under the middle. The anchor is the
    /// bottom-centre of the stem.
    fn cells(&self) -> [Rect; 4] {
        let x0 = self.figure.x.saturating_sub(CELL * 3 / 2);
        let y0 = self.figure.y.saturating_sub(CELL * 2);
        let cell = |col: i32, row: i32| {
            Rect::new(
                x0.saturating_add(col * CELL),
                y0.saturating_add(row * CELL),
                x0.saturating_add((col + 1) * CELL),
                y0.saturating_add((row + 1) * CELL),
            )
        };
        [cell(0, 0), cell(1, 0), cell(2, 0), cell(1, 1)]
    }
}

/// The four strips of width `w` lining the inside of `r`.
fn border(r: Rect, w: i32) -> [Rect; 4] {
    [
        Rect::new(r.min.x, r.min.y, r.max.x, r.min.y + w),
        Rect::new(r.min.x, r.max.y - w, r.max.x, r.max.y),
        Rect::new(r.min.x, r.min.y + w, r.min.x + w, r.max.y - w),
        Rect::new(r.max.x - w, r.min.y + w, r.max.x, r.max.y - w),
    ]
}
