use std::sync::{Arc, Mutex, PoisonError};

use crate::coords::{Point, Rect};

/// Half-width of the T glyph's top bar.
const BAR_HALF_WIDTH: i32 = 60;
/// Half-width of the T glyph's stem.
const STEM_HALF_WIDTH: i32 = 20;
/// Height of both the bar (above the anchor) and the stem (below it).
const SEGMENT_HEIGHT: i32 = 40;

/// Mutable anchor of a T-shaped glyph.
///
/// A `Figure` is a shared handle: clones refer to the same anchor, so a move
/// applied through one clone is observed by every operation holding another.
/// Moves compound additively.
#[derive(Debug, Clone)]
pub struct Figure {
    anchor: Arc<Mutex<Point>>,
}

impl Figure {
    pub fn new(at: Point) -> Self {
        Self {
            anchor: Arc::new(Mutex::new(at)),
        }
    }

    /// Current anchor position.
    pub fn position(&self) -> Point {
        *self.anchor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `delta` to the stored anchor.
    pub fn translate(&self, delta: Point) {
        let mut anchor = self.anchor.lock().unwrap_or_else(PoisonError::into_inner);
        *anchor += delta;
    }

    /// True if both handles refer to the same anchor.
    pub fn same_as(&self, other: &Figure) -> bool {
        Arc::ptr_eq(&self.anchor, &other.anchor)
    }

    /// Bar and stem rectangles of the glyph anchored at the current position.
    pub fn glyph(&self) -> [Rect; 2] {
        glyph_at(self.position())
    }
}

/// The T glyph: a top bar ending at the anchor row and a stem starting there.
///
/// Edges saturate, so anchors near the `i32` limits yield clipped (possibly
/// empty) rectangles.
pub fn glyph_at(p: Point) -> [Rect; 2] {
    let bar = Rect::new(
        p.x.saturating_sub(BAR_HALF_WIDTH),
        p.y.saturating_sub(SEGMENT_HEIGHT),
        p.x.saturating_add(BAR_HALF_WIDTH),
        p.y,
    );
    let stem = Rect::new(
        p.x.saturating_sub(STEM_HALF_WIDTH),
        p.y,
        p.x.saturating_add(STEM_HALF_WIDTH),
        p.y.saturating_add(SEGMENT_HEIGHT),
    );
    [bar, stem]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_anchor() {
        let a = Figure::new(Point::new(10, 10));
        let b = a.clone();
        b.translate(Point::new(5, -3));
        assert_eq!(a.position(), Point::new(15, 7));
        assert!(a.same_as(&b));
        assert!(!a.same_as(&Figure::new(Point::new(15, 7))));
    }

    #[test]
    fn moves_compound() {
        let f = Figure::new(Point::zero());
        f.translate(Point::new(1, 2));
        f.translate(Point::new(1, 2));
        assert_eq!(f.position(), Point::new(2, 4));
    }

    #[test]
    fn glyph_at_extremes_saturates() {
        let [bar, stem] = glyph_at(Point::new(i32::MAX, i32::MIN));
        assert_eq!(bar, Rect::new(i32::MAX - 60, i32::MIN, i32::MAX, i32::MIN));
        assert_eq!(stem, Rect::new(i32::MAX - 20, i32::MIN, i32::MAX, i32::MIN + 40));
        assert!(bar.is_empty());
    }

    #[test]
    fn moves_past_the_limit_stick_at_the_edge() {
        let f = Figure::new(Point::new(i32::MAX - 5, 0));
        f.translate(Point::new(100, 0));
        f.translate(Point::new(100, 0));
        assert_eq!(f.position(), Point::new(i32::MAX, 0));
    }

    #[test]
    fn glyph_geometry() {
        let [bar, stem] = glyph_at(Point::new(100, 100));
        assert_eq!(bar, Rect::new(40, 60, 160, 100));
        assert_eq!(stem, Rect::new(80, 100, 120, 140));
    }
}
