use super::Point;

/// Axis-aligned rectangle in surface units (top-left origin).
///
/// Half-open: covers `[min.x, max.x) × [min.y, max.y)`. A rectangle whose max
/// does not exceed its min on either axis is empty; it is kept as given
/// rather than normalized, so inverted input stays inverted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x.saturating_sub(self.min.x).max(0)
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y.saturating_sub(self.min.y).max(0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }

    /// Overlap of two rectangles, `None` when they share no pixel.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };

        if r.is_empty() { None } else { Some(r) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect { Rect::new(x0, y0, x1, y1) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Point::new(5, 5)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Point::new(0, 0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(10, 10)));
        assert!(!r(0, 0, 10, 10).contains(Point::new(9, 10)));
    }

    #[test]
    fn inverted_contains_nothing() {
        assert!(!r(10, 10, 0, 0).contains(Point::new(5, 5)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        assert_eq!(r(0, 0, 10, 10).intersect(r(5, 5, 15, 15)), Some(r(5, 5, 10, 10)));
    }

    #[test]
    fn intersect_contained() {
        let inner = r(10, 10, 30, 30);
        assert_eq!(r(0, 0, 100, 100).intersect(inner), Some(inner));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 20, 10)).is_none());
    }

    #[test]
    fn intersect_with_inverted_returns_none() {
        assert!(r(0, 0, 100, 100).intersect(r(60, 60, 20, 20)).is_none());
    }

    // ── size ──────────────────────────────────────────────────────────────

    #[test]
    fn empty_and_sizes() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(r(3, 3, 1, 8).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
        assert_eq!(r(3, 3, 1, 8).width(), 0);
        assert_eq!(r(2, 4, 12, 10).width(), 10);
        assert_eq!(r(2, 4, 12, 10).height(), 6);
    }
}
