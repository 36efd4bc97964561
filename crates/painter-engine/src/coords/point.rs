use core::ops::{Add, AddAssign, Sub};

/// 2D point in surface units (integer pixels).
///
/// Arithmetic saturates at the `i32` range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_saturates_instead_of_wrapping() {
        let edge = Point::new(i32::MAX - 1, i32::MIN + 1);
        assert_eq!(edge + Point::new(10, -10), Point::new(i32::MAX, i32::MIN));
        assert_eq!(edge - Point::new(-10, 10), Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn add_assign_compounds() {
        let mut p = Point::new(1, 2);
        p += Point::new(3, 4);
        assert_eq!(p, Point::new(4, 6));
    }
}
