//! Rectangles and circles.

use cgmath::{Point2, Vector2, Zero};

/// A rectangle.
///
/// The y axis points down, so `top` is the smaller y coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin (the top left corner).
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Creates a rectangle from its edges.
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect {
            origin: Point2::new(left, top),
            size: Vector2::new(right - left, bottom - top),
        }
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::zero(),
        }
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn top(&self) -> f64 {
        self.origin.y
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Returns the center point.
    pub fn center(&self) -> Point2<f64> {
        self.origin + self.size / 2.
    }

    /// Returns true if the point is inside the rectangle.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.size.x
            && point.y < self.origin.y + self.size.y
    }

    /// Returns true if the two rectangles intersect.
    pub fn intersects(&self, rect: Rect) -> bool {
        let own_opposite = self.origin + self.size;
        let rect_opposite = rect.origin + rect.size;

        self.origin.x < rect_opposite.x
            && self.origin.y < rect_opposite.y
            && rect.origin.x < own_opposite.x
            && rect.origin.y < own_opposite.y
    }

    /// Returns the intersection rectangle.
    pub fn intersect(&self, rect: Rect) -> Option<Rect> {
        if !self.intersects(rect) {
            return None;
        }

        Some(Rect::from_ltrb(
            self.left().max(rect.left()),
            self.top().max(rect.top()),
            self.right().min(rect.right()),
            self.bottom().min(rect.bottom()),
        ))
    }

    /// Returns the smallest rectangle containing both rectangles.
    pub fn union(&self, rect: Rect) -> Rect {
        Rect::from_ltrb(
            self.left().min(rect.left()),
            self.top().min(rect.top()),
            self.right().max(rect.right()),
            self.bottom().max(rect.bottom()),
        )
    }

    /// Returns a rectangle of the given size centered on a point.
    pub fn around(center: Point2<f64>, half_extent: f64) -> Rect {
        Rect::from_ltrb(
            center.x - half_extent,
            center.y - half_extent,
            center.x + half_extent,
            center.y + half_extent,
        )
    }
}

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2<f64>, radius: f64) -> Circle {
        Circle { center, radius }
    }

    /// The bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::around(self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_union() {
        let a = Rect::from_ltrb(10., 20., 30., 60.);
        assert_eq!(a.width(), 20.);
        assert_eq!(a.height(), 40.);
        assert_eq!(a.right(), 30.);
        assert_eq!(a.bottom(), 60.);

        let b = Rect::from_ltrb(0., 40., 15., 80.);
        assert_eq!(a.union(b), Rect::from_ltrb(0., 20., 30., 80.));
        assert_eq!(a.intersect(b), Some(Rect::from_ltrb(10., 40., 15., 60.)));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::from_ltrb(0., 0., 10., 10.);
        assert!(r.contains(Point2::new(0., 0.)));
        assert!(r.contains(Point2::new(9.5, 9.5)));
        assert!(!r.contains(Point2::new(10., 5.)), "right edge is exclusive");
    }

    #[test]
    fn around_point() {
        let r = Rect::around(Point2::new(50., 50.), 20.);
        assert_eq!(r, Rect::from_ltrb(30., 30., 70., 70.));
        assert_eq!(r.center(), Point2::new(50., 50.));
    }
}
