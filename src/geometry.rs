//! Geometry primitives the R-tree is built on: a 2-D point and an
//! axis-aligned box that may also be "empty".

/// Tolerance used by [`Box2`]'s equality and by the split tie-break cascade.
pub const EPSILON: f64 = 1e-9;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

/// An axis-aligned box, or the empty box.
///
/// A non-empty box always satisfies `min.x <= max.x` and `min.y <= max.y`;
/// [`Box2::new`] enforces this by taking the componentwise min/max of its
/// two corners rather than trusting caller-supplied ordering.
#[derive(Debug, Clone, Copy)]
pub struct Box2 {
    min: Point2,
    max: Point2,
    empty: bool,
}

impl Box2 {
    /// The empty box: zero area, overlaps nothing, identity of `merge`.
    pub fn empty() -> Self {
        Box2 {
            min: Point2::new(0.0, 0.0),
            max: Point2::new(0.0, 0.0),
            empty: true,
        }
    }

    /// Builds the normalised box spanning `p1` and `p2`. Never empty.
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Box2 {
            min: Point2::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2::new(p1.x.max(p2.x), p1.y.max(p2.y)),
            empty: false,
        }
    }

    /// A zero-area box at a single point.
    pub fn from_point(p: Point2) -> Self {
        Box2 {
            min: p,
            max: p,
            empty: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn min(&self) -> Option<Point2> {
        (!self.empty).then_some(self.min)
    }

    pub fn max(&self) -> Option<Point2> {
        (!self.empty).then_some(self.max)
    }

    /// `0` for the empty box, else `(max.x - min.x) * (max.y - min.y)`.
    pub fn area(&self) -> f64 {
        if self.empty {
            0.0
        } else {
            ((self.max.x - self.min.x) * (self.max.y - self.min.y)).max(0.0)
        }
    }

    /// Closed-interval overlap on both axes; boundary contact counts.
    pub fn overlap(&self, other: &Box2) -> bool {
        if self.empty || other.empty {
            return false;
        }
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Componentwise min of mins and max of maxes; an empty operand is
    /// absorbed (returns the other box).
    pub fn merge(a: &Box2, b: &Box2) -> Box2 {
        if a.empty {
            return *b;
        }
        if b.empty {
            return *a;
        }
        Box2 {
            min: Point2::new(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
            max: Point2::new(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            empty: false,
        }
    }

    /// Growth in area if `other` were merged into `self`.
    pub fn enlarge_area(&self, other: &Box2) -> f64 {
        Box2::merge(self, other).area() - self.area()
    }
}

impl PartialEq for Box2 {
    fn eq(&self, other: &Self) -> bool {
        if self.empty || other.empty {
            return self.empty == other.empty;
        }
        (self.min.x - other.min.x).abs() < EPSILON
            && (self.min.y - other.min.y).abs() < EPSILON
            && (self.max.x - other.max.x).abs() < EPSILON
            && (self.max.y - other.max.y).abs() < EPSILON
    }
}
