//! Integer canvas geometry.
//!
//! Canvas coordinates are whole pixels with the origin in the top-left corner
//! and `y` growing downwards. Arithmetic wraps on `i32` overflow.

/// A location on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x.wrapping_sub(other.x),
            y: self.y.wrapping_sub(other.y),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> i32 {
        self.height
    }

    /// Half of each dimension, rounded towards zero
    pub fn half(self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    origin: Point,
    size: Size,
}

impl Bounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn size(self) -> Size {
        self.size
    }

    pub fn min_x(self) -> i32 {
        self.origin.x
    }

    pub fn min_y(self) -> i32 {
        self.origin.y
    }

    pub fn max_x(self) -> i32 {
        self.origin.x.wrapping_add(self.size.width)
    }

    pub fn max_y(self) -> i32 {
        self.origin.y.wrapping_add(self.size.height)
    }

    pub fn width(self) -> i32 {
        self.size.width
    }

    pub fn height(self) -> i32 {
        self.size.height
    }

    /// Geometric center, with the half extents rounded towards zero
    pub fn center(self) -> Point {
        self.origin.add_point(self.size.half())
    }

    /// Open-rectangle containment test.
    ///
    /// A point lying exactly on any edge is outside. Bounds whose far edge
    /// wrapped past `i32::MAX` contain nothing.
    pub fn contains_strict(self, point: Point) -> bool {
        self.min_x() < point.x
            && point.x < self.max_x()
            && self.min_y() < point.y
            && point.y < self.max_y()
    }
}
