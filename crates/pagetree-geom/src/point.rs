use std::ops::Add;

/// An absolute 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate, increasing rightward.
    pub x: f64,
    /// Y coordinate, increasing downward.
    pub y: f64,
}

impl Point {
    /// Construct a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return the origin point.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Return true when both coordinates are zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// True when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}
