use super::Point;

/// A rectangle located in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// The top-left corner.
    pub tl: Point,
    /// Width of the rectangle.
    pub w: f64,
    /// Height of the rectangle.
    pub h: f64,
}

impl Rect {
    /// Construct a new rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            tl: Point::new(x, y),
            w,
            h,
        }
    }

    /// The horizontal midpoint of the rectangle.
    pub fn center_x(&self) -> f64 {
        self.tl.x + self.w / 2.0
    }

    /// The bottom-right corner.
    pub fn br(&self) -> Point {
        Point::new(self.tl.x + self.w, self.tl.y + self.h)
    }

    /// The smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        let tlx = self.tl.x.min(other.tl.x);
        let tly = self.tl.y.min(other.tl.y);
        let brx = self.br().x.max(other.br().x);
        let bry = self.br().y.max(other.br().y);
        Self::new(tlx, tly, brx - tlx, bry - tly)
    }
}
