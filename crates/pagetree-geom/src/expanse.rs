use super::{Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// Pages carry one as their measured extent; it is read once per layout
/// pass and never written by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Expanse {
    /// Measured width.
    pub w: f64,
    /// Measured height.
    pub h: f64,
}

impl Expanse {
    /// Construct a new expanse.
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// True when both extents are finite and non-negative. A measurement
    /// read from an unattached or not-yet-rendered element fails this.
    pub fn is_valid(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w >= 0.0 && self.h >= 0.0
    }

    /// Return a `Rect` of this size located at `tl`.
    pub fn at(&self, tl: Point) -> Rect {
        Rect {
            tl,
            w: self.w,
            h: self.h,
        }
    }
}

impl From<(f64, f64)> for Expanse {
    fn from(v: (f64, f64)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(Expanse::new(0.0, 0.0).is_valid());
        assert!(Expanse::new(120.0, 48.5).is_valid());
        assert!(!Expanse::new(-1.0, 10.0).is_valid());
        assert!(!Expanse::new(f64::NAN, 10.0).is_valid());
        assert!(!Expanse::new(10.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn at() {
        let r = Expanse::new(10.0, 20.0).at(Point::new(5.0, 5.0));
        assert_eq!(r, Rect::new(5.0, 5.0, 10.0, 20.0));
    }
}
