/*!
    Integer rectangle type.
*/

use std::fmt;

/**
    A half-open rectangle `[x0, x1) × [y0, y1)` in pixel coordinates.

    A rectangle whose max coordinate is below its min coordinate is
    treated as empty; its width and height are zero.
*/
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    /**
        Create a rectangle from its min and max corners.
    */
    #[inline]
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /**
        Create a rectangle at the origin with the given size.
    */
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /**
        Returns true if the rectangle contains no pixels.
    */
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /**
        Returns the largest rectangle contained in both `self` and `other`.

        The result is empty (but still well-formed) when they do not overlap.
    */
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1).max(x0);
        let y1 = self.y1.min(other.y1).max(y0);
        Rect { x0, y0, x1, y1 }
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.x0, self.y0, self.x1, self.y1)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}
