//! Grid geometry: [`Point`] cells and rectangular [`Range`] bounds.

use std::fmt;

/// A grid cell. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Up, right, down, left.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
        ]
    }

    /// The cardinal cells followed by the four diagonals.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        let [up, right, down, left] = self.neighbors_4();
        let Point { x, y } = self;
        [
            up,
            right,
            down,
            left,
            Self::new(x + 1, y - 1),
            Self::new(x + 1, y + 1),
            Self::new(x - 1, y + 1),
            Self::new(x - 1, y - 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cells with `min.x <= x < max.x` and `min.y <= y < max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// A `w` by `h` grid anchored at the origin.
    #[inline]
    pub const fn sized(w: i32, h: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(w, h),
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Number of cells; zero when either side is non-positive.
    #[inline]
    pub fn len(self) -> usize {
        let w = (self.max.x - self.min.x).max(0) as usize;
        let h = (self.max.y - self.min.y).max(0) as usize;
        w * h
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
