use crate::field::Position;

/// Rectangular field of valid cells, anchored at (0,0)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: u32,
    height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// True iff `0 <= x < width` and `0 <= y < height`
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    #[inline]
    pub fn contains_position(&self, pos: Position) -> bool {
        self.contains(pos.x, pos.y)
    }
}
