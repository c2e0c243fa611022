use crate::heading::Heading;
use std::fmt;

/// Integer grid cell; (0,0) is the bottom-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step ahead when facing `heading`
    #[inline]
    pub const fn ahead(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ahead() {
        let p = Position::new(3, 3);
        assert_eq!(p.ahead(Heading::North), Position::new(3, 4));
        assert_eq!(p.ahead(Heading::East), Position::new(4, 3));
        assert_eq!(p.ahead(Heading::South), Position::new(3, 2));
        assert_eq!(p.ahead(Heading::West), Position::new(2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(5, -4).to_string(), "(5,-4)");
    }
}
