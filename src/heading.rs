use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Compass heading of a car, in clockwise order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl FromStr for Heading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"N" | b"n" => Ok(Heading::North),
            b"E" | b"e" => Ok(Heading::East),
            b"S" | b"s" => Ok(Heading::South),
            b"W" | b"w" => Ok(Heading::West),
            _ => Err(ParseError::InvalidHeading(s.to_string())),
        }
    }
}

impl Heading {
    /// Headings in clockwise order; turning walks this table
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    /// Index into `ALL`
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Heading after a 90° turn to the left
    #[inline]
    pub const fn left(self) -> Heading {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Heading after a 90° turn to the right
    #[inline]
    pub const fn right(self) -> Heading {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Unit step `(dx, dy)` for one forward move; north is +y
    #[inline]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
