//! Grid positions, headings, and the rotation/translation primitives.
//!
//! A heading is one of eight compass directions at 45° increments, each
//! mapped to a fixed unit coordinate increment. Rotation and translation
//! are pure functions of `(Heading, Pos)` with no side effects; agents
//! use them both for committed moves and for speculative sensing.

use std::fmt;

/// An integer coordinate on the lattice.
///
/// `x` grows toward heading 0° (east), `y` toward heading 90° (north).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl Pos {
    /// Create a position from its coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in the given heading.
    pub fn offset_by(self, heading: Heading) -> Self {
        let (dx, dy) = heading.unit_offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which way to rotate a heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Clockwise: subtracts 45° per turn count.
    Right,
    /// Counter-clockwise: adds 45° per turn count.
    Left,
}

/// One of the eight compass directions at 45° increments.
///
/// Each heading maps to a unit coordinate increment:
///
/// | Heading | Degrees | Offset |
/// |---|---|---|
/// | `East` | 0 | (+1, 0) |
/// | `NorthEast` | 45 | (+1, +1) |
/// | `North` | 90 | (0, +1) |
/// | `NorthWest` | 135 | (−1, +1) |
/// | `West` | 180 | (−1, 0) |
/// | `SouthWest` | 225 | (−1, −1) |
/// | `South` | 270 | (0, −1) |
/// | `SouthEast` | 315 | (+1, −1) |
///
/// # Examples
///
/// ```
/// use formica_core::{Heading, Side};
///
/// let h = Heading::North;
/// assert_eq!(h.rotated(Side::Right, 1), Heading::NorthEast);
/// assert_eq!(h.rotated(Side::Left, 2), Heading::West);
/// // Right then left by the same count is the identity.
/// assert_eq!(h.rotated(Side::Right, 3).rotated(Side::Left, 3), h);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// 0°: (+1, 0).
    East = 0,
    /// 45°: (+1, +1).
    NorthEast = 1,
    /// 90°: (0, +1).
    North = 2,
    /// 135°: (−1, +1).
    NorthWest = 3,
    /// 180°: (−1, 0).
    West = 4,
    /// 225°: (−1, −1).
    SouthWest = 5,
    /// 270°: (0, −1).
    South = 6,
    /// 315°: (+1, −1).
    SouthEast = 7,
}

impl Heading {
    /// All eight headings in ascending degree order.
    pub const ALL: [Heading; 8] = [
        Heading::East,
        Heading::NorthEast,
        Heading::North,
        Heading::NorthWest,
        Heading::West,
        Heading::SouthWest,
        Heading::South,
        Heading::SouthEast,
    ];

    /// The four diagonal headings {45°, 135°, 225°, 315°}.
    ///
    /// New agents draw their starting heading uniformly from this set.
    pub const DIAGONALS: [Heading; 4] = [
        Heading::NorthEast,
        Heading::NorthWest,
        Heading::SouthWest,
        Heading::SouthEast,
    ];

    /// The heading's angle in degrees, one of {0, 45, …, 315}.
    pub fn degrees(self) -> u16 {
        self as u16 * 45
    }

    /// The heading for an angle in degrees, if it is a multiple of 45°
    /// below 360°.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        if degrees % 45 != 0 {
            return None;
        }
        Self::ALL.get((degrees / 45) as usize).copied()
    }

    /// The unit coordinate increment for this heading.
    pub fn unit_offset(self) -> (i32, i32) {
        match self {
            Heading::East => (1, 0),
            Heading::NorthEast => (1, 1),
            Heading::North => (0, 1),
            Heading::NorthWest => (-1, 1),
            Heading::West => (-1, 0),
            Heading::SouthWest => (-1, -1),
            Heading::South => (0, -1),
            Heading::SouthEast => (1, -1),
        }
    }

    /// Rotate by `turn_count` 45° steps toward `side`.
    ///
    /// Right subtracts degrees, left adds; both wrap into [0°, 360°).
    /// Pure: returns the new heading without touching any state.
    pub fn rotated(self, side: Side, turn_count: usize) -> Self {
        let step = (turn_count % 8) as i16;
        let idx = self as i16;
        let idx = match side {
            Side::Right => (idx - step).rem_euclid(8),
            Side::Left => (idx + step).rem_euclid(8),
        };
        Self::ALL[idx as usize]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
