//! Eight-point compass direction and the sector table that assigns it

use core::fmt;
use core::ops::{Bound, RangeBounds};

use crate::types::Heading;

/// Coarse compass direction of a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All eight directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::N => "north",
            Direction::NE => "northeast",
            Direction::E => "east",
            Direction::SE => "southeast",
            Direction::S => "south",
            Direction::SW => "southwest",
            Direction::W => "west",
            Direction::NW => "northwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}

/// One contiguous arc of the compass rose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub lower: Bound<f64>,
    pub upper: Bound<f64>,
    pub direction: Direction,
}

impl Sector {
    const fn new(lower: Bound<f64>, upper: Bound<f64>, direction: Direction) -> Self {
        Self {
            lower,
            upper,
            direction,
        }
    }

    pub fn contains(&self, degrees: f64) -> bool {
        (self.lower, self.upper).contains(&degrees)
    }
}

/// Sector table, evaluated in order, first match wins
///
/// Arcs are narrow (20°) on the cardinal points and wide (70°) on the
/// intercardinals. Each boundary belongs to the sector below it except 350°,
/// which belongs to north. North wraps through 0° and so spans two rows.
pub const SECTORS: [Sector; 9] = {
    use Bound::{Excluded, Included};
    [
        Sector::new(Included(0.0), Included(10.0), Direction::N),
        Sector::new(Excluded(10.0), Included(80.0), Direction::NE),
        Sector::new(Excluded(80.0), Included(100.0), Direction::E),
        Sector::new(Excluded(100.0), Included(170.0), Direction::SE),
        Sector::new(Excluded(170.0), Included(190.0), Direction::S),
        Sector::new(Excluded(190.0), Included(260.0), Direction::SW),
        Sector::new(Excluded(260.0), Included(280.0), Direction::W),
        Sector::new(Excluded(280.0), Excluded(350.0), Direction::NW),
        Sector::new(Included(350.0), Excluded(360.0), Direction::N),
    ]
};

/// Classify a heading into its eight-point compass direction
///
/// The heading is already rounded, so the label always matches the angle
/// shown next to it. A raw 10.004° rounds to 10.00 and reads N, although the
/// unrounded angle lies past the N/NE boundary.
///
/// # Example
/// ```
/// use compass_heading::{Direction, Heading, classify_direction};
///
/// let heading = Heading::from_degrees(10.0, 2).unwrap();
/// assert_eq!(classify_direction(heading), Direction::N);
///
/// let heading = Heading::from_degrees(10.01, 2).unwrap();
/// assert_eq!(classify_direction(heading), Direction::NE);
/// ```
pub fn classify_direction(heading: Heading) -> Direction {
    let degrees = heading.degrees();

    SECTORS
        .iter()
        .find(|sector| sector.contains(degrees))
        .map(|sector| sector.direction)
        // Unreachable for a valid Heading: the table covers [0, 360)
        .unwrap_or(Direction::N)
}
