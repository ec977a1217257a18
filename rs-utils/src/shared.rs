use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};

use crate::orientation::{Mirror, Rotation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn as_string(&self) -> &'static str {
        match *self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Quarter turns about Y exchange the two horizontal axes.
    pub fn rotate(self, rotation: Rotation) -> Axis {
        match (self, rotation) {
            (Axis::X, Rotation::Clockwise90 | Rotation::CounterClockwise90) => Axis::Z,
            (Axis::Z, Rotation::Clockwise90 | Rotation::CounterClockwise90) => Axis::X,
            (axis, _) => axis,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Position {
        Position { x, y, z }
    }

    pub fn shift(self, dir: Direction) -> Position {
        let (ox, oy, oz) = dir.get_offset();
        self + (ox, oy, oz)
    }

    pub fn shift_by(self, dir: Direction, by: i32) -> Position {
        let (ox, oy, oz) = dir.get_offset();
        self + (ox * by, oy * by, oz * by)
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn with(self, axis: Axis, value: i32) -> Position {
        match axis {
            Axis::X => Position { x: value, ..self },
            Axis::Y => Position { y: value, ..self },
            Axis::Z => Position { z: value, ..self },
        }
    }

    pub fn min_corner(a: Position, b: Position) -> Position {
        Position::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
    }

    pub fn max_corner(a: Position, b: Position) -> Position {
        Position::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
    }

    /// The far corner of an area of `size`, relative to its origin corner.
    /// A negative size extends the area towards the negative direction.
    pub fn relative_end_from_size(size: Position) -> Position {
        let end = |v: i32| if v >= 0 { v - 1 } else { v + 1 };
        Position::new(end(size.x), end(size.y), end(size.z))
    }

    pub fn abs(self) -> Position {
        Position::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl ops::Add<Position> for Position {
    type Output = Position;

    fn add(self, o: Position) -> Position {
        Position {
            x: self.x + o.x,
            y: self.y + o.y,
            z: self.z + o.z,
        }
    }
}

impl ops::Add<(i32, i32, i32)> for Position {
    type Output = Position;

    fn add(self, (x, y, z): (i32, i32, i32)) -> Position {
        Position {
            x: self.x + x,
            y: self.y + y,
            z: self.z + z,
        }
    }
}

impl ops::Sub<Position> for Position {
    type Output = Position;

    fn sub(self, o: Position) -> Position {
        Position {
            x: self.x - o.x,
            y: self.y - o.y,
            z: self.z - o.z,
        }
    }
}

impl ops::Sub<(i32, i32, i32)> for Position {
    type Output = Position;

    fn sub(self, (x, y, z): (i32, i32, i32)) -> Position {
        Position {
            x: self.x - x,
            y: self.y - y,
            z: self.z - z,
        }
    }
}

impl ops::Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        Position::new(-self.x, -self.y, -self.z)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::ZERO
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{},{},{}>", self.x, self.y, self.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::East,
    ];

    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    pub fn clockwise(&self) -> Direction {
        match *self {
            Direction::Down => Direction::Down,
            Direction::Up => Direction::Up,
            Direction::East => Direction::South,
            Direction::West => Direction::North,
            Direction::South => Direction::West,
            Direction::North => Direction::East,
        }
    }

    pub fn counter_clockwise(&self) -> Direction {
        match *self {
            Direction::Down => Direction::Down,
            Direction::Up => Direction::Up,
            Direction::East => Direction::North,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::North => Direction::West,
        }
    }

    pub fn rotate(self, rotation: Rotation) -> Direction {
        match rotation {
            Rotation::None => self,
            Rotation::Clockwise90 => self.clockwise(),
            Rotation::Clockwise180 => self.clockwise().clockwise(),
            Rotation::CounterClockwise90 => self.counter_clockwise(),
        }
    }

    /// `LeftRight` flips along Z (north/south), `FrontBack` along X (east/west).
    pub fn mirror(self, mirror: Mirror) -> Direction {
        match (mirror, self) {
            (Mirror::LeftRight, Direction::North | Direction::South) => self.opposite(),
            (Mirror::FrontBack, Direction::West | Direction::East) => self.opposite(),
            _ => self,
        }
    }

    pub fn get_offset(&self) -> (i32, i32, i32) {
        match *self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    pub fn as_string(&self) -> &'static str {
        match *self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }

    /// South-first horizontal index, matching yaw quarters (0 = south, 1 = west, ...).
    pub fn horizontal_index(&self) -> Option<usize> {
        match *self {
            Direction::South => Some(0),
            Direction::West => Some(1),
            Direction::North => Some(2),
            Direction::East => Some(3),
            _ => None,
        }
    }

    pub fn from_yaw(yaw: f32) -> Direction {
        let quarter = ((yaw / 90.0).round() as i32).rem_euclid(4) as usize;
        Direction::HORIZONTAL[quarter]
    }

    pub fn axis(&self) -> Axis {
        match *self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }
}
