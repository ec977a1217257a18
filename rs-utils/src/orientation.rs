use std::fmt;

use serde::{Deserialize, Serialize};

/// Reflection across one of the two horizontal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mirror {
    #[default]
    None,
    /// Flips Z: north and south trade places.
    LeftRight,
    /// Flips X: west and east trade places.
    FrontBack,
}

impl Mirror {
    pub const ALL: [Mirror; 3] = [Mirror::None, Mirror::LeftRight, Mirror::FrontBack];

    pub fn is_none(&self) -> bool {
        matches!(self, Mirror::None)
    }

    /// The same reflection expressed in axes turned by a quarter.
    pub fn swapped(self) -> Mirror {
        match self {
            Mirror::None => Mirror::None,
            Mirror::LeftRight => Mirror::FrontBack,
            Mirror::FrontBack => Mirror::LeftRight,
        }
    }

    /// Mirrors an index of a `count`-step horizontal rotation, step 0 facing south.
    pub fn mirror_index(&self, index: i32, count: i32) -> i32 {
        match self {
            Mirror::None => index,
            Mirror::LeftRight => (count / 2 - index).rem_euclid(count),
            Mirror::FrontBack => (-index).rem_euclid(count),
        }
    }

    pub fn as_string(&self) -> &'static str {
        match self {
            Mirror::None => "none",
            Mirror::LeftRight => "left_right",
            Mirror::FrontBack => "front_back",
        }
    }
}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_string())
    }
}

/// Quarter-turn rotation about the Y axis, clockwise when viewed from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    CounterClockwise90,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Clockwise90,
        Rotation::Clockwise180,
        Rotation::CounterClockwise90,
    ];

    pub fn quarter_turns(&self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 1,
            Rotation::Clockwise180 => 2,
            Rotation::CounterClockwise90 => 3,
        }
    }

    pub fn degrees(&self) -> i32 {
        self.quarter_turns() * 90
    }

    pub fn from_quarter_turns(turns: i32) -> Rotation {
        match turns.rem_euclid(4) {
            0 => Rotation::None,
            1 => Rotation::Clockwise90,
            2 => Rotation::Clockwise180,
            _ => Rotation::CounterClockwise90,
        }
    }

    /// Any multiple of 90, negative values included. Other angles are rejected.
    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(Rotation::from_quarter_turns(degrees / 90))
    }

    pub fn add(self, other: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    pub fn inverse(self) -> Rotation {
        Rotation::from_quarter_turns(-self.quarter_turns())
    }

    /// True for the two rotations that exchange the X and Z axes.
    pub fn is_quarter(&self) -> bool {
        matches!(self, Rotation::Clockwise90 | Rotation::CounterClockwise90)
    }

    pub fn rotate_index(&self, index: i32, count: i32) -> i32 {
        (index + self.quarter_turns() * count / 4).rem_euclid(count)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Wraps an angle into `[-180, 180)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 180.0 { wrapped - 360.0 } else { wrapped }
}
