use std::fmt;

use rs_utils::{Axis, Direction, Mirror, Rotation};

use crate::registry::{self, BlockInfo, OrientationKind};

/// Orientation-dependent part of a block state. Which variant a block uses is
/// fixed by its registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    None,
    Facing(Direction),
    Axis(Axis),
    Rotation16(u8),
}

impl Orientation {
    fn default_for(kind: OrientationKind) -> Orientation {
        match kind {
            OrientationKind::None => Orientation::None,
            OrientationKind::Facing | OrientationKind::HorizontalFacing => {
                Orientation::Facing(Direction::North)
            }
            OrientationKind::Axis => Orientation::Axis(Axis::Y),
            OrientationKind::Rotation16 => Orientation::Rotation16(0),
        }
    }

    pub fn mirror(self, mirror: Mirror) -> Orientation {
        match self {
            Orientation::Facing(dir) => Orientation::Facing(dir.mirror(mirror)),
            Orientation::Rotation16(rot) => {
                Orientation::Rotation16(mirror.mirror_index(rot as i32, 16) as u8)
            }
            other => other,
        }
    }

    pub fn rotate(self, rotation: Rotation) -> Orientation {
        match self {
            Orientation::Facing(dir) => Orientation::Facing(dir.rotate(rotation)),
            Orientation::Axis(axis) => Orientation::Axis(axis.rotate(rotation)),
            Orientation::Rotation16(rot) => {
                Orientation::Rotation16(rotation.rotate_index(rot as i32, 16) as u8)
            }
            Orientation::None => Orientation::None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockState {
    id: u16,
    orientation: Orientation,
}

impl BlockState {
    pub const AIR: BlockState = BlockState {
        id: registry::AIR,
        orientation: Orientation::None,
    };
    pub const STRUCTURE_VOID: BlockState = BlockState {
        id: registry::STRUCTURE_VOID,
        orientation: Orientation::None,
    };
    pub const BARRIER: BlockState = BlockState {
        id: registry::BARRIER,
        orientation: Orientation::None,
    };

    /// Default state of a block: north-facing, Y axis, or rotation 0.
    pub fn new(id: u16) -> Self {
        Self {
            id,
            orientation: Orientation::default_for(registry::orientation_kind(id)),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        registry::block_id(key).map(Self::new)
    }

    /// Returns `None` if the block has no such facing (e.g. `up` on stairs).
    pub fn with_facing(self, facing: Direction) -> Option<Self> {
        match registry::orientation_kind(self.id) {
            OrientationKind::Facing => {}
            OrientationKind::HorizontalFacing if facing.axis() != Axis::Y => {}
            _ => return None,
        }
        Some(Self {
            orientation: Orientation::Facing(facing),
            ..self
        })
    }

    pub fn with_axis(self, axis: Axis) -> Option<Self> {
        (registry::orientation_kind(self.id) == OrientationKind::Axis).then_some(Self {
            orientation: Orientation::Axis(axis),
            ..self
        })
    }

    pub fn with_rotation16(self, rotation: u8) -> Option<Self> {
        (registry::orientation_kind(self.id) == OrientationKind::Rotation16).then_some(Self {
            orientation: Orientation::Rotation16(rotation % 16),
            ..self
        })
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn facing(&self) -> Option<Direction> {
        match self.orientation {
            Orientation::Facing(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn info(&self) -> Option<&'static BlockInfo> {
        registry::block_info(self.id)
    }

    pub fn is_air(&self) -> bool {
        self.id == registry::AIR
    }

    /// Structure void: "leave the world untouched here".
    pub fn is_void(&self) -> bool {
        self.id == registry::STRUCTURE_VOID
    }

    pub fn supports_mirror(&self) -> bool {
        matches!(
            self.orientation,
            Orientation::Facing(_) | Orientation::Rotation16(_)
        )
    }

    pub fn supports_rotation(&self) -> bool {
        !matches!(self.orientation, Orientation::None)
    }

    pub fn has_block_entity(&self) -> bool {
        self.info().is_some_and(|info| info.block_entity.is_some())
    }

    pub fn block_entity_id(&self) -> Option<&'static str> {
        self.info().and_then(|info| info.block_entity)
    }

    pub fn with_mirror(self, mirror: Mirror) -> Self {
        if mirror.is_none() || !self.supports_mirror() {
            return self;
        }
        Self {
            orientation: self.orientation.mirror(mirror),
            ..self
        }
    }

    pub fn with_rotation(self, rotation: Rotation) -> Self {
        if rotation == Rotation::None || !self.supports_rotation() {
            return self;
        }
        Self {
            orientation: self.orientation.rotate(rotation),
            ..self
        }
    }
}

impl Default for BlockState {
    fn default() -> Self {
        BlockState::AIR
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match registry::block_registry_key(self.id) {
            Some(key) => write!(f, "{key}")?,
            None => write!(f, "block#{}", self.id)?,
        }
        match self.orientation {
            Orientation::None => Ok(()),
            Orientation::Facing(dir) => write!(f, "[facing={}]", dir.as_string()),
            Orientation::Axis(axis) => write!(f, "[axis={}]", axis.as_string()),
            Orientation::Rotation16(rot) => write!(f, "[rotation={rot}]"),
        }
    }
}

impl fmt::Debug for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
