use std::ops;

use rs_schematic::{BlockEntityData, BlockState, Compound};
use rs_utils::Position;

pub mod entity;
pub mod error;
pub mod memory;
pub mod suppress;

pub use entity::{Entity, LivingRotation};
pub use error::{WorldError, WorldResult};
pub use memory::{MemoryWorld, RecordedTick};
pub use suppress::SuppressedCallbacks;

/// Side effects requested with a block write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UpdateFlags(pub u8);

impl UpdateFlags {
    pub const NONE: UpdateFlags = UpdateFlags(0);
    pub const NOTIFY_NEIGHBORS: UpdateFlags = UpdateFlags(0x01);
    pub const SEND_TO_CLIENTS: UpdateFlags = UpdateFlags(0x02);
    pub const NO_RERENDER: UpdateFlags = UpdateFlags(0x04);
    pub const NO_OBSERVERS: UpdateFlags = UpdateFlags(0x10);

    pub const fn union(self, other: UpdateFlags) -> UpdateFlags {
        UpdateFlags(self.0 | other.0)
    }

    pub fn contains(&self, other: UpdateFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl ops::BitOr for UpdateFlags {
    type Output = UpdateFlags;

    fn bitor(self, rhs: UpdateFlags) -> UpdateFlags {
        self.union(rhs)
    }
}

/// The mutable voxel world a structure is placed into.
pub trait World {
    fn block_state(&self, pos: Position) -> BlockState;

    /// State with context-dependent properties resolved.
    fn actual_block_state(&self, pos: Position) -> BlockState {
        self.block_state(pos)
    }

    /// Returns false if nothing changed or the write was refused.
    fn set_block_state(&mut self, pos: Position, state: BlockState, flags: UpdateFlags) -> bool;

    fn block_entity(&self, pos: Position) -> Option<&BlockEntityData>;

    /// Empties the block entity's inventory, if it has one.
    fn clear_block_entity(&mut self, pos: Position);

    /// Reads `nbt` into the block entity already present at `pos`.
    fn load_block_entity(&mut self, pos: Position, nbt: Compound) -> WorldResult<()>;

    fn schedule_tick(&mut self, pos: Position, delay: i64, priority: i32);

    fn notify_neighbors(&mut self, pos: Position);

    /// Spawns the entity together with its passengers.
    fn spawn_entity(&mut self, entity: Entity) -> bool;

    fn is_within_bounds(&self, min: Position, max: Position) -> bool;

    fn block_added_callbacks_suppressed(&self) -> bool;

    fn set_block_added_callbacks_suppressed(&mut self, suppressed: bool);
}
