use std::collections::{BTreeMap, HashMap};

use rs_utils::{Axis, Position};

use crate::block_entity::BlockEntityData;
use crate::block_state::BlockState;
use crate::entity::EntityRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub delay: i64,
    pub priority: i32,
}

/// Dense voxel grid indexed from the region's minimum corner.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStateContainer {
    size: Position,
    states: Vec<BlockState>,
}

impl BlockStateContainer {
    /// `size` is taken by magnitude; the grid starts filled with air.
    pub fn new(size: Position) -> Self {
        let size = size.abs();
        let volume = size.x as usize * size.y as usize * size.z as usize;
        Self {
            size,
            states: vec![BlockState::AIR; volume],
        }
    }

    pub fn size(&self) -> Position {
        self.size
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0
            || pos.y < 0
            || pos.z < 0
            || pos.x >= self.size.x
            || pos.y >= self.size.y
            || pos.z >= self.size.z
        {
            return None;
        }
        let (sx, sz) = (self.size.x as usize, self.size.z as usize);
        Some(pos.y as usize * sx * sz + pos.z as usize * sx + pos.x as usize)
    }

    pub fn get(&self, pos: Position) -> Option<BlockState> {
        self.index(pos).and_then(|idx| self.states.get(idx).copied())
    }

    pub fn set(&mut self, pos: Position, state: BlockState) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        self.states[idx] = state;
        true
    }

    pub fn fill(&mut self, state: BlockState) {
        self.states.fill(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("region has zero size on the {0:?} axis")]
    ZeroSize(Axis),

    #[error("block container is {actual:?}, region size needs {expected:?}")]
    ContainerMismatch { expected: Position, actual: Position },

    #[error("block container holds {actual} states, expected {expected}")]
    ContainerLength { expected: usize, actual: usize },
}

/// One named box of a schematic. `size` components may be negative: the sign
/// says which way the region extends from its origin corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub size: Position,
    pub blocks: BlockStateContainer,
    pub block_entities: HashMap<Position, BlockEntityData>,
    pub entities: Vec<EntityRecord>,
    pub scheduled_ticks: BTreeMap<Position, ScheduledTick>,
}

impl Region {
    pub fn new(size: Position) -> Self {
        Self {
            size,
            blocks: BlockStateContainer::new(size),
            block_entities: HashMap::new(),
            entities: Vec::new(),
            scheduled_ticks: BTreeMap::new(),
        }
    }

    pub fn block(&self, pos: Position) -> Option<BlockState> {
        self.blocks.get(pos)
    }

    pub fn set_block(&mut self, pos: Position, state: BlockState) -> bool {
        self.blocks.set(pos, state)
    }

    pub fn set_block_entity(&mut self, pos: Position, data: impl Into<BlockEntityData>) {
        self.block_entities.insert(pos, data.into());
    }

    pub fn add_entity(&mut self, entity: EntityRecord) {
        self.entities.push(entity);
    }

    pub fn schedule_tick(&mut self, pos: Position, delay: i64, priority: i32) {
        self.scheduled_ticks
            .insert(pos, ScheduledTick { delay, priority });
    }

    /// Checks that the stored grid agrees with the declared size.
    pub fn validate(&self) -> Result<(), RegionError> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if self.size.get(axis) == 0 {
                return Err(RegionError::ZeroSize(axis));
            }
        }
        let expected = self.size.abs();
        if self.blocks.size() != expected {
            return Err(RegionError::ContainerMismatch {
                expected,
                actual: self.blocks.size(),
            });
        }
        let volume = expected.x as usize * expected.y as usize * expected.z as usize;
        if self.blocks.len() != volume {
            return Err(RegionError::ContainerLength {
                expected: volume,
                actual: self.blocks.len(),
            });
        }
        Ok(())
    }
}
