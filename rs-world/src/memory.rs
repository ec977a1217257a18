use std::collections::{BTreeMap, HashMap};

use bevy::math::DVec3;
use rs_schematic::{BlockEntityData, BlockState, Compound};
use rs_utils::{
    Axis, CHUNK_SIZE, Position, WORLD_HEIGHT, WORLD_MIN_Y, world_max_for_axis, world_min_for_axis,
};
use tracing::trace;

use crate::{Entity, UpdateFlags, World, WorldError, WorldResult};

const SECTION_HEIGHT: i32 = 16;
const SECTION_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * SECTION_HEIGHT) as usize;

#[derive(Clone, Default)]
struct ChunkColumn {
    sections: Vec<Option<Vec<BlockState>>>,
}

impl ChunkColumn {
    fn new() -> Self {
        Self {
            sections: vec![None; (WORLD_HEIGHT / SECTION_HEIGHT) as usize],
        }
    }

    fn index(local_x: i32, local_y: i32, local_z: i32) -> usize {
        (local_y * CHUNK_SIZE * CHUNK_SIZE + local_z * CHUNK_SIZE + local_x) as usize
    }

    fn get(&self, pos: Position) -> BlockState {
        let y = pos.y - WORLD_MIN_Y;
        let Some(section) = self
            .sections
            .get((y / SECTION_HEIGHT) as usize)
            .and_then(|s| s.as_ref())
        else {
            return BlockState::AIR;
        };
        let idx = Self::index(
            pos.x.rem_euclid(CHUNK_SIZE),
            y % SECTION_HEIGHT,
            pos.z.rem_euclid(CHUNK_SIZE),
        );
        section.get(idx).copied().unwrap_or(BlockState::AIR)
    }

    fn set(&mut self, pos: Position, state: BlockState) {
        let y = pos.y - WORLD_MIN_Y;
        let Some(slot) = self.sections.get_mut((y / SECTION_HEIGHT) as usize) else {
            return;
        };
        let section = slot.get_or_insert_with(|| vec![BlockState::AIR; SECTION_VOLUME]);
        let idx = Self::index(
            pos.x.rem_euclid(CHUNK_SIZE),
            y % SECTION_HEIGHT,
            pos.z.rem_euclid(CHUNK_SIZE),
        );
        section[idx] = state;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedTick {
    pub pos: Position,
    pub delay: i64,
    pub priority: i32,
}

/// Chunk-column world kept in memory. Besides block storage it records the
/// side effects a placement produces so they can be inspected afterwards.
#[derive(Default)]
pub struct MemoryWorld {
    chunks: HashMap<(i32, i32), ChunkColumn>,
    block_entities: HashMap<Position, BlockEntityData>,
    pub writes: usize,
    pub callbacks_fired: usize,
    pub notifications: Vec<Position>,
    pub ticks: Vec<RecordedTick>,
    pub entities: Vec<Entity>,
    suppress_callbacks: bool,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    fn in_world(pos: Position) -> bool {
        [Axis::X, Axis::Y, Axis::Z].into_iter().all(|axis| {
            let v = pos.get(axis);
            v >= world_min_for_axis(axis) && v <= world_max_for_axis(axis)
        })
    }

    /// Non-air cells, ordered by position.
    pub fn blocks_snapshot(&self) -> BTreeMap<Position, BlockState> {
        let mut out = BTreeMap::new();
        for (&(cx, cz), column) in &self.chunks {
            for (section_y, section) in column.sections.iter().enumerate() {
                let Some(section) = section else {
                    continue;
                };
                for (idx, state) in section.iter().enumerate() {
                    if state.is_air() {
                        continue;
                    }
                    let idx = idx as i32;
                    let local_x = idx % CHUNK_SIZE;
                    let local_z = (idx / CHUNK_SIZE) % CHUNK_SIZE;
                    let local_y = idx / (CHUNK_SIZE * CHUNK_SIZE);
                    let pos = Position::new(
                        cx * CHUNK_SIZE + local_x,
                        WORLD_MIN_Y + section_y as i32 * SECTION_HEIGHT + local_y,
                        cz * CHUNK_SIZE + local_z,
                    );
                    out.insert(pos, *state);
                }
            }
        }
        out
    }

    pub fn block_entities(&self) -> &HashMap<Position, BlockEntityData> {
        &self.block_entities
    }

    /// Total spawned entities, passengers included.
    pub fn entity_count(&self) -> usize {
        self.entities.iter().map(Entity::count).sum()
    }

    /// Resets the recorded side effects, keeping the world content.
    pub fn clear_records(&mut self) {
        self.writes = 0;
        self.callbacks_fired = 0;
        self.notifications.clear();
        self.ticks.clear();
        self.entities.clear();
    }
}

impl World for MemoryWorld {
    fn block_state(&self, pos: Position) -> BlockState {
        if !Self::in_world(pos) {
            return BlockState::AIR;
        }
        let key = (pos.x.div_euclid(CHUNK_SIZE), pos.z.div_euclid(CHUNK_SIZE));
        self.chunks
            .get(&key)
            .map(|column| column.get(pos))
            .unwrap_or(BlockState::AIR)
    }

    fn set_block_state(&mut self, pos: Position, state: BlockState, flags: UpdateFlags) -> bool {
        if !Self::in_world(pos) {
            return false;
        }
        let old = self.block_state(pos);
        if old == state {
            return false;
        }

        let key = (pos.x.div_euclid(CHUNK_SIZE), pos.z.div_euclid(CHUNK_SIZE));
        self.chunks
            .entry(key)
            .or_insert_with(ChunkColumn::new)
            .set(pos, state);
        self.writes += 1;
        if !self.suppress_callbacks {
            self.callbacks_fired += 1;
        }
        if flags.contains(UpdateFlags::NOTIFY_NEIGHBORS) {
            self.notifications.push(pos);
        }

        match state.block_entity_id() {
            Some(id)
                if old.block_entity_id() != Some(id) || !self.block_entities.contains_key(&pos) =>
            {
                let fresh = Compound::new()
                    .with("id", id)
                    .with("x", pos.x)
                    .with("y", pos.y)
                    .with("z", pos.z);
                self.block_entities.insert(pos, BlockEntityData::new(fresh));
            }
            Some(_) => {}
            None => {
                self.block_entities.remove(&pos);
            }
        }
        trace!("set {} at {:?} (flags {:#x})", state, pos, flags.0);
        true
    }

    fn block_entity(&self, pos: Position) -> Option<&BlockEntityData> {
        self.block_entities.get(&pos)
    }

    fn clear_block_entity(&mut self, pos: Position) {
        if let Some(data) = self.block_entities.get_mut(&pos) {
            *data = data.without_inventory_contents();
        }
    }

    fn load_block_entity(&mut self, pos: Position, nbt: Compound) -> WorldResult<()> {
        if !Self::in_world(pos) {
            return Err(WorldError::OutOfBounds(pos));
        }
        let expected = self.block_state(pos).block_entity_id();
        let Some(existing) = self.block_entities.get_mut(&pos) else {
            return Err(WorldError::NoBlockEntity(pos));
        };
        let found = nbt.get_str("id");
        if let (Some(expected), Some(found)) = (expected, found)
            && expected != found
        {
            return Err(WorldError::IncompatibleBlockEntity {
                pos,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        let data = BlockEntityData::new(nbt);
        if data.position() != Some(pos) {
            return Err(WorldError::InvalidPayload {
                pos,
                reason: format!("payload anchored at {:?}", data.position()),
            });
        }
        *existing = data;
        Ok(())
    }

    fn schedule_tick(&mut self, pos: Position, delay: i64, priority: i32) {
        self.ticks.push(RecordedTick {
            pos,
            delay,
            priority,
        });
    }

    fn notify_neighbors(&mut self, pos: Position) {
        self.notifications.push(pos);
    }

    fn spawn_entity(&mut self, entity: Entity) -> bool {
        let DVec3 { x, y, z } = entity.pos;
        let cell = Position::new(x.floor() as i32, y.floor() as i32, z.floor() as i32);
        if !Self::in_world(cell) {
            return false;
        }
        self.entities.push(entity);
        true
    }

    fn is_within_bounds(&self, min: Position, max: Position) -> bool {
        Self::in_world(min) && Self::in_world(max)
    }

    fn block_added_callbacks_suppressed(&self) -> bool {
        self.suppress_callbacks
    }

    fn set_block_added_callbacks_suppressed(&mut self, suppressed: bool) {
        self.suppress_callbacks = suppressed;
    }
}
