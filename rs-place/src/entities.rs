use bevy::math::DVec3;
use rs_schematic::{EntityRecord, LayerRange};
use rs_utils::{ChunkPos, Mirror, Position, Rotation, wrap_degrees};
use rs_world::{Entity, World};
use tracing::trace;

use crate::transform::PlacementTransform;

/// Which transformed entities a paste keeps.
#[derive(Debug, Clone, Copy)]
pub enum EntityFilter<'a> {
    Layers(&'a LayerRange),
    Chunk(ChunkPos),
}

impl EntityFilter<'_> {
    pub fn accepts(&self, pos: DVec3) -> bool {
        match self {
            EntityFilter::Layers(range) => range.contains(Position::new(
                pos.x.floor() as i32,
                pos.y.floor() as i32,
                pos.z.floor() as i32,
            )),
            EntityFilter::Chunk(chunk) => chunk.contains_xz(pos.x, pos.z),
        }
    }
}

/// Yaw after reflecting the entity. Yaw 0 faces south, 90 faces west.
pub fn mirrored_yaw(yaw: f32, mirror: Mirror) -> f32 {
    match mirror {
        Mirror::None => yaw,
        Mirror::LeftRight => 180.0 - yaw,
        Mirror::FrontBack => -yaw,
    }
}

pub fn rotated_yaw(yaw: f32, rotation: Rotation) -> f32 {
    wrap_degrees(yaw) - rotation.degrees() as f32
}

/// Spawns the accepted records with their passengers. Returns the number of
/// entities that made it into the world, passengers included.
pub fn place_entities<W: World + ?Sized>(
    world: &mut W,
    records: &[EntityRecord],
    transform: &PlacementTransform,
    filter: EntityFilter,
) -> usize {
    let mut spawned = 0;
    for record in records {
        let pos = transform.placement_vec(record.pos);
        if !filter.accepts(pos) {
            continue;
        }
        let Some(entity) = build_entity(record, transform) else {
            trace!("dropping entity record without a type at {:?}", record.pos);
            continue;
        };
        let count = entity.count();
        if world.spawn_entity(entity) {
            spawned += count;
        }
    }
    spawned
}

fn build_entity(record: &EntityRecord, transform: &PlacementTransform) -> Option<Entity> {
    let mut entity = Entity::from_record(record)?;
    let pos = transform.placement_vec(record.pos);
    let yaw = transform.transform_yaw(entity.yaw);
    let pitch = entity.pitch;
    entity.set_location_and_angles(pos, yaw, pitch);
    entity.passengers = record
        .passengers
        .iter()
        .filter_map(|passenger| build_entity(passenger, transform))
        .collect();
    Some(entity)
}
