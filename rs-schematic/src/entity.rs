use bevy::math::DVec3;

use crate::nbt::{Compound, Tag};

/// Stored entity: position relative to the region's origin corner, its
/// payload, and the entities riding it.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub pos: DVec3,
    pub nbt: Compound,
    pub passengers: Vec<EntityRecord>,
}

impl EntityRecord {
    pub fn new(pos: DVec3, nbt: Compound) -> Self {
        Self {
            pos,
            nbt,
            passengers: Vec::new(),
        }
    }

    pub fn with_passenger(mut self, passenger: EntityRecord) -> Self {
        self.passengers.push(passenger);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.nbt.get_str("id")
    }

    /// `(yaw, pitch)` from the `Rotation` list, zero when absent.
    pub fn rotation(&self) -> (f32, f32) {
        let Some(list) = self.nbt.get_list("Rotation") else {
            return (0.0, 0.0);
        };
        let yaw = list.first().and_then(Tag::as_f32).unwrap_or(0.0);
        let pitch = list.get(1).and_then(Tag::as_f32).unwrap_or(0.0);
        (yaw, pitch)
    }

    pub fn is_living(&self) -> bool {
        self.nbt.contains_key("Health")
    }

    /// Number of records in this tree, passengers included.
    pub fn count(&self) -> usize {
        1 + self.passengers.iter().map(EntityRecord::count).sum::<usize>()
    }
}

pub fn rotation_tag(yaw: f32, pitch: f32) -> Tag {
    Tag::List(vec![Tag::Float(yaw), Tag::Float(pitch)])
}
