use bevy::math::DVec3;
use rs_schematic::{Compound, EntityRecord};

/// Yaw fields only living entities carry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LivingRotation {
    pub head_yaw: f32,
    pub prev_head_yaw: f32,
    pub body_yaw: f32,
    pub prev_body_yaw: f32,
}

impl LivingRotation {
    pub fn uniform(yaw: f32) -> Self {
        Self {
            head_yaw: yaw,
            prev_head_yaw: yaw,
            body_yaw: yaw,
            prev_body_yaw: yaw,
        }
    }
}

/// An entity ready to be spawned, with the entities riding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: String,
    pub pos: DVec3,
    pub yaw: f32,
    pub pitch: f32,
    pub prev_yaw: f32,
    pub prev_pitch: f32,
    pub living: Option<LivingRotation>,
    pub nbt: Compound,
    pub passengers: Vec<Entity>,
}

impl Entity {
    /// Builds the entity for one record, without its passengers. Records
    /// without an `id` cannot be instantiated.
    pub fn from_record(record: &EntityRecord) -> Option<Entity> {
        let kind = record.id()?.to_string();
        if kind.is_empty() {
            return None;
        }
        let (yaw, pitch) = record.rotation();
        Some(Entity {
            kind,
            pos: record.pos,
            yaw,
            pitch,
            prev_yaw: yaw,
            prev_pitch: pitch,
            living: record.is_living().then(|| LivingRotation::uniform(yaw)),
            nbt: record.nbt.clone(),
            passengers: Vec::new(),
        })
    }

    pub fn set_location_and_angles(&mut self, pos: DVec3, yaw: f32, pitch: f32) {
        self.pos = pos;
        self.yaw = yaw;
        self.pitch = pitch;
        self.prev_yaw = yaw;
        self.prev_pitch = pitch;
        if let Some(living) = self.living.as_mut() {
            *living = LivingRotation::uniform(yaw);
        }
    }

    pub fn count(&self) -> usize {
        1 + self.passengers.iter().map(Entity::count).sum::<usize>()
    }
}
