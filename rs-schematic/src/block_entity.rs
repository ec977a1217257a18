use rs_utils::{Mirror, Position, Rotation};

use crate::nbt::{Compound, Tag};

/// Stored payload of a block entity. Transforms return new payloads; the
/// stored copy inside a region is never modified by placement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockEntityData {
    nbt: Compound,
}

impl BlockEntityData {
    pub fn new(nbt: Compound) -> Self {
        Self { nbt }
    }

    pub fn nbt(&self) -> &Compound {
        &self.nbt
    }

    pub fn into_nbt(self) -> Compound {
        self.nbt
    }

    pub fn id(&self) -> Option<&str> {
        self.nbt.get_str("id")
    }

    pub fn position(&self) -> Option<Position> {
        Some(Position::new(
            self.nbt.get_i32("x")?,
            self.nbt.get_i32("y")?,
            self.nbt.get_i32("z")?,
        ))
    }

    /// Copy of the payload with its embedded coordinates moved to `pos`.
    pub fn at_position(&self, pos: Position) -> Self {
        let mut nbt = self.nbt.clone();
        nbt.insert("x", pos.x);
        nbt.insert("y", pos.y);
        nbt.insert("z", pos.z);
        Self { nbt }
    }

    pub fn rotation16(&self) -> Option<i32> {
        self.nbt.get_i32("Rot")
    }

    pub fn mirrored(self, mirror: Mirror) -> Self {
        self.map_rotation16(|rot| mirror.mirror_index(rot, 16))
    }

    pub fn rotated(self, rotation: Rotation) -> Self {
        self.map_rotation16(|rot| rotation.rotate_index(rot, 16))
    }

    fn map_rotation16(mut self, f: impl FnOnce(i32) -> i32) -> Self {
        if let Some(rot) = self.rotation16() {
            self.nbt.insert("Rot", Tag::Byte(f(rot.rem_euclid(16)) as i8));
        }
        self
    }

    pub fn has_inventory_contents(&self) -> bool {
        self.nbt
            .get_list("Items")
            .is_some_and(|items| !items.is_empty())
    }

    pub fn without_inventory_contents(&self) -> Self {
        let mut nbt = self.nbt.clone();
        if nbt.contains_key("Items") {
            nbt.insert("Items", Tag::List(Vec::new()));
        }
        Self { nbt }
    }
}

impl From<Compound> for BlockEntityData {
    fn from(nbt: Compound) -> Self {
        Self::new(nbt)
    }
}
