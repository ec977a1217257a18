use std::collections::{BTreeMap, BTreeSet};

use rs_schematic::{LayerRange, Schematic};
use rs_utils::{ChunkPos, IntBox, Mirror, Position, Rotation};
use serde::{Deserialize, Serialize};

use crate::transform::PlacementTransform;

/// Where one region of a schematic goes, relative to the placement origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubRegionPlacement {
    /// Offset of the region's origin corner, in un-transformed schematic space.
    pub pos: Position,
    pub rotation: Rotation,
    pub mirror: Mirror,
    pub enabled: bool,
    pub ignore_entities: bool,
}

impl Default for SubRegionPlacement {
    fn default() -> Self {
        Self {
            pos: Position::ZERO,
            rotation: Rotation::None,
            mirror: Mirror::None,
            enabled: true,
            ignore_entities: false,
        }
    }
}

impl SubRegionPlacement {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    pub fn rotated(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }

    pub fn mirrored(self, mirror: Mirror) -> Self {
        Self { mirror, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicPlacement {
    pub origin: Position,
    pub rotation: Rotation,
    pub mirror: Mirror,
    pub sub_regions: BTreeMap<String, SubRegionPlacement>,
    pub ignore_entities: bool,
    /// `None` accepts the whole world.
    pub layer_range: Option<LayerRange>,
}

impl SchematicPlacement {
    pub fn new(origin: Position) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    /// A placement with every region of `schematic` enabled at offset zero.
    pub fn for_schematic(schematic: &Schematic, origin: Position) -> Self {
        let mut placement = Self::new(origin);
        for name in schematic.region_names() {
            placement
                .sub_regions
                .insert(name.to_string(), SubRegionPlacement::default());
        }
        placement
    }

    pub fn with_region(mut self, name: &str, sub: SubRegionPlacement) -> Self {
        self.sub_regions.insert(name.to_string(), sub);
        self
    }

    pub fn rotated(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }

    pub fn mirrored(self, mirror: Mirror) -> Self {
        Self { mirror, ..self }
    }

    pub fn enabled_regions(&self) -> impl Iterator<Item = (&str, &SubRegionPlacement)> {
        self.sub_regions
            .iter()
            .filter(|(_, sub)| sub.enabled)
            .map(|(name, sub)| (name.as_str(), sub))
    }

    pub fn layer_range(&self) -> LayerRange {
        self.layer_range.unwrap_or_default()
    }

    pub fn transform_for(&self, sub: &SubRegionPlacement, size: Position) -> PlacementTransform {
        PlacementTransform::new(
            self.origin,
            self.mirror,
            self.rotation,
            sub.pos,
            size,
            sub.mirror,
            sub.rotation,
        )
    }

    /// Absolute box covered by the named region.
    pub fn region_world_box(&self, schematic: &Schematic, name: &str) -> Option<IntBox> {
        let sub = self.sub_regions.get(name)?;
        let region = schematic.region(name)?;
        self.transform_for(sub, region.size).world_box(region.size)
    }

    /// Enabled regions whose box overlaps the chunk column.
    pub fn regions_touching_chunk(&self, schematic: &Schematic, chunk: ChunkPos) -> Vec<String> {
        let column = chunk.column_box();
        self.enabled_regions()
            .filter(|(name, _)| {
                self.region_world_box(schematic, name)
                    .is_some_and(|b| b.intersects(&column))
            })
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn box_within_chunk_for_region(
        &self,
        schematic: &Schematic,
        name: &str,
        chunk: ChunkPos,
    ) -> Option<IntBox> {
        self.region_world_box(schematic, name)?
            .intersection(&chunk.column_box())
    }

    /// Every chunk column an enabled region overlaps, in order.
    pub fn touched_chunks(&self, schematic: &Schematic) -> Vec<ChunkPos> {
        let mut chunks = BTreeSet::new();
        for (name, _) in self.enabled_regions() {
            if let Some(world_box) = self.region_world_box(schematic, name) {
                chunks.extend(world_box.chunks());
            }
        }
        chunks.into_iter().collect()
    }
}
