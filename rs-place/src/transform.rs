use bevy::math::DVec3;
use rs_schematic::{BlockEntityData, BlockState};
use rs_utils::{IntBox, Mirror, Position, Rotation};

use crate::clip::region_local_box;
use crate::entities::{mirrored_yaw, rotated_yaw};

/// Mirrors `pos` about the local origin, then rotates it.
pub fn transform_position(pos: Position, mirror: Mirror, rotation: Rotation) -> Position {
    let Position { x, y, z } = pos;
    let (x, z) = match mirror {
        Mirror::None => (x, z),
        Mirror::LeftRight => (x, -z),
        Mirror::FrontBack => (-x, z),
    };
    let (x, z) = match rotation {
        Rotation::None => (x, z),
        Rotation::Clockwise90 => (-z, x),
        Rotation::Clockwise180 => (-x, -z),
        Rotation::CounterClockwise90 => (z, -x),
    };
    Position::new(x, y, z)
}

/// Exact inverse of [`transform_position`].
pub fn reverse_transform_position(pos: Position, mirror: Mirror, rotation: Rotation) -> Position {
    let unrotated = transform_position(pos, Mirror::None, rotation.inverse());
    transform_position(unrotated, mirror, Rotation::None)
}

/// Continuous counterpart of [`transform_position`]. A point inside cell `p`
/// lands inside the cell `transform_position(p)` maps to.
pub fn transform_vec(vec: DVec3, mirror: Mirror, rotation: Rotation) -> DVec3 {
    let DVec3 { x, y, z } = vec;
    let (x, z) = match mirror {
        Mirror::None => (x, z),
        Mirror::LeftRight => (x, 1.0 - z),
        Mirror::FrontBack => (1.0 - x, z),
    };
    let (x, z) = match rotation {
        Rotation::None => (x, z),
        Rotation::Clockwise90 => (1.0 - z, x),
        Rotation::Clockwise180 => (1.0 - x, 1.0 - z),
        Rotation::CounterClockwise90 => (z, 1.0 - x),
    };
    DVec3::new(x, y, z)
}

pub fn compose_rotations(first: Rotation, second: Rotation) -> Rotation {
    first.add(second)
}

/// Relabels an inner mirror for use after the outer rotation. Quarter turns
/// exchange the horizontal axes, so the mirror axis is exchanged with them.
pub fn combine_mirrors(outer_rotation: Rotation, inner_mirror: Mirror) -> Mirror {
    if outer_rotation.is_quarter() {
        inner_mirror.swapped()
    } else {
        inner_mirror
    }
}

/// Both stages of a sub-region's placement.
///
/// Region-local voxel coordinates are counted from the region's minimum
/// corner. They are moved to be relative to the region's origin corner, put
/// through the outer mirror and rotation, then through the sub-region's own
/// mirror and rotation, and finally offset by `anchor`, which is the region
/// origin after the outer transform plus the placement origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementTransform {
    pub outer_mirror: Mirror,
    pub outer_rotation: Rotation,
    pub sub_mirror: Mirror,
    pub sub_rotation: Rotation,
    pub anchor: Position,
    pub min_offset: Position,
}

impl PlacementTransform {
    /// `region_pos` and `region_size` are in the un-transformed schematic
    /// space; `origin` is the absolute placement origin.
    pub fn new(
        origin: Position,
        outer_mirror: Mirror,
        outer_rotation: Rotation,
        region_pos: Position,
        region_size: Position,
        sub_mirror: Mirror,
        sub_rotation: Rotation,
    ) -> Self {
        let end_rel = Position::relative_end_from_size(region_size) + region_pos;
        let min_rel = Position::min_corner(region_pos, end_rel);
        Self {
            outer_mirror,
            outer_rotation,
            sub_mirror,
            sub_rotation,
            anchor: transform_position(region_pos, outer_mirror, outer_rotation) + origin,
            min_offset: min_rel - region_pos,
        }
    }

    pub fn combined_mirror(&self) -> Mirror {
        combine_mirrors(self.outer_rotation, self.sub_mirror)
    }

    pub fn combined_rotation(&self) -> Rotation {
        compose_rotations(self.outer_rotation, self.sub_rotation)
    }

    /// World position of a region-local voxel.
    pub fn placement_position(&self, local: Position) -> Position {
        let rel = local + self.min_offset;
        let outer = transform_position(rel, self.outer_mirror, self.outer_rotation);
        transform_position(outer, self.sub_mirror, self.sub_rotation) + self.anchor
    }

    /// Region-local voxel that lands on `world`.
    pub fn reverse_placement_position(&self, world: Position) -> Position {
        let rel = world - self.anchor;
        let sub = reverse_transform_position(rel, self.sub_mirror, self.sub_rotation);
        reverse_transform_position(sub, self.outer_mirror, self.outer_rotation) - self.min_offset
    }

    /// World box covered by a region of `size`; `None` if the region is empty.
    pub fn world_box(&self, size: Position) -> Option<IntBox> {
        let local = region_local_box(size)?;
        Some(IntBox::from_corners(
            self.placement_position(local.min),
            self.placement_position(local.max),
        ))
    }

    /// World position of a continuous point stored relative to the region's
    /// origin corner.
    pub fn placement_vec(&self, vec: DVec3) -> DVec3 {
        let outer = transform_vec(vec, self.outer_mirror, self.outer_rotation);
        let sub = transform_vec(outer, self.sub_mirror, self.sub_rotation);
        sub + cell_vec(self.anchor)
    }

    pub fn transform_state(&self, state: BlockState) -> BlockState {
        state
            .with_mirror(self.outer_mirror)
            .with_mirror(self.combined_mirror())
            .with_rotation(self.combined_rotation())
    }

    /// Re-anchors a stored payload at `pos` and turns its orientation fields
    /// the same way [`Self::transform_state`] turns the block.
    pub fn transform_block_entity(&self, data: &BlockEntityData, pos: Position) -> BlockEntityData {
        data.at_position(pos)
            .mirrored(self.outer_mirror)
            .mirrored(self.combined_mirror())
            .rotated(self.combined_rotation())
    }

    pub fn transform_yaw(&self, yaw: f32) -> f32 {
        let mut new_yaw = mirrored_yaw(yaw, self.outer_mirror);
        new_yaw = mirrored_yaw(new_yaw, self.combined_mirror());
        new_yaw + (yaw - rotated_yaw(yaw, self.combined_rotation()))
    }
}

pub(crate) fn cell_vec(pos: Position) -> DVec3 {
    DVec3::new(pos.x as f64, pos.y as f64, pos.z as f64)
}
