use rs_schematic::LayerRange;
use rs_utils::{ChunkPos, IntBox, Position};

use crate::transform::PlacementTransform;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipError {
    #[error("clipped box {min:?}..{max:?} is outside the region container of size {size:?}")]
    OutsideRegion {
        min: Position,
        max: Position,
        size: Position,
    },
}

/// Every voxel of a region of `size`, counted from its minimum corner.
pub fn region_local_box(size: Position) -> Option<IntBox> {
    let size = size.abs();
    if size.x == 0 || size.y == 0 || size.z == 0 {
        return None;
    }
    Some(IntBox {
        min: Position::ZERO,
        max: size - (1, 1, 1),
    })
}

/// Local voxels whose world image lies inside `range`.
pub fn layer_range_clamped_box(
    transform: &PlacementTransform,
    size: Position,
    range: &LayerRange,
) -> Option<IntBox> {
    let world = transform.world_box(size)?;
    if !range.intersects_box(world.min, world.max) {
        return None;
    }
    let axis = range.axis;
    let min = world.min.with(axis, range.clamp_value(axis, world.min.get(axis)));
    let max = world.max.with(axis, range.clamp_value(axis, world.max.get(axis)));
    let local = IntBox::from_corners(
        transform.reverse_placement_position(min),
        transform.reverse_placement_position(max),
    );
    local.intersection(&region_local_box(size)?)
}

/// Local voxels whose world image lies inside the chunk column. `Ok(None)`
/// means the region does not reach the chunk at all.
pub fn chunk_clamped_box(
    transform: &PlacementTransform,
    size: Position,
    chunk: ChunkPos,
) -> Result<Option<IntBox>, ClipError> {
    let Some(world) = transform.world_box(size) else {
        return Ok(None);
    };
    let Some(within) = world.intersection(&chunk.column_box()) else {
        return Ok(None);
    };
    // Reversing may swap axis order, so both corners are re-sorted.
    let local = IntBox::from_corners(
        transform.reverse_placement_position(within.min),
        transform.reverse_placement_position(within.max),
    );
    ensure_within_region(local, size).map(Some)
}

pub(crate) fn ensure_within_region(local: IntBox, size: Position) -> Result<IntBox, ClipError> {
    let outside = || ClipError::OutsideRegion {
        min: local.min,
        max: local.max,
        size,
    };
    let bounds = region_local_box(size).ok_or_else(outside)?;
    if bounds.contains(local.min) && bounds.contains(local.max) {
        Ok(local)
    } else {
        Err(outside())
    }
}
