use rs_schematic::{BlockState, Region};
use rs_utils::{Axis, IntBox, Position};
use rs_world::{UpdateFlags, World};
use tracing::trace;

use crate::clip::region_local_box;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::settings::PasteSettings;
use crate::transform::PlacementTransform;

const PLACEHOLDER_FLAGS: UpdateFlags = UpdateFlags::NO_RERENDER.union(UpdateFlags::NO_OBSERVERS);
const PLACE_FLAGS: UpdateFlags = UpdateFlags::SEND_TO_CLIENTS.union(UpdateFlags::NO_OBSERVERS);

/// A region together with the part of it a paste visits.
pub struct ClippedRegion<'a> {
    pub schematic: &'a str,
    pub name: &'a str,
    pub region: &'a Region,
    pub transform: PlacementTransform,
    /// Local voxel box, inclusive, inside the region container.
    pub local_box: IntBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockStats {
    pub blocks_written: usize,
    pub block_entities_loaded: usize,
    pub neighbors_notified: usize,
    pub ticks_scheduled: usize,
}

pub fn place_blocks<W: World + ?Sized>(
    world: &mut W,
    clipped: &ClippedRegion,
    settings: &PasteSettings,
    sink: &dyn DiagnosticSink,
) -> BlockStats {
    let mut stats = BlockStats::default();
    let ClippedRegion {
        region,
        transform,
        local_box: IntBox { min, max },
        ..
    } = *clipped;

    for y in min.y..=max.y {
        for z in min.z..=max.z {
            for x in min.x..=max.x {
                let local = Position::new(x, y, z);
                let Some(state) = region.block(local) else {
                    continue;
                };
                if state.is_void() {
                    continue;
                }
                let pos = transform.placement_position(local);
                if !settings
                    .replace_behavior
                    .allows(state, world.actual_block_state(pos))
                {
                    continue;
                }
                if place_block(world, clipped, local, pos, state, sink, &mut stats) {
                    stats.blocks_written += 1;
                }
            }
        }
    }

    if settings.notify_neighbors && stats.blocks_written > 0 {
        // The region's own far face is never notified. Seams cut by a chunk
        // clip are, so adjacent chunks cover the same cells as one paste.
        let far = region_local_box(region.size).map_or(max, |full| full.max);
        let end = |axis: Axis| {
            let edge = max.get(axis);
            if edge == far.get(axis) { edge - 1 } else { edge }
        };
        let (end_x, end_y, end_z) = (end(Axis::X), end(Axis::Y), end(Axis::Z));
        for y in min.y..=end_y {
            for z in min.z..=end_z {
                for x in min.x..=end_x {
                    world.notify_neighbors(transform.placement_position(Position::new(x, y, z)));
                    stats.neighbors_notified += 1;
                }
            }
        }
    }

    // Ticks go through the full voxel mapping so they stay on the block that
    // asked for them under any rotation or mirror, not just a translation.
    for (local, tick) in &region.scheduled_ticks {
        if !clipped.local_box.contains(*local) {
            continue;
        }
        world.schedule_tick(transform.placement_position(*local), tick.delay, tick.priority);
        stats.ticks_scheduled += 1;
    }

    stats
}

/// Writes one voxel. Returns true if the world changed.
fn place_block<W: World + ?Sized>(
    world: &mut W,
    clipped: &ClippedRegion,
    local: Position,
    pos: Position,
    state: BlockState,
    sink: &dyn DiagnosticSink,
    stats: &mut BlockStats,
) -> bool {
    let transform = &clipped.transform;
    let new_state = transform.transform_state(state);
    if new_state == world.block_state(pos) {
        return false;
    }

    if world.block_entity(pos).is_some() {
        world.clear_block_entity(pos);
        world.set_block_state(pos, BlockState::BARRIER, PLACEHOLDER_FLAGS);
    }

    if !world.set_block_state(pos, new_state, PLACE_FLAGS) {
        trace!("world refused {} at {:?}", new_state, pos);
        return false;
    }

    if let Some(data) = clipped.region.block_entities.get(&local)
        && world.block_entity(pos).is_some()
    {
        let placed = transform.transform_block_entity(data, pos);
        match world.load_block_entity(pos, placed.into_nbt()) {
            Ok(()) => stats.block_entities_loaded += 1,
            Err(err) => sink.report(Diagnostic::warning(
                clipped.schematic,
                clipped.name,
                format!("Failed to load block entity data for {new_state} @ {pos}: {err}"),
            )),
        }
    }
    true
}
