use rs_schematic::{Region, Schematic};
use rs_utils::ChunkPos;
use rs_world::{SuppressedCallbacks, World};
use tracing::{debug, info};

pub mod blocks;
pub mod clip;
pub mod diagnostics;
pub mod entities;
pub mod placement;
pub mod replace;
pub mod settings;
pub mod transform;

#[cfg(test)]
mod tests;

pub use blocks::{BlockStats, ClippedRegion};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use entities::EntityFilter;
pub use placement::{SchematicPlacement, SubRegionPlacement};
pub use replace::ReplaceBehavior;
pub use settings::{PasteSettings, SettingsError};
pub use transform::PlacementTransform;

/// What a paste did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementReport {
    pub regions_placed: usize,
    /// Missing or invalid region data.
    pub regions_skipped: usize,
    /// Outside the world or the layer range.
    pub regions_rejected: usize,
    pub regions_aborted: usize,
    pub blocks_written: usize,
    pub block_entities_loaded: usize,
    pub ticks_scheduled: usize,
    pub neighbors_notified: usize,
    pub entities_spawned: usize,
}

impl PlacementReport {
    fn add_blocks(&mut self, stats: BlockStats) {
        self.regions_placed += 1;
        self.blocks_written += stats.blocks_written;
        self.block_entities_loaded += stats.block_entities_loaded;
        self.ticks_scheduled += stats.ticks_scheduled;
        self.neighbors_notified += stats.neighbors_notified;
    }

    pub fn merge(&mut self, other: PlacementReport) {
        self.regions_placed += other.regions_placed;
        self.regions_skipped += other.regions_skipped;
        self.regions_rejected += other.regions_rejected;
        self.regions_aborted += other.regions_aborted;
        self.blocks_written += other.blocks_written;
        self.block_entities_loaded += other.block_entities_loaded;
        self.ticks_scheduled += other.ticks_scheduled;
        self.neighbors_notified += other.neighbors_notified;
        self.entities_spawned += other.entities_spawned;
    }
}

fn entities_enabled(
    placement: &SchematicPlacement,
    sub: &SubRegionPlacement,
    settings: &PasteSettings,
) -> bool {
    settings.place_entities && !placement.ignore_entities && !sub.ignore_entities
}

enum RegionData<'s> {
    Valid(&'s Region),
    /// Blocks are skipped, entities are still placed.
    Invalid(&'s Region),
}

/// Looks up a region for pasting, reporting missing or broken data.
fn lookup_region<'s>(
    schematic: &'s Schematic,
    name: &str,
    sink: &dyn DiagnosticSink,
    report: &mut PlacementReport,
) -> Option<RegionData<'s>> {
    let Some(region) = schematic.region(name) else {
        sink.report(Diagnostic::warning(
            schematic.name(),
            name,
            format!(
                "Sub-region '{}' not found in schematic '{}'",
                name,
                schematic.name()
            ),
        ));
        report.regions_skipped += 1;
        return None;
    };
    if let Err(err) = region.validate() {
        sink.report(Diagnostic::warning(
            schematic.name(),
            name,
            format!(
                "Invalid/missing schematic data in schematic '{}' for sub-region '{}': {}",
                schematic.name(),
                name,
                err
            ),
        ));
        report.regions_skipped += 1;
        return Some(RegionData::Invalid(region));
    }
    Some(RegionData::Valid(region))
}

/// Pastes every enabled sub-region of `placement` into `world`.
pub fn place_to_world<W: World + ?Sized>(
    schematic: &Schematic,
    world: &mut W,
    placement: &SchematicPlacement,
    settings: &PasteSettings,
    sink: &dyn DiagnosticSink,
) -> PlacementReport {
    let mut world = SuppressedCallbacks::new(world);
    let mut report = PlacementReport::default();
    let range = placement.layer_range();

    for (name, sub) in placement.enabled_regions() {
        let Some(data) = lookup_region(schematic, name, sink, &mut report) else {
            continue;
        };
        let region = match data {
            RegionData::Valid(region) => {
                let transform = placement.transform_for(sub, region.size);
                let in_bounds = transform.world_box(region.size).is_some_and(|b| {
                    world.is_within_bounds(b.min, b.max) && range.intersects_box(b.min, b.max)
                });
                match clip::layer_range_clamped_box(&transform, region.size, &range) {
                    Some(local_box) if in_bounds => {
                        let clipped = ClippedRegion {
                            schematic: schematic.name(),
                            name,
                            region,
                            transform,
                            local_box,
                        };
                        let stats = blocks::place_blocks(&mut *world, &clipped, settings, sink);
                        report.add_blocks(stats);
                    }
                    _ => {
                        debug!("region '{}' is outside the world or layer range", name);
                        report.regions_rejected += 1;
                    }
                }
                region
            }
            RegionData::Invalid(region) => region,
        };

        if entities_enabled(placement, sub, settings) {
            let transform = placement.transform_for(sub, region.size);
            report.entities_spawned += entities::place_entities(
                &mut *world,
                &region.entities,
                &transform,
                EntityFilter::Layers(&range),
            );
        }
    }

    info!(
        "placed '{}': {} regions, {} blocks, {} entities",
        schematic.name(),
        report.regions_placed,
        report.blocks_written,
        report.entities_spawned
    );
    report
}

/// Pastes the part of `placement` that falls inside one chunk column. Layer
/// ranges do not apply here.
pub fn place_to_world_within_chunk<W: World + ?Sized>(
    schematic: &Schematic,
    world: &mut W,
    chunk: ChunkPos,
    placement: &SchematicPlacement,
    settings: &PasteSettings,
    sink: &dyn DiagnosticSink,
) -> PlacementReport {
    let mut world = SuppressedCallbacks::new(world);
    let mut report = PlacementReport::default();

    for name in placement.regions_touching_chunk(schematic, chunk) {
        let Some(sub) = placement.sub_regions.get(&name) else {
            continue;
        };
        let Some(data) = lookup_region(schematic, &name, sink, &mut report) else {
            continue;
        };
        let region = match data {
            RegionData::Valid(region) => {
                let transform = placement.transform_for(sub, region.size);
                let in_bounds = transform
                    .world_box(region.size)
                    .is_some_and(|b| world.is_within_bounds(b.min, b.max));
                match clip::chunk_clamped_box(&transform, region.size, chunk) {
                    Ok(_) if !in_bounds => {
                        debug!("region '{}' is outside the world", name);
                        report.regions_rejected += 1;
                    }
                    Ok(Some(local_box)) => {
                        let clipped = ClippedRegion {
                            schematic: schematic.name(),
                            name: &name,
                            region,
                            transform,
                            local_box,
                        };
                        let stats = blocks::place_blocks(&mut *world, &clipped, settings, sink);
                        report.add_blocks(stats);
                    }
                    Ok(None) => report.regions_rejected += 1,
                    Err(err) => {
                        sink.report(Diagnostic::error(
                            schematic.name(),
                            &name,
                            format!("aborting paste in chunk [{}, {}]: {}", chunk.x, chunk.z, err),
                        ));
                        report.regions_aborted += 1;
                    }
                }
                region
            }
            RegionData::Invalid(region) => region,
        };

        if entities_enabled(placement, sub, settings) {
            let transform = placement.transform_for(sub, region.size);
            report.entities_spawned += entities::place_entities(
                &mut *world,
                &region.entities,
                &transform,
                EntityFilter::Chunk(chunk),
            );
        }
    }

    debug!(
        "chunk [{}, {}] of '{}': {} blocks, {} entities",
        chunk.x,
        chunk.z,
        schematic.name(),
        report.blocks_written,
        report.entities_spawned
    );
    report
}
