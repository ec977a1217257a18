use bevy::math::DVec3;
use rs_schematic::registry::{CHEST, LOG, OAK_STAIRS, SKULL, STONE, TORCH};
use rs_schematic::{
    BlockState, BlockStateContainer, Compound, EntityRecord, LayerMode, LayerRange, Region,
    Schematic, Tag, rotation_tag,
};
use rs_utils::{Axis, Direction, Mirror, Position, Rotation};
use rs_world::{MemoryWorld, RecordedTick, UpdateFlags, World};

use crate::{
    CollectingSink, PasteSettings, PlacementReport, ReplaceBehavior, SchematicPlacement, Severity,
    SubRegionPlacement, TracingSink, place_to_world, place_to_world_within_chunk,
};

fn stone() -> BlockState {
    BlockState::new(STONE)
}

fn facing(id: u16, dir: Direction) -> BlockState {
    BlockState::new(id).with_facing(dir).unwrap()
}

fn zombie(pos: DVec3, yaw: f32) -> EntityRecord {
    EntityRecord::new(
        pos,
        Compound::new()
            .with("id", "minecraft:zombie")
            .with("Health", 20.0f32)
            .with("Rotation", rotation_tag(yaw, 10.0)),
    )
}

fn house() -> Schematic {
    let mut main = Region::new(Position::new(5, 3, -4));
    for x in 0..5 {
        for z in 0..4 {
            main.set_block(Position::new(x, 0, z), stone());
        }
    }
    main.set_block(Position::new(1, 1, 1), facing(CHEST, Direction::North));
    main.set_block_entity(
        Position::new(1, 1, 1),
        Compound::new()
            .with("id", "minecraft:chest")
            .with("x", 1)
            .with("y", 1)
            .with("z", 1)
            .with(
                "Items",
                Tag::List(vec![Tag::Compound(
                    Compound::new().with("id", "minecraft:diamond"),
                )]),
            ),
    );
    main.set_block(Position::new(3, 1, 2), facing(OAK_STAIRS, Direction::East));
    main.set_block(Position::new(4, 2, 3), facing(SKULL, Direction::Up));
    main.set_block_entity(
        Position::new(4, 2, 3),
        Compound::new()
            .with("id", "minecraft:skull")
            .with("Rot", Tag::Byte(3))
            .with("x", 4)
            .with("y", 2)
            .with("z", 3),
    );
    main.set_block(Position::new(0, 2, 0), BlockState::STRUCTURE_VOID);
    main.schedule_tick(Position::new(2, 1, 2), 4, 0);
    main.add_entity(
        zombie(DVec3::new(1.5, 1.0, -0.5), 0.0).with_passenger(EntityRecord::new(
            DVec3::new(1.5, 1.5, -0.5),
            Compound::new().with("id", "minecraft:chicken"),
        )),
    );

    let mut annex = Region::new(Position::new(-3, 2, 3));
    let log = BlockState::new(LOG).with_axis(Axis::X).unwrap();
    for x in 0..3 {
        for z in 0..3 {
            annex.set_block(Position::new(x, 0, z), log);
            annex.set_block(Position::new(x, 1, z), BlockState::STRUCTURE_VOID);
        }
    }
    annex.set_block(Position::new(0, 1, 0), facing(TORCH, Direction::North));
    annex.schedule_tick(Position::new(0, 1, 0), 2, -1);

    Schematic::new("house")
        .with_region("main", main)
        .with_region("annex", annex)
}

fn house_placement(
    origin: Position,
    mirror: Mirror,
    rotation: Rotation,
    annex_mirror: Mirror,
    annex_rotation: Rotation,
) -> SchematicPlacement {
    SchematicPlacement::new(origin)
        .mirrored(mirror)
        .rotated(rotation)
        .with_region("main", SubRegionPlacement::default())
        .with_region(
            "annex",
            SubRegionPlacement::new(Position::new(7, 0, 2))
                .mirrored(annex_mirror)
                .rotated(annex_rotation),
        )
}

fn sorted_ticks(world: &MemoryWorld) -> Vec<RecordedTick> {
    let mut ticks = world.ticks.clone();
    ticks.sort_by_key(|t| t.pos);
    ticks
}

fn replace_all() -> PasteSettings {
    PasteSettings {
        replace_behavior: ReplaceBehavior::All,
        ..PasteSettings::default()
    }
}

#[test]
fn single_voxel_lands_on_rotated_origin() {
    let mut region = Region::new(Position::new(2, 1, 2));
    region.blocks.fill(BlockState::STRUCTURE_VOID);
    region.set_block(Position::ZERO, stone());
    let schematic = Schematic::new("dot").with_region("r", region);
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(10, 0, 10))
        .rotated(Rotation::Clockwise90);

    let mut world = MemoryWorld::new();
    let report = place_to_world(
        &schematic,
        &mut world,
        &placement,
        &PasteSettings::default(),
        &TracingSink,
    );

    assert_eq!(world.writes, 1);
    assert_eq!(report.blocks_written, 1);
    let snapshot = world.blocks_snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get(&Position::new(10, 0, 10)), Some(&stone()));
}

#[test]
fn void_regions_touch_nothing() {
    let mut region = Region::new(Position::new(-3, 2, 4));
    region.blocks.fill(BlockState::STRUCTURE_VOID);
    let schematic = Schematic::new("void").with_region("r", region);
    let settings = PasteSettings {
        replace_behavior: ReplaceBehavior::All,
        notify_neighbors: true,
        ..PasteSettings::default()
    };

    for mirror in Mirror::ALL {
        for rotation in Rotation::ALL {
            let placement = SchematicPlacement::for_schematic(&schematic, Position::new(3, 70, -9))
                .mirrored(mirror)
                .rotated(rotation);
            let mut world = MemoryWorld::new();
            place_to_world(&schematic, &mut world, &placement, &settings, &TracingSink);
            assert_eq!(world.writes, 0);
            assert!(world.notifications.is_empty());
        }
    }
}

#[test]
fn second_paste_writes_nothing() {
    let schematic = house();
    let placement = house_placement(
        Position::new(-20, 64, 5),
        Mirror::FrontBack,
        Rotation::Clockwise180,
        Mirror::LeftRight,
        Rotation::Clockwise90,
    );

    for behavior in [ReplaceBehavior::None, ReplaceBehavior::All] {
        let settings = PasteSettings {
            replace_behavior: behavior,
            ..PasteSettings::default()
        };
        let mut world = MemoryWorld::new();
        let first = place_to_world(&schematic, &mut world, &placement, &settings, &TracingSink);
        assert!(first.blocks_written > 0);

        world.clear_records();
        let second = place_to_world(&schematic, &mut world, &placement, &settings, &TracingSink);
        assert_eq!(world.writes, 0, "{behavior}");
        assert_eq!(second.blocks_written, 0);
    }
}

#[test]
fn with_non_air_never_clears_cells() {
    let schematic = Schematic::new("air").with_region("r", Region::new(Position::new(3, 3, 3)));
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 20, 0));

    let mut world = MemoryWorld::new();
    for x in 0..3 {
        for z in 0..3 {
            world.set_block_state(Position::new(x, 21, z), stone(), UpdateFlags::NONE);
        }
    }
    let before = world.blocks_snapshot();
    world.clear_records();

    let settings = PasteSettings {
        replace_behavior: ReplaceBehavior::WithNonAir,
        ..PasteSettings::default()
    };
    place_to_world(&schematic, &mut world, &placement, &settings, &TracingSink);
    assert_eq!(world.writes, 0);
    assert_eq!(world.blocks_snapshot(), before);

    place_to_world(&schematic, &mut world, &placement, &replace_all(), &TracingSink);
    assert!(world.blocks_snapshot().is_empty());
}

#[test]
fn replace_none_keeps_existing_blocks() {
    let mut region = Region::new(Position::new(2, 1, 1));
    region.blocks.fill(stone());
    let schematic = Schematic::new("pair").with_region("r", region);
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 5, 0));

    let mut world = MemoryWorld::new();
    let dirt = BlockState::from_key("dirt").unwrap();
    world.set_block_state(Position::new(1, 5, 0), dirt, UpdateFlags::NONE);

    place_to_world(&schematic, &mut world, &placement, &PasteSettings::default(), &TracingSink);
    assert_eq!(world.block_state(Position::new(0, 5, 0)), stone());
    assert_eq!(world.block_state(Position::new(1, 5, 0)), dirt);
}

/// Pastes `placement` whole and then chunk by chunk into fresh worlds and
/// checks both end up identical. Returns true if more than one chunk was hit.
fn assert_chunked_matches_whole(
    schematic: &Schematic,
    placement: &SchematicPlacement,
    settings: &PasteSettings,
) -> bool {
    let mut whole = MemoryWorld::new();
    let report = place_to_world(schematic, &mut whole, placement, settings, &TracingSink);

    let mut chunked = MemoryWorld::new();
    let chunks = placement.touched_chunks(schematic);
    let multi_chunk = chunks.len() > 1;
    let mut total = PlacementReport::default();
    for chunk in chunks {
        total.merge(place_to_world_within_chunk(
            schematic,
            &mut chunked,
            chunk,
            placement,
            settings,
            &TracingSink,
        ));
    }

    assert_eq!(whole.blocks_snapshot(), chunked.blocks_snapshot());
    assert_eq!(whole.block_entities(), chunked.block_entities());
    assert_eq!(sorted_ticks(&whole), sorted_ticks(&chunked));
    assert_eq!(whole.entity_count(), chunked.entity_count());
    assert_eq!(report.blocks_written, total.blocks_written);
    assert_eq!(total.regions_aborted, 0);
    multi_chunk
}

#[test]
fn chunk_by_chunk_matches_whole_paste() {
    let schematic = house();
    for origin in [Position::new(14, 60, -3), Position::new(0, 254, 0)] {
        let mut multi_chunk = 0;
        for mirror in Mirror::ALL {
            for rotation in Rotation::ALL {
                for annex_mirror in Mirror::ALL {
                    for annex_rotation in Rotation::ALL {
                        let placement = house_placement(
                            origin,
                            mirror,
                            rotation,
                            annex_mirror,
                            annex_rotation,
                        );
                        if assert_chunked_matches_whole(&schematic, &placement, &replace_all()) {
                            multi_chunk += 1;
                        }
                    }
                }
            }
        }
        assert!(multi_chunk > 0);
    }
}

#[test]
fn chunk_paste_rejects_regions_leaving_the_world() {
    let schematic = house();
    let placement = house_placement(
        Position::new(0, 254, 0),
        Mirror::None,
        Rotation::None,
        Mirror::None,
        Rotation::None,
    );
    let mut world = MemoryWorld::new();
    let mut total = PlacementReport::default();
    for chunk in placement.touched_chunks(&schematic) {
        total.merge(place_to_world_within_chunk(
            &schematic,
            &mut world,
            chunk,
            &placement,
            &replace_all(),
            &TracingSink,
        ));
    }

    // Only the two-high annex fits under the ceiling.
    assert!(total.regions_rejected > 0);
    assert!(world.blocks_snapshot().values().all(|state| *state != stone()));
    assert!(world.block_entities().is_empty());
}

#[test]
fn block_entities_follow_their_blocks() {
    let schematic = house();
    let placement = house_placement(
        Position::new(0, 64, 0),
        Mirror::LeftRight,
        Rotation::Clockwise90,
        Mirror::None,
        Rotation::None,
    );
    let mut world = MemoryWorld::new();
    let report = place_to_world(
        &schematic,
        &mut world,
        &placement,
        &PasteSettings::default(),
        &TracingSink,
    );
    assert_eq!(report.block_entities_loaded, 2);

    let main = schematic.region("main").unwrap();
    let transform = placement.transform_for(&placement.sub_regions["main"], main.size);

    let chest_pos = transform.placement_position(Position::new(1, 1, 1));
    assert_eq!(world.block_state(chest_pos).facing(), Some(Direction::West));
    let chest = world.block_entity(chest_pos).unwrap();
    assert_eq!(chest.position(), Some(chest_pos));
    assert!(chest.has_inventory_contents());

    // 3 mirrored across north/south is 5, then a quarter turn adds 4.
    let skull_pos = transform.placement_position(Position::new(4, 2, 3));
    assert_eq!(world.block_entity(skull_pos).unwrap().rotation16(), Some(9));

    // The stored payloads stay where they were.
    assert_eq!(
        main.block_entities[&Position::new(1, 1, 1)].position(),
        Some(Position::new(1, 1, 1))
    );
}

#[test]
fn scheduled_ticks_move_with_blocks() {
    let schematic = house();
    let placement = house_placement(
        Position::new(5, 64, 5),
        Mirror::None,
        Rotation::CounterClockwise90,
        Mirror::FrontBack,
        Rotation::Clockwise90,
    );
    let mut world = MemoryWorld::new();
    let report = place_to_world(
        &schematic,
        &mut world,
        &placement,
        &PasteSettings::default(),
        &TracingSink,
    );
    assert_eq!(report.ticks_scheduled, 2);

    let annex = schematic.region("annex").unwrap();
    let transform = placement.transform_for(&placement.sub_regions["annex"], annex.size);
    let torch_pos = transform.placement_position(Position::new(0, 1, 0));
    assert!(world.ticks.contains(&RecordedTick {
        pos: torch_pos,
        delay: 2,
        priority: -1,
    }));
    assert_eq!(world.block_state(torch_pos).id(), TORCH);
}

#[test]
fn notify_pass_skips_far_edge() {
    let mut region = Region::new(Position::new(3, 2, 3));
    region.blocks.fill(stone());
    let schematic = Schematic::new("slab").with_region("r", region);
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 10, 0));
    let settings = PasteSettings {
        notify_neighbors: true,
        ..PasteSettings::default()
    };

    let mut world = MemoryWorld::new();
    let report = place_to_world(&schematic, &mut world, &placement, &settings, &TracingSink);
    assert_eq!(report.blocks_written, 18);
    assert_eq!(report.neighbors_notified, 4);
    assert_eq!(world.notifications.len(), 4);
    assert!(world.notifications.contains(&Position::new(1, 10, 1)));
}

#[test]
fn chunk_seams_are_notified_like_whole_paste() {
    let mut region = Region::new(Position::new(20, 2, 2));
    region.blocks.fill(stone());
    let schematic = Schematic::new("wall").with_region("r", region);
    let settings = PasteSettings {
        notify_neighbors: true,
        ..replace_all()
    };

    for rotation in Rotation::ALL {
        let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 64, 0))
            .rotated(rotation);

        let mut whole = MemoryWorld::new();
        place_to_world(&schematic, &mut whole, &placement, &settings, &TracingSink);

        let mut chunked = MemoryWorld::new();
        for chunk in placement.touched_chunks(&schematic) {
            place_to_world_within_chunk(
                &schematic,
                &mut chunked,
                chunk,
                &placement,
                &settings,
                &TracingSink,
            );
        }

        let mut expected = whole.notifications.clone();
        let mut actual = chunked.notifications.clone();
        expected.sort();
        actual.sort();
        assert_eq!(expected.len(), 19);
        assert_eq!(expected, actual, "rotation {rotation}");
    }

    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 64, 0));
    let mut chunked = MemoryWorld::new();
    for chunk in placement.touched_chunks(&schematic) {
        place_to_world_within_chunk(
            &schematic,
            &mut chunked,
            chunk,
            &placement,
            &settings,
            &TracingSink,
        );
    }
    assert!(chunked.notifications.contains(&Position::new(15, 64, 0)));
    assert!(!chunked.notifications.contains(&Position::new(19, 64, 0)));
}

#[test]
fn containers_are_emptied_before_overwrite() {
    let mut region = Region::new(Position::new(1, 1, 1));
    region.blocks.fill(stone());
    let schematic = Schematic::new("plug").with_region("r", region);
    let pos = Position::new(4, 12, 4);
    let placement = SchematicPlacement::for_schematic(&schematic, pos);

    let mut world = MemoryWorld::new();
    world.set_block_state(pos, facing(CHEST, Direction::South), UpdateFlags::NONE);
    world
        .load_block_entity(
            pos,
            Compound::new()
                .with("id", "minecraft:chest")
                .with("x", pos.x)
                .with("y", pos.y)
                .with("z", pos.z)
                .with("Items", Tag::List(vec![Tag::Compound(Compound::new())])),
        )
        .unwrap();
    world.clear_records();

    place_to_world(&schematic, &mut world, &placement, &replace_all(), &TracingSink);
    // Barrier placeholder, then the stone.
    assert_eq!(world.writes, 2);
    assert_eq!(world.block_state(pos), stone());
    assert!(world.block_entity(pos).is_none());
}

#[test]
fn layer_range_limits_written_cells() {
    let schematic = house();
    let mut placement = house_placement(
        Position::new(0, 64, 0),
        Mirror::None,
        Rotation::Clockwise90,
        Mirror::None,
        Rotation::None,
    );
    placement.layer_range = Some(LayerRange::new(
        Axis::Y,
        LayerMode::SingleLayer { layer: 65 },
    ));

    let mut world = MemoryWorld::new();
    let report = place_to_world(
        &schematic,
        &mut world,
        &placement,
        &PasteSettings::default(),
        &TracingSink,
    );
    assert!(report.blocks_written > 0);
    assert!(world.blocks_snapshot().keys().all(|pos| pos.y == 65));
    // The zombie stands on y 65, its passenger is not checked on its own.
    assert_eq!(world.entity_count(), 2);

    placement.layer_range = Some(LayerRange::new(
        Axis::Y,
        LayerMode::AllAbove { layer: 100 },
    ));
    let mut world = MemoryWorld::new();
    let report = place_to_world(
        &schematic,
        &mut world,
        &placement,
        &PasteSettings::default(),
        &TracingSink,
    );
    assert_eq!(report.regions_rejected, 2);
    assert_eq!(world.writes, 0);
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn regions_outside_the_world_are_rejected() {
    let schematic = house();
    let placement = house_placement(
        Position::new(0, 254, 0),
        Mirror::None,
        Rotation::None,
        Mirror::None,
        Rotation::None,
    );
    let mut world = MemoryWorld::new();
    let sink = CollectingSink::new();
    let report = place_to_world(&schematic, &mut world, &placement, &replace_all(), &sink);

    // main is three high and pokes out of the top; annex is two high and fits.
    assert_eq!(report.regions_rejected, 1);
    assert_eq!(report.regions_placed, 1);
    assert!(world.blocks_snapshot().keys().all(|pos| pos.y <= 255));
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn missing_region_is_reported_and_skipped() {
    let schematic = house();
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 64, 0))
        .with_region("cellar", SubRegionPlacement::default());
    let mut world = MemoryWorld::new();
    let sink = CollectingSink::new();
    let report = place_to_world(&schematic, &mut world, &placement, &replace_all(), &sink);

    assert_eq!(report.regions_skipped, 1);
    assert_eq!(report.regions_placed, 2);
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].schematic, "house");
    assert_eq!(diagnostics[0].region, "cellar");
}

#[test]
fn invalid_region_still_places_entities() {
    let mut region = Region::new(Position::new(4, 4, 4));
    region.blocks = BlockStateContainer::new(Position::new(2, 2, 2));
    region.blocks.fill(stone());
    region.add_entity(zombie(DVec3::new(1.5, 0.0, 1.5), 0.0));
    let schematic = Schematic::new("broken").with_region("r", region);
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 64, 0));

    let mut world = MemoryWorld::new();
    let sink = CollectingSink::new();
    let report = place_to_world(&schematic, &mut world, &placement, &replace_all(), &sink);

    assert_eq!(world.writes, 0);
    assert_eq!(report.regions_skipped, 1);
    assert_eq!(report.entities_spawned, 1);
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(
        diagnostics[0]
            .message
            .starts_with("Invalid/missing schematic data in schematic 'broken' for sub-region 'r'")
    );
}

#[test]
fn bad_block_entity_payload_is_reported_per_cell() {
    let mut region = Region::new(Position::new(2, 1, 1));
    region.blocks.fill(facing(CHEST, Direction::North));
    region.set_block_entity(
        Position::ZERO,
        Compound::new().with("id", "minecraft:furnace"),
    );
    region.set_block_entity(
        Position::new(1, 0, 0),
        Compound::new().with("id", "minecraft:chest"),
    );
    let schematic = Schematic::new("chests").with_region("r", region);
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 64, 0));

    let mut world = MemoryWorld::new();
    let sink = CollectingSink::new();
    let report = place_to_world(&schematic, &mut world, &placement, &replace_all(), &sink);

    assert_eq!(report.blocks_written, 2);
    assert_eq!(report.block_entities_loaded, 1);
    assert_eq!(sink.count(Severity::Warning), 1);
    let diagnostics = sink.diagnostics();
    let message = &diagnostics[0].message;
    assert!(message.starts_with("Failed to load block entity data for minecraft:chest"));
    assert!(message.contains("0, 64, 0"));
    assert_eq!(world.block_state(Position::new(0, 64, 0)).id(), CHEST);
}

#[test]
fn callbacks_are_suppressed_only_while_pasting() {
    let schematic = house();
    let placement = house_placement(
        Position::new(0, 64, 0),
        Mirror::None,
        Rotation::None,
        Mirror::None,
        Rotation::None,
    );
    let mut world = MemoryWorld::new();
    place_to_world(&schematic, &mut world, &placement, &replace_all(), &TracingSink);
    assert!(world.writes > 0);
    assert_eq!(world.callbacks_fired, 0);
    assert!(!world.block_added_callbacks_suppressed());

    for chunk in placement.touched_chunks(&schematic) {
        place_to_world_within_chunk(
            &schematic,
            &mut world,
            chunk,
            &placement,
            &PasteSettings::default(),
            &TracingSink,
        );
        assert!(!world.block_added_callbacks_suppressed());
    }

    world.set_block_state(Position::new(100, 1, 100), stone(), UpdateFlags::NONE);
    assert_eq!(world.callbacks_fired, 1);
}

#[test]
fn entities_turn_like_blocks() {
    for mirror in Mirror::ALL {
        for rotation in Rotation::ALL {
            for dir in Direction::HORIZONTAL {
                let yaw = dir.horizontal_index().unwrap() as f32 * 90.0;
                let mut region = Region::new(Position::new(1, 2, 1));
                region.set_block(Position::ZERO, facing(OAK_STAIRS, dir));
                region.add_entity(zombie(DVec3::new(0.5, 1.0, 0.5), yaw));
                let schematic = Schematic::new("pair").with_region("r", region);
                let placement =
                    SchematicPlacement::for_schematic(&schematic, Position::new(-8, 64, 8))
                        .mirrored(mirror)
                        .rotated(rotation);

                let mut world = MemoryWorld::new();
                place_to_world(
                    &schematic,
                    &mut world,
                    &placement,
                    &PasteSettings::default(),
                    &TracingSink,
                );

                let block = world.block_state(Position::new(-8, 64, 8)).facing().unwrap();
                let entity = &world.entities[0];
                assert_eq!(Direction::from_yaw(entity.yaw), block);
                assert_eq!(entity.pos, DVec3::new(-7.5, 65.0, 8.5));
                assert_eq!(entity.prev_yaw, entity.yaw);
                assert_eq!(entity.pitch, 10.0);
                assert_eq!(entity.living.map(|l| l.head_yaw), Some(entity.yaw));
            }
        }
    }
}

#[test]
fn mirrored_yaw_scenario() {
    let mut region = Region::new(Position::new(1, 1, 1));
    region.add_entity(zombie(DVec3::new(0.5, 0.0, 0.5), 0.0));
    let schematic = Schematic::new("mob").with_region("r", region);
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 64, 0))
        .mirrored(Mirror::LeftRight);

    let mut world = MemoryWorld::new();
    place_to_world(&schematic, &mut world, &placement, &PasteSettings::default(), &TracingSink);
    // Facing south, reflected across north/south, faces north like a mirrored stair.
    assert_eq!(world.entities[0].yaw, 180.0);
    assert_eq!(
        facing(OAK_STAIRS, Direction::South)
            .with_mirror(Mirror::LeftRight)
            .facing(),
        Some(Direction::North)
    );
}

#[test]
fn entity_flags_and_broken_passengers() {
    let mut region = Region::new(Position::new(2, 2, 2));
    region.add_entity(
        zombie(DVec3::new(0.5, 0.0, 0.5), 0.0)
            .with_passenger(EntityRecord::new(DVec3::new(0.5, 1.0, 0.5), Compound::new()))
            .with_passenger(zombie(DVec3::new(0.5, 1.0, 0.5), 90.0)),
    );
    region.add_entity(EntityRecord::new(DVec3::new(1.5, 0.0, 1.5), Compound::new()));
    let schematic = Schematic::new("mobs").with_region("r", region);
    let placement = SchematicPlacement::for_schematic(&schematic, Position::new(0, 64, 0));

    let mut world = MemoryWorld::new();
    let settings = PasteSettings::default();
    let report = place_to_world(&schematic, &mut world, &placement, &settings, &TracingSink);
    assert_eq!(report.entities_spawned, 2);
    assert_eq!(world.entities.len(), 1);
    assert_eq!(world.entities[0].passengers.len(), 1);

    let ignored = SchematicPlacement {
        ignore_entities: true,
        ..placement.clone()
    };
    let mut world = MemoryWorld::new();
    place_to_world(&schematic, &mut world, &ignored, &PasteSettings::default(), &TracingSink);
    assert!(world.entities.is_empty());

    let settings = PasteSettings {
        place_entities: false,
        ..PasteSettings::default()
    };
    let mut world = MemoryWorld::new();
    place_to_world(&schematic, &mut world, &placement, &settings, &TracingSink);
    assert!(world.entities.is_empty());

    let sub_ignored = placement.with_region(
        "r",
        SubRegionPlacement {
            ignore_entities: true,
            ..SubRegionPlacement::default()
        },
    );
    let mut world = MemoryWorld::new();
    place_to_world(&schematic, &mut world, &sub_ignored, &PasteSettings::default(), &TracingSink);
    assert!(world.entities.is_empty());
}
