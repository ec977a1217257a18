use bevy::math::DVec3;
use rs_schematic::registry::{
    CHEST, COBBLESTONE, HAY_BLOCK, LOG, OAK_STAIRS, PLANKS, STANDING_BANNER, TORCH,
};
use rs_schematic::{BlockState, Compound, EntityRecord, Region, Schematic, Tag, rotation_tag};
use rs_utils::{Axis, Direction, Position};

fn block(id: u16) -> BlockState {
    BlockState::new(id)
}

fn facing(id: u16, dir: Direction) -> BlockState {
    BlockState::new(id).with_facing(dir).unwrap_or(BlockState::new(id))
}

/// A small cottage with a fenced yard, enough to exercise every part of a paste.
pub fn cottage() -> Schematic {
    let mut house = Region::new(Position::new(7, 5, 6));
    for x in 0..7 {
        for z in 0..6 {
            house.set_block(Position::new(x, 0, z), block(COBBLESTONE));
            let edge = x == 0 || x == 6 || z == 0 || z == 5;
            for y in 1..4 {
                if edge {
                    house.set_block(Position::new(x, y, z), block(PLANKS));
                }
            }
            house.set_block(Position::new(x, 4, z), facing(OAK_STAIRS, Direction::North));
        }
    }
    for y in 1..4 {
        for (x, z) in [(0, 0), (6, 0), (0, 5), (6, 5)] {
            let log = block(LOG).with_axis(Axis::Y).unwrap_or(block(LOG));
            house.set_block(Position::new(x, y, z), log);
        }
    }
    // Doorway.
    house.set_block(Position::new(3, 1, 0), BlockState::AIR);
    house.set_block(Position::new(3, 2, 0), BlockState::AIR);

    let chest_pos = Position::new(5, 1, 4);
    house.set_block(chest_pos, facing(CHEST, Direction::West));
    house.set_block_entity(
        chest_pos,
        Compound::new()
            .with("id", "minecraft:chest")
            .with("x", chest_pos.x)
            .with("y", chest_pos.y)
            .with("z", chest_pos.z)
            .with(
                "Items",
                Tag::List(vec![Tag::Compound(
                    Compound::new()
                        .with("id", "minecraft:bread")
                        .with("Count", Tag::Byte(3))
                        .with("Slot", Tag::Byte(0)),
                )]),
            ),
    );
    house.set_block(Position::new(1, 3, 3), facing(TORCH, Direction::East));
    house.schedule_tick(Position::new(1, 3, 3), 1, 0);
    house.add_entity(EntityRecord::new(
        DVec3::new(3.5, 1.0, 2.5),
        Compound::new()
            .with("id", "minecraft:villager")
            .with("Health", 20.0f32)
            .with("Rotation", rotation_tag(0.0, 0.0)),
    ));

    // The yard extends away from the house, so its size is negative on Z.
    let mut yard = Region::new(Position::new(5, 2, -4));
    for x in 0..5 {
        for z in 0..4 {
            yard.set_block(Position::new(x, 0, z), BlockState::STRUCTURE_VOID);
            yard.set_block(Position::new(x, 1, z), BlockState::STRUCTURE_VOID);
        }
    }
    let hay = block(HAY_BLOCK).with_axis(Axis::X).unwrap_or(block(HAY_BLOCK));
    yard.set_block(Position::new(0, 0, 0), hay);
    yard.set_block(Position::new(1, 0, 0), hay);
    let banner = block(STANDING_BANNER)
        .with_rotation16(4)
        .unwrap_or(block(STANDING_BANNER));
    yard.set_block(Position::new(4, 0, 3), banner);
    yard.set_block_entity(
        Position::new(4, 0, 3),
        Compound::new()
            .with("id", "minecraft:banner")
            .with("Base", 14)
            .with("x", 4)
            .with("y", 0)
            .with("z", 3),
    );
    yard.add_entity(
        EntityRecord::new(
            DVec3::new(2.5, 0.0, -1.5),
            Compound::new()
                .with("id", "minecraft:pig")
                .with("Health", 10.0f32)
                .with("Rotation", rotation_tag(90.0, 0.0)),
        )
        .with_passenger(EntityRecord::new(
            DVec3::new(2.5, 0.9, -1.5),
            Compound::new()
                .with("id", "minecraft:chicken")
                .with("Health", 4.0f32)
                .with("Rotation", rotation_tag(90.0, 0.0)),
        )),
    );

    let mut schematic = Schematic::new("cottage")
        .with_region("house", house)
        .with_region("yard", yard);
    schematic.metadata.author = "rs-client".to_string();
    schematic
}

/// Where the yard sits relative to the house.
pub const YARD_OFFSET: Position = Position::new(1, 0, -1);
