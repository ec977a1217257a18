//! Static block table: numeric ids, registry keys, and which orientation
//! property and block entity a block carries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationKind {
    None,
    /// All six directions.
    Facing,
    /// North, south, west, east only.
    HorizontalFacing,
    Axis,
    /// 16-step standing rotation (signs, banners).
    Rotation16,
}

#[derive(Debug, Clone, Copy)]
pub struct BlockInfo {
    pub id: u16,
    pub key: &'static str,
    pub orientation: OrientationKind,
    pub block_entity: Option<&'static str>,
    pub inventory: bool,
}

pub const AIR: u16 = 0;
pub const STONE: u16 = 1;
pub const DIRT: u16 = 3;
pub const COBBLESTONE: u16 = 4;
pub const PLANKS: u16 = 5;
pub const LOG: u16 = 17;
pub const DISPENSER: u16 = 23;
pub const STICKY_PISTON: u16 = 29;
pub const TORCH: u16 = 50;
pub const OAK_STAIRS: u16 = 53;
pub const CHEST: u16 = 54;
pub const FURNACE: u16 = 61;
pub const STANDING_SIGN: u16 = 63;
pub const WALL_SIGN: u16 = 68;
pub const SKULL: u16 = 144;
pub const HOPPER: u16 = 154;
pub const BARRIER: u16 = 166;
pub const HAY_BLOCK: u16 = 170;
pub const STANDING_BANNER: u16 = 176;
pub const STRUCTURE_VOID: u16 = 217;

const fn plain(id: u16, key: &'static str) -> BlockInfo {
    BlockInfo {
        id,
        key,
        orientation: OrientationKind::None,
        block_entity: None,
        inventory: false,
    }
}

const fn oriented(id: u16, key: &'static str, orientation: OrientationKind) -> BlockInfo {
    BlockInfo {
        id,
        key,
        orientation,
        block_entity: None,
        inventory: false,
    }
}

const fn with_entity(
    id: u16,
    key: &'static str,
    orientation: OrientationKind,
    block_entity: &'static str,
    inventory: bool,
) -> BlockInfo {
    BlockInfo {
        id,
        key,
        orientation,
        block_entity: Some(block_entity),
        inventory,
    }
}

static BLOCKS: &[BlockInfo] = &[
    plain(AIR, "minecraft:air"),
    plain(STONE, "minecraft:stone"),
    plain(DIRT, "minecraft:dirt"),
    plain(COBBLESTONE, "minecraft:cobblestone"),
    plain(PLANKS, "minecraft:planks"),
    oriented(LOG, "minecraft:log", OrientationKind::Axis),
    with_entity(
        DISPENSER,
        "minecraft:dispenser",
        OrientationKind::Facing,
        "minecraft:dispenser",
        true,
    ),
    oriented(STICKY_PISTON, "minecraft:sticky_piston", OrientationKind::Facing),
    oriented(TORCH, "minecraft:torch", OrientationKind::Facing),
    oriented(OAK_STAIRS, "minecraft:oak_stairs", OrientationKind::HorizontalFacing),
    with_entity(
        CHEST,
        "minecraft:chest",
        OrientationKind::HorizontalFacing,
        "minecraft:chest",
        true,
    ),
    with_entity(
        FURNACE,
        "minecraft:furnace",
        OrientationKind::HorizontalFacing,
        "minecraft:furnace",
        true,
    ),
    with_entity(
        STANDING_SIGN,
        "minecraft:standing_sign",
        OrientationKind::Rotation16,
        "minecraft:sign",
        false,
    ),
    with_entity(
        WALL_SIGN,
        "minecraft:wall_sign",
        OrientationKind::HorizontalFacing,
        "minecraft:sign",
        false,
    ),
    with_entity(
        SKULL,
        "minecraft:skull",
        OrientationKind::Facing,
        "minecraft:skull",
        false,
    ),
    with_entity(
        HOPPER,
        "minecraft:hopper",
        OrientationKind::Facing,
        "minecraft:hopper",
        true,
    ),
    plain(BARRIER, "minecraft:barrier"),
    oriented(HAY_BLOCK, "minecraft:hay_block", OrientationKind::Axis),
    with_entity(
        STANDING_BANNER,
        "minecraft:standing_banner",
        OrientationKind::Rotation16,
        "minecraft:banner",
        false,
    ),
    plain(STRUCTURE_VOID, "minecraft:structure_void"),
];

pub fn block_info(id: u16) -> Option<&'static BlockInfo> {
    BLOCKS.iter().find(|info| info.id == id)
}

pub fn block_registry_key(id: u16) -> Option<&'static str> {
    block_info(id).map(|info| info.key)
}

pub fn block_id(key: &str) -> Option<u16> {
    let key = if key.contains(':') {
        key.to_string()
    } else {
        format!("minecraft:{key}")
    };
    BLOCKS.iter().find(|info| info.key == key).map(|info| info.id)
}

pub fn orientation_kind(id: u16) -> OrientationKind {
    block_info(id)
        .map(|info| info.orientation)
        .unwrap_or(OrientationKind::None)
}
