pub mod block_entity;
pub mod block_state;
pub mod entity;
pub mod layer_range;
pub mod nbt;
pub mod region;
pub mod registry;
pub mod schematic;

pub use block_entity::BlockEntityData;
pub use block_state::{BlockState, Orientation};
pub use entity::{EntityRecord, rotation_tag};
pub use layer_range::{LayerMode, LayerRange};
pub use nbt::{Compound, Tag};
pub use region::{BlockStateContainer, Region, RegionError, ScheduledTick};
pub use schematic::{Schematic, SchematicMetadata};
