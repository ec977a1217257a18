use serde::{Deserialize, Serialize};

pub mod orientation;
pub mod shared;

pub use orientation::{Mirror, Rotation, wrap_degrees};
pub use shared::{Axis, Direction, Position};

pub const CHUNK_SIZE: i32 = 16;
pub const WORLD_MIN_Y: i32 = 0;
pub const WORLD_HEIGHT: i32 = 256;
pub const WORLD_HORIZONTAL_LIMIT: i32 = 30_000_000;

/// Lowest valid coordinate of a world on `axis`.
pub fn world_min_for_axis(axis: Axis) -> i32 {
    match axis {
        Axis::Y => WORLD_MIN_Y,
        Axis::X | Axis::Z => -WORLD_HORIZONTAL_LIMIT,
    }
}

/// Highest valid coordinate of a world on `axis`.
pub fn world_max_for_axis(axis: Axis) -> i32 {
    match axis {
        Axis::Y => WORLD_MIN_Y + WORLD_HEIGHT - 1,
        Axis::X | Axis::Z => WORLD_HORIZONTAL_LIMIT - 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn from_block(pos: Position) -> Self {
        Self {
            x: pos.x.div_euclid(CHUNK_SIZE),
            z: pos.z.div_euclid(CHUNK_SIZE),
        }
    }

    pub fn min_block_x(&self) -> i32 {
        self.x * CHUNK_SIZE
    }

    pub fn min_block_z(&self) -> i32 {
        self.z * CHUNK_SIZE
    }

    pub fn max_block_x(&self) -> i32 {
        self.min_block_x() + CHUNK_SIZE - 1
    }

    pub fn max_block_z(&self) -> i32 {
        self.min_block_z() + CHUNK_SIZE - 1
    }

    /// True if the continuous horizontal point lies in this column.
    pub fn contains_xz(&self, x: f64, z: f64) -> bool {
        let min_x = self.min_block_x() as f64;
        let min_z = self.min_block_z() as f64;
        let size = CHUNK_SIZE as f64;
        x >= min_x && x < min_x + size && z >= min_z && z < min_z + size
    }

    /// The full-height column box of this chunk.
    pub fn column_box(&self) -> IntBox {
        IntBox {
            min: Position::new(self.min_block_x(), WORLD_MIN_Y, self.min_block_z()),
            max: Position::new(
                self.max_block_x(),
                world_max_for_axis(Axis::Y),
                self.max_block_z(),
            ),
        }
    }
}

/// Inclusive integer box; `min` is component-wise below `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntBox {
    pub min: Position,
    pub max: Position,
}

impl IntBox {
    pub fn from_corners(a: Position, b: Position) -> Self {
        Self {
            min: Position::min_corner(a, b),
            max: Position::max_corner(a, b),
        }
    }

    pub fn intersects(&self, other: &IntBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn intersection(&self, other: &IntBox) -> Option<IntBox> {
        if !self.intersects(other) {
            return None;
        }
        Some(IntBox {
            min: Position::max_corner(self.min, other.min),
            max: Position::min_corner(self.max, other.max),
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }

    /// Chunk columns overlapped by the box, ordered by x then z.
    pub fn chunks(&self) -> Vec<ChunkPos> {
        let min = ChunkPos::from_block(self.min);
        let max = ChunkPos::from_block(self.max);
        let mut out = Vec::new();
        for cx in min.x..=max.x {
            for cz in min.z..=max.z {
                out.push(ChunkPos::new(cx, cz));
            }
        }
        out
    }
}
