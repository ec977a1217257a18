use rs_utils::{Axis, Position, world_max_for_axis, world_min_for_axis};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayerMode {
    #[default]
    All,
    SingleLayer {
        layer: i32,
    },
    AllAbove {
        layer: i32,
    },
    AllBelow {
        layer: i32,
    },
    Range {
        min: i32,
        max: i32,
    },
}

/// Accepts a contiguous slab of the world along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRange {
    pub axis: Axis,
    #[serde(flatten)]
    pub mode: LayerMode,
}

impl Default for LayerRange {
    fn default() -> Self {
        Self::all()
    }
}

impl LayerRange {
    pub fn all() -> Self {
        Self {
            axis: Axis::Y,
            mode: LayerMode::All,
        }
    }

    pub fn new(axis: Axis, mode: LayerMode) -> Self {
        Self { axis, mode }
    }

    pub fn layer_min(&self) -> i32 {
        match self.mode {
            LayerMode::All | LayerMode::AllBelow { .. } => world_min_for_axis(self.axis),
            LayerMode::SingleLayer { layer } | LayerMode::AllAbove { layer } => layer,
            LayerMode::Range { min, max } => min.min(max),
        }
    }

    pub fn layer_max(&self) -> i32 {
        match self.mode {
            LayerMode::All | LayerMode::AllAbove { .. } => world_max_for_axis(self.axis),
            LayerMode::SingleLayer { layer } | LayerMode::AllBelow { layer } => layer,
            LayerMode::Range { min, max } => min.max(max),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        let v = pos.get(self.axis);
        v >= self.layer_min() && v <= self.layer_max()
    }

    pub fn intersects_box(&self, a: Position, b: Position) -> bool {
        let (lo, hi) = {
            let (va, vb) = (a.get(self.axis), b.get(self.axis));
            (va.min(vb), va.max(vb))
        };
        hi >= self.layer_min() && lo <= self.layer_max()
    }

    /// Clamps `value` into the range if `axis` is the range's axis.
    pub fn clamp_value(&self, axis: Axis, value: i32) -> i32 {
        if axis != self.axis {
            return value;
        }
        value.clamp(self.layer_min(), self.layer_max())
    }
}
