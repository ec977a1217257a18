use std::fmt;

use rs_schematic::BlockState;
use serde::{Deserialize, Serialize};

/// Which existing world blocks a paste may overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceBehavior {
    /// Only fill cells that are currently air.
    #[default]
    None,
    /// Overwrite anything, but never with air.
    WithNonAir,
    All,
}

impl ReplaceBehavior {
    /// `incoming` is the stored state before it is mirrored or rotated;
    /// `existing` is the actual state of the destination cell.
    pub fn allows(self, incoming: BlockState, existing: BlockState) -> bool {
        match self {
            ReplaceBehavior::None => existing.is_air(),
            ReplaceBehavior::WithNonAir => !incoming.is_air(),
            ReplaceBehavior::All => true,
        }
    }

    pub fn as_string(&self) -> &'static str {
        match self {
            ReplaceBehavior::None => "none",
            ReplaceBehavior::WithNonAir => "with_non_air",
            ReplaceBehavior::All => "all",
        }
    }
}

impl fmt::Display for ReplaceBehavior {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_string())
    }
}
