use std::collections::BTreeMap;

use crate::region::Region;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchematicMetadata {
    pub name: String,
    pub author: String,
}

/// A captured structure: named regions, each with its own size and content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schematic {
    pub metadata: SchematicMetadata,
    regions: BTreeMap<String, Region>,
}

impl Schematic {
    pub fn new(name: &str) -> Self {
        Self {
            metadata: SchematicMetadata {
                name: name.to_string(),
                ..Default::default()
            },
            regions: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn add_region(&mut self, name: &str, region: Region) -> Option<Region> {
        self.regions.insert(name.to_string(), region)
    }

    pub fn with_region(mut self, name: &str, region: Region) -> Self {
        self.add_region(name, region);
        self
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    pub fn regions(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }
}
