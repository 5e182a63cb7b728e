//! Item catalog loader.
//!
//! Catalog files describe shapes as rows of `#` (solid) and `.` (empty):
//!
//! ```ron
//! (
//!     items: [
//!         (
//!             id: "torch",
//!             name: "Torch",
//!             shape: ["#", "#"],
//!             tags: ["fire"],
//!             linked_slots: [(1, 0), (-1, 0)],
//!             effects: [(kind: "damage", amount: 2)],
//!         ),
//!     ],
//! )
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use bag_core::{
    DefinitionError, EffectKind, ItemDefinition, ItemEffect, ItemId, Position, ShapeMask,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemSpec>,
}

/// One catalog entry as written in content files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    pub name: String,
    pub shape: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Offsets relative to the unrotated shape's top-left cell.
    #[serde(default)]
    pub linked_slots: Vec<(i32, i32)>,
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

/// Effect kinds stay strings in files and are resolved on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectSpec {
    pub kind: String,
    pub amount: i32,
}

impl ItemSpec {
    /// Resolves shape rows and effect kinds and validates the result.
    pub fn into_definition(self) -> Result<ItemDefinition, DefinitionError> {
        let id = ItemId::new(self.id);
        let shape =
            ShapeMask::from_rows(self.shape.as_slice()).map_err(|source| DefinitionError::Shape {
                item: id.clone(),
                source,
            })?;
        let effects = self
            .effects
            .into_iter()
            .map(|effect| {
                EffectKind::from_str(&effect.kind)
                    .map(|kind| ItemEffect::new(kind, effect.amount))
                    .map_err(|_| DefinitionError::UnknownEffect {
                        item: id.clone(),
                        kind: effect.kind,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let definition = ItemDefinition::new(id, self.name, shape)
            .with_tags(self.tags)
            .with_linked_slots(
                self.linked_slots
                    .into_iter()
                    .map(|(x, y)| Position::new(x, y)),
            )
            .with_effects(effects);
        definition.validate()?;
        Ok(definition)
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Fails on the first invalid entry, naming the file and the item.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e))
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        let mut definitions = Vec::with_capacity(catalog.items.len());
        for spec in catalog.items {
            if !seen.insert(spec.id.clone()) {
                anyhow::bail!("Duplicate item id {:?}", spec.id);
            }
            definitions.push(spec.into_definition()?);
        }
        Ok(definitions)
    }
}
