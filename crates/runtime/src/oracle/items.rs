//! [`bag_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;
use std::sync::Arc;

use bag_core::{ItemDefinition, ItemId, ItemOracle};

/// ItemOracle implementation with static item definitions
#[derive(Clone, Debug, Default)]
pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, Arc<ItemDefinition>>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut oracle = Self::new();
        for definition in definitions {
            oracle.add_definition(definition);
        }
        oracle
    }

    /// Add an item definition, replacing any previous one with the same id.
    pub fn add_definition(&mut self, definition: ItemDefinition) {
        self.definitions
            .insert(definition.id.clone(), Arc::new(definition));
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: &ItemId) -> Option<Arc<ItemDefinition>> {
        self.definitions.get(id).cloned()
    }

    fn all_definitions(&self) -> Vec<Arc<ItemDefinition>> {
        let mut all: Vec<_> = self.definitions.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}
