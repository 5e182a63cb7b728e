use std::collections::BTreeMap;
use std::sync::Arc;

use crate::item::{InstanceId, ItemDefinition, ItemId, ItemInstance};

/// Static item content, loaded once and shared by every instance.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: &ItemId) -> Option<Arc<ItemDefinition>>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<Arc<ItemDefinition>>;
}

/// Resolves the instance ids stored in an occupancy grid.
pub trait ItemLookup {
    fn instance(&self, id: InstanceId) -> Option<&ItemInstance>;
}

impl ItemLookup for BTreeMap<InstanceId, ItemInstance> {
    fn instance(&self, id: InstanceId) -> Option<&ItemInstance> {
        self.get(&id)
    }
}

impl ItemOracle for BTreeMap<ItemId, Arc<ItemDefinition>> {
    fn definition(&self, id: &ItemId) -> Option<Arc<ItemDefinition>> {
        self.get(id).cloned()
    }

    fn all_definitions(&self) -> Vec<Arc<ItemDefinition>> {
        self.values().cloned().collect()
    }
}
