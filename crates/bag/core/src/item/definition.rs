use std::collections::BTreeSet;
use std::fmt;

use crate::error::{BagError, ErrorSeverity};
use crate::grid::Position;
use crate::shape::{ShapeError, ShapeMask};

use super::ItemEffect;

/// Content identifier of an item definition (e.g. `"fire_sword"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable item record loaded from content.
///
/// # Linked slots
///
/// `linked_slots` are offsets relative to the top-left of the *base* shape.
/// They usually point at empty cells of the bounding box or just outside it;
/// the adjacency engine rotates them with the item and reports the neighbor
/// occupying each resolved cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub shape: ShapeMask,
    pub tags: BTreeSet<String>,
    pub linked_slots: Vec<Position>,
    pub effects: Vec<ItemEffect>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, shape: ShapeMask) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shape,
            tags: BTreeSet::new(),
            linked_slots: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_linked_slots(mut self, slots: impl IntoIterator<Item = Position>) -> Self {
        self.linked_slots.extend(slots);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = ItemEffect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Base width `W` of the unrotated shape.
    #[inline]
    pub fn width(&self) -> u32 {
        self.shape.width()
    }

    /// Base height `H` of the unrotated shape.
    #[inline]
    pub fn height(&self) -> u32 {
        self.shape.height()
    }

    /// True when both definitions carry at least one common tag.
    ///
    /// An item without tags never matches anything.
    pub fn shares_tag(&self, other: &ItemDefinition) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    /// Checks invariants that content files can violate.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.id.as_str().trim().is_empty() {
            return Err(DefinitionError::EmptyId);
        }
        if self.shape.solid_count() == 0 {
            return Err(DefinitionError::NoSolidCells(self.id.clone()));
        }
        if let Some(tag) = self.tags.iter().find(|tag| tag.trim().is_empty()) {
            return Err(DefinitionError::BlankTag {
                item: self.id.clone(),
                tag: tag.clone(),
            });
        }
        let mut seen = BTreeSet::new();
        for slot in &self.linked_slots {
            if !seen.insert(*slot) {
                return Err(DefinitionError::DuplicateLinkedSlot {
                    item: self.id.clone(),
                    slot: *slot,
                });
            }
        }
        Ok(())
    }
}

/// Errors raised when content describes an unusable item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("item id must not be empty")]
    EmptyId,

    #[error("item {0} has no solid cells")]
    NoSolidCells(ItemId),

    #[error("item {item} has a blank tag {tag:?}")]
    BlankTag { item: ItemId, tag: String },

    #[error("item {item} declares linked slot {slot:?} twice")]
    DuplicateLinkedSlot { item: ItemId, slot: Position },

    #[error("item {item} uses unknown effect kind {kind:?}")]
    UnknownEffect { item: ItemId, kind: String },

    #[error("item {item} has an invalid shape: {source}")]
    Shape {
        item: ItemId,
        #[source]
        source: ShapeError,
    },
}

impl BagError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use DefinitionError::*;
        match self {
            EmptyId => "DEFINITION_EMPTY_ID",
            NoSolidCells(_) => "DEFINITION_NO_SOLID_CELLS",
            BlankTag { .. } => "DEFINITION_BLANK_TAG",
            DuplicateLinkedSlot { .. } => "DEFINITION_DUPLICATE_LINKED_SLOT",
            UnknownEffect { .. } => "DEFINITION_UNKNOWN_EFFECT",
            Shape { .. } => "DEFINITION_INVALID_SHAPE",
        }
    }
}
