use std::fmt;
use std::sync::Arc;

use crate::grid::Position;
use crate::shape::{Rotation, ShapeMask};

use super::ItemDefinition;

/// Identifier of one item instance inside an inventory session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placed or held item.
///
/// `position` is the top-left corner of the *rotated* bounding box. It is only
/// meaningful while the item sits on a grid; a held item keeps the position it
/// was last placed at.
#[derive(Clone, Debug)]
pub struct ItemInstance {
    id: InstanceId,
    definition: Arc<ItemDefinition>,
    position: Position,
    rotation: Rotation,
}

impl ItemInstance {
    pub fn new(id: InstanceId, definition: Arc<ItemDefinition>) -> Self {
        Self {
            id,
            definition,
            position: Position::ORIGIN,
            rotation: Rotation::Deg0,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    #[inline]
    pub fn definition(&self) -> &Arc<ItemDefinition> {
        &self.definition
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Width of the rotated bounding box.
    pub fn current_width(&self) -> u32 {
        self.rotation
            .dimensions(self.definition.width(), self.definition.height())
            .0
    }

    /// Height of the rotated bounding box.
    pub fn current_height(&self) -> u32 {
        self.rotation
            .dimensions(self.definition.width(), self.definition.height())
            .1
    }

    /// Occupancy mask for the current rotation.
    ///
    /// Its dimensions always equal `(current_width, current_height)`.
    pub fn effective_shape(&self) -> ShapeMask {
        self.definition.shape.rotated(self.rotation)
    }

    /// Advances the rotation by 90°. Does not touch any grid.
    pub fn rotate(&mut self) -> Rotation {
        self.rotation = self.rotation.next();
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// True when both items carry at least one common tag.
    pub fn shares_tag(&self, other: &ItemInstance) -> bool {
        self.definition.shares_tag(&other.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn satchel() -> ItemInstance {
        let shape = ShapeMask::filled(2, 3).unwrap();
        let definition = Arc::new(ItemDefinition::new("satchel", "Satchel", shape));
        ItemInstance::new(InstanceId(1), definition)
    }

    #[test]
    fn current_dimensions_swap_on_quarter_turns() {
        let mut item = satchel();
        assert_eq!((item.current_width(), item.current_height()), (2, 3));

        assert_eq!(item.rotate(), Rotation::Deg90);
        assert_eq!((item.current_width(), item.current_height()), (3, 2));

        item.rotate();
        assert_eq!((item.current_width(), item.current_height()), (2, 3));

        item.rotate();
        assert_eq!((item.current_width(), item.current_height()), (3, 2));
    }

    #[test]
    fn effective_shape_matches_current_dimensions() {
        let mut item = satchel();
        for _ in 0..4 {
            let shape = item.effective_shape();
            assert_eq!(
                (shape.width(), shape.height()),
                (item.current_width(), item.current_height())
            );
            item.rotate();
        }
        assert_eq!(item.rotation(), Rotation::Deg0);
    }
}
