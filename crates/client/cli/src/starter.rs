//! Starter layout for an empty save slot.

use bag_core::{DropOutcome, ItemOracle, Position, Rotation};
use bag_runtime::{BagSession, Result};

/// Packs one of each catalog item into the first free spot, scanning rows
/// top to bottom and trying every rotation. Items that fit nowhere are
/// discarded. Returns the number of items placed.
pub fn pack_catalog(session: &mut BagSession) -> Result<usize> {
    let dims = session.dimensions();
    let definitions = session.oracle().all_definitions();
    let mut placed = 0;

    for definition in definitions {
        let id = session.spawn(&definition.id)?;
        session.begin_drag(id)?;

        let mut spot = None;
        'search: for _ in Rotation::ALL {
            for y in 0..dims.height as i32 {
                for x in 0..dims.width as i32 {
                    let position = Position::new(x, y);
                    if session.inventory().can_place(id, position) {
                        spot = Some(position);
                        break 'search;
                    }
                }
            }
            session.rotate_held()?;
        }

        let outcome = match spot {
            Some(position) => session.drop_at(position)?,
            None => session.cancel_drag()?,
        };
        if matches!(outcome, DropOutcome::Placed { .. }) {
            placed += 1;
        } else {
            tracing::warn!(item = %definition.id, "no room for starter item");
            session.discard(id)?;
        }
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bag_core::{BagConfig, DragState, ItemDefinition, ShapeMask};
    use bag_runtime::ItemOracleImpl;

    use super::*;

    fn session() -> BagSession {
        let shape = |w, h| ShapeMask::filled(w, h).unwrap();
        let oracle = ItemOracleImpl::from_definitions([
            ItemDefinition::new("a_bar", "Bar", shape(3, 1)),
            ItemDefinition::new("b_post", "Post", shape(1, 2)),
            ItemDefinition::new("c_slab", "Slab", shape(3, 3)),
        ]);
        BagSession::new(&BagConfig::with_grid_size(3, 2), Arc::new(oracle))
    }

    #[test]
    fn packs_what_fits_and_discards_the_rest() {
        let mut session = session();
        assert_eq!(pack_catalog(&mut session).unwrap(), 2);
        assert_eq!(session.drag_state(), DragState::Idle);

        let inventory = session.inventory();
        assert_eq!(inventory.len(), 2);
        let post = inventory
            .items()
            .find(|item| item.definition().id.as_str() == "b_post")
            .unwrap();
        // The post only fits lying down on the second row.
        assert_eq!(post.rotation(), Rotation::Deg90);
        assert_eq!(post.position(), Position::new(0, 1));
        assert!(inventory.items().all(|item| item.definition().id.as_str() != "c_slab"));
    }
}
