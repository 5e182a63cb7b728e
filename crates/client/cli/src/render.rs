//! Plain-text rendering of a bag.

use std::collections::BTreeMap;
use std::fmt::Write;

use bag_core::{InstanceId, Inventory, Position};

/// One letter per placed item, in spawn order (`A`..`Z`, then `a`..`z`,
/// then `*`).
pub fn legend(inventory: &Inventory) -> BTreeMap<InstanceId, char> {
    inventory
        .placed_items()
        .enumerate()
        .map(|(i, item)| {
            let glyph = match i {
                0..=25 => char::from(b'A' + i as u8),
                26..=51 => char::from(b'a' + (i - 26) as u8),
                _ => '*',
            };
            (item.id(), glyph)
        })
        .collect()
}

/// ASCII grid with `.` for empty cells.
pub fn grid(inventory: &Inventory, legend: &BTreeMap<InstanceId, char>) -> String {
    let dims = inventory.dimensions();
    let mut out = String::new();
    for y in 0..dims.height as i32 {
        for x in 0..dims.width as i32 {
            let glyph = inventory
                .engine()
                .item_at(Position::new(x, y))
                .and_then(|id| legend.get(&id).copied())
                .unwrap_or('.');
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Linked-adjacency report: one line per placed item.
pub fn adjacency_report(inventory: &Inventory, legend: &BTreeMap<InstanceId, char>) -> String {
    let mut out = String::new();
    for item in inventory.placed_items() {
        let glyph = legend.get(&item.id()).copied().unwrap_or('?');
        let _ = write!(
            out,
            "{glyph} {} at {} ({})",
            item.definition().name,
            item.position(),
            item.rotation()
        );

        let neighbors = inventory.linked_neighbors(item.id()).unwrap_or_default();
        if neighbors.is_empty() {
            out.push_str(": no links");
        } else {
            let links: Vec<String> = neighbors
                .iter()
                .map(|(slot, id)| {
                    let other = legend.get(id).copied().unwrap_or('?');
                    format!("{other}@{slot}")
                })
                .collect();
            let _ = write!(out, ": linked to {}", links.join(", "));
        }

        if let Some(bonus) = inventory.link_bonuses(item.id())
            && !bonus.is_empty()
        {
            let _ = write!(out, " [{bonus}]");
        }
        out.push('\n');
    }
    out
}
