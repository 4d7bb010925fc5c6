//! Slag column visualization
//!
//! Maps the total queued charge count to a stack of layered slag cells above
//! the furnace so an observer can read the fill level at a glance. Pure
//! function of the current counts and the chimney height.

use crate::world::env::FurnaceEnv;
use glam::IVec3;

/// Layers one slag cell holds before the column advances upward
const LAYERS_PER_CELL: usize = 4;

/// Rebuild the slag column above `pos` from the current charge count.
///
/// A single charge still shows one layer so the furnace reads as working;
/// otherwise two charges make one layer. Cells left over from a previously
/// taller column are cleared up to the chimney height.
pub fn update<E: FurnaceEnv + ?Sized>(
    env: &mut E,
    pos: IVec3,
    total_items: usize,
    structure_height: i32,
    lit: bool,
) {
    let mut layers = if total_items == 1 {
        1
    } else {
        total_items / 2
    };

    let mut height = 0;
    let mut cell = pos + IVec3::Y;
    while layers > 0 {
        let filled = layers.min(LAYERS_PER_CELL);
        env.set_slag(cell, filled as u8, lit);
        layers -= filled;
        height += 1;
        cell.y += 1;
    }

    while height < structure_height {
        env.clear_slag(cell);
        height += 1;
        cell.y += 1;
    }
}
