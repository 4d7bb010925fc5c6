//! Collaborator interfaces
//!
//! The furnace never touches the world directly; everything it consumes from
//! its surroundings sits behind these traits, so the simulation runs
//! identically under the demo world and the unit tests.

use crate::world::item::{ItemKey, ItemStack};
use glam::IVec3;

/// Downstream receiver for heat and molten metal (the crucible below)
pub trait HeatReceiver {
    /// Push the furnace's internal temperature to the block at `pos`.
    fn accept_heat(&mut self, pos: IVec3, temperature: i32);

    /// Offer `units` of molten `material` to the block at `pos`.
    /// Returns false when the receiver cannot take it this tick; the caller
    /// retries on the next one.
    fn accept_molten(&mut self, pos: IVec3, material: u16, units: u32) -> bool;
}

/// Everything the furnace entity consumes from its surroundings
pub trait FurnaceEnv: HeatReceiver {
    /// False for passive read-only replicas; they never run the simulation.
    fn is_authoritative(&self) -> bool;

    /// Number of chimney levels recognized above the furnace at `pos`
    fn structure_height(&self, pos: IVec3) -> i32;

    /// Handles for the item stacks inside the axis-aligned volume
    /// `[min, max]` (inclusive). Restartable: a fresh scan every call.
    fn scan_items(&self, min: IVec3, max: IVec3) -> Vec<ItemKey>;

    fn item_stack(&mut self, key: ItemKey) -> Option<&mut ItemStack>;

    fn despawn_item(&mut self, key: ItemKey);

    /// Set the slag cell at `pos` to `layers` (1..=4)
    fn set_slag(&mut self, pos: IVec3, layers: u8, lit: bool);

    fn clear_slag(&mut self, pos: IVec3);

    /// Flip the furnace block's visual lit state
    fn set_lit(&mut self, pos: IVec3, lit: bool);
}
