//! In-memory furnace environment
//!
//! Holds item stacks, a crucible tally and the slag column for headless runs
//! and tests. Volumes are tiny so scans are linear; there is no spatial
//! index.

use crate::world::env::{FurnaceEnv, HeatReceiver};
use crate::world::item::{ItemKey, ItemStack};
use glam::IVec3;
use std::collections::HashMap;

/// One cell of the visual slag column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlagCell {
    pub layers: u8,
    pub lit: bool,
}

/// What the crucible below has received so far
#[derive(Debug, Clone, Default)]
pub struct CrucibleTally {
    /// Temperature seen on the most recent heat push
    pub last_heat: i32,
    /// Number of heat pushes received
    pub heat_pushes: u64,
    molten: HashMap<u16, u32>,
}

impl CrucibleTally {
    /// Total accepted units of the given molten material
    pub fn molten_units(&self, material: u16) -> u32 {
        self.molten.get(&material).copied().unwrap_or(0)
    }
}

/// Self-contained world for the demo binary and tests
pub struct SimWorld {
    authoritative: bool,
    chimney_height: i32,
    next_key: u64,
    items: HashMap<ItemKey, (IVec3, ItemStack)>,
    slag: HashMap<IVec3, SlagCell>,
    lit_blocks: HashMap<IVec3, bool>,
    pub crucible: CrucibleTally,
    /// When true the crucible refuses molten transfers (backpressure)
    pub reject_molten: bool,
}

impl SimWorld {
    pub fn new(chimney_height: i32) -> Self {
        Self {
            authoritative: true,
            chimney_height,
            next_key: 0,
            items: HashMap::new(),
            slag: HashMap::new(),
            lit_blocks: HashMap::new(),
            crucible: CrucibleTally::default(),
            reject_molten: false,
        }
    }

    /// Mark this world as a passive replica (ignition is refused there)
    pub fn set_authoritative(&mut self, value: bool) {
        self.authoritative = value;
    }

    pub fn set_chimney_height(&mut self, height: i32) {
        self.chimney_height = height;
    }

    /// Drop an item stack into the world, returning its handle
    pub fn spawn_item(&mut self, pos: IVec3, stack: ItemStack) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        self.items.insert(key, (pos, stack));
        key
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn slag_cell(&self, pos: IVec3) -> Option<SlagCell> {
        self.slag.get(&pos).copied()
    }

    pub fn is_block_lit(&self, pos: IVec3) -> bool {
        self.lit_blocks.get(&pos).copied().unwrap_or(false)
    }
}

impl HeatReceiver for SimWorld {
    fn accept_heat(&mut self, _pos: IVec3, temperature: i32) {
        self.crucible.last_heat = temperature;
        self.crucible.heat_pushes += 1;
    }

    fn accept_molten(&mut self, _pos: IVec3, material: u16, units: u32) -> bool {
        if self.reject_molten {
            return false;
        }
        *self.crucible.molten.entry(material).or_insert(0) += units;
        true
    }
}

impl FurnaceEnv for SimWorld {
    fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    fn structure_height(&self, _pos: IVec3) -> i32 {
        self.chimney_height
    }

    fn scan_items(&self, min: IVec3, max: IVec3) -> Vec<ItemKey> {
        let mut keys: Vec<ItemKey> = self
            .items
            .iter()
            .filter(|(_, (pos, _))| {
                pos.x >= min.x
                    && pos.x <= max.x
                    && pos.y >= min.y
                    && pos.y <= max.y
                    && pos.z >= min.z
                    && pos.z <= max.z
            })
            .map(|(key, _)| *key)
            .collect();
        // HashMap iteration order is unstable; keep scans deterministic
        keys.sort();
        keys
    }

    fn item_stack(&mut self, key: ItemKey) -> Option<&mut ItemStack> {
        self.items.get_mut(&key).map(|(_, stack)| stack)
    }

    fn despawn_item(&mut self, key: ItemKey) {
        self.items.remove(&key);
    }

    fn set_slag(&mut self, pos: IVec3, layers: u8, lit: bool) {
        self.slag.insert(pos, SlagCell { layers, lit });
    }

    fn clear_slag(&mut self, pos: IVec3) {
        self.slag.remove(&pos);
    }

    fn set_lit(&mut self, pos: IVec3, lit: bool) {
        self.lit_blocks.insert(pos, lit);
    }
}
