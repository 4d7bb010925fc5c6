//! Structure capacity monitor
//!
//! Queue capacity follows the height of the chimney multiblock. The chimney
//! is polled on a fixed cadence owned by the furnace entity itself rather
//! than observed through structure-change events, which keeps the recompute
//! deterministic and free of cross-entity coupling.

/// Recomputes queue capacity from chimney height on a slow cadence
#[derive(Debug, Clone)]
pub struct CapacityMonitor {
    delay_timer: i32,
    pub max_fuel: usize,
    pub max_ore: usize,
}

impl CapacityMonitor {
    pub fn new() -> Self {
        Self {
            delay_timer: 0,
            max_fuel: 0,
            max_ore: 0,
        }
    }

    /// Advance the cadence timer. Returns true when a recompute window opens.
    pub fn tick(&mut self, interval_ticks: i32) -> bool {
        self.delay_timer -= 1;
        if self.delay_timer <= 0 {
            self.delay_timer = interval_ticks;
            true
        } else {
            false
        }
    }

    /// Recompute capacity from the current chimney height.
    ///
    /// Charges already queued beyond a shrunken capacity are kept; intake
    /// simply stops accepting new ones until the queues drain below the new
    /// limit.
    pub fn recompute(&mut self, structure_height: i32, per_level: usize) {
        let max_items = structure_height.max(0) as usize * per_level;
        if max_items != self.max_fuel {
            log::debug!(
                "capacity recomputed: {} levels -> {} fuel / {} ore",
                structure_height,
                max_items,
                max_items
            );
        }
        self.max_fuel = max_items;
        self.max_ore = max_items;
        // TODO: dump charges that no longer fit back into the world as items
    }
}

impl Default for CapacityMonitor {
    fn default() -> Self {
        Self::new()
    }
}
