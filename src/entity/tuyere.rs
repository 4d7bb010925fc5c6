//! Tuyere accessory
//!
//! The nozzle the bellows blow through. A tuyere must be installed for air
//! injection to take effect, and it takes one point of wear per melted ore
//! charge until it breaks.

use serde::{Deserialize, Serialize};

/// Tuyere tier affects durability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuyereTier {
    /// 200 uses
    Copper,
    /// 300 uses
    Bronze,
    /// 400 uses
    Iron,
    /// 600 uses
    Steel,
}

impl TuyereTier {
    /// Get the max durability for this tier
    pub fn max_durability(&self) -> u32 {
        match self {
            TuyereTier::Copper => 200,
            TuyereTier::Bronze => 300,
            TuyereTier::Iron => 400,
            TuyereTier::Steel => 600,
        }
    }
}

/// A tuyere item with remaining durability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuyere {
    pub tier: TuyereTier,
    pub durability: u32,
}

impl Tuyere {
    /// Create a fresh tuyere at full durability
    pub fn new(tier: TuyereTier) -> Self {
        Self {
            tier,
            durability: tier.max_durability(),
        }
    }

    /// Apply wear. Returns true once the tuyere has broken.
    pub fn apply_wear(&mut self, amount: u32) -> bool {
        self.durability = self.durability.saturating_sub(amount);
        self.is_broken()
    }

    pub fn is_broken(&self) -> bool {
        self.durability == 0
    }
}
