//! Simulation systems - materials, capacity, combustion, heat, melt ledger

pub mod capacity;
pub mod combustion;
pub mod furnace;
pub mod intake;
pub mod materials;
pub mod melt;
pub mod slag;
pub mod thermal;

pub use capacity::CapacityMonitor;
pub use combustion::CombustionEngine;
pub use furnace::{BlastFurnace, FuelCharge, FurnaceSnapshot, FurnaceStatus, OreCharge};
pub use materials::{FuelDef, MaterialDef, MaterialId, MaterialTag, Materials, SmeltDef};
pub use melt::MeltLedger;
pub use thermal::{ThermalModel, ThermalOutcome, MAX_TEMPERATURE};
