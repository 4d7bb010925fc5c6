//! # Tatara - Multiblock Blast Furnace Simulation
//!
//! A tick-driven simulation of a multiblock blast furnace: fuel and ore
//! charges queued inside a chimney, bellows-driven airflow, and molten pig
//! iron dripping into the crucible below.

pub mod config;
pub mod entity;
pub mod simulation;
pub mod world;

pub use simulation::BlastFurnace;

/// Common imports for internal use
pub mod prelude {
    pub use crate::config::FurnaceConfig;
    pub use crate::simulation::{BlastFurnace, FurnaceStatus, MaterialId, Materials};
    pub use crate::world::{FurnaceEnv, HeatReceiver, ItemStack, SimWorld};
    pub use glam::IVec3;
}
