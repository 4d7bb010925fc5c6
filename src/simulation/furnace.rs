//! Blast furnace entity
//!
//! Owns the charge queues, the tuyere slot and the per-tick orchestration of
//! the capacity monitor, material intake, melt ledger, combustion engine,
//! thermal model and slag column. The tick order is fixed: capacity (slow
//! cadence) -> intake -> melt convert/drip -> combustion -> thermal -> slag
//! -> extinguish transition.

use crate::config::FurnaceConfig;
use crate::entity::Tuyere;
use crate::simulation::capacity::CapacityMonitor;
use crate::simulation::combustion::CombustionEngine;
use crate::simulation::materials::Materials;
use crate::simulation::melt::MeltLedger;
use crate::simulation::thermal::{ThermalModel, ThermalOutcome, MAX_TEMPERATURE};
use crate::simulation::{intake, slag};
use crate::world::env::FurnaceEnv;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One queued unit of fuel awaiting combustion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelCharge {
    pub material: u16,
}

/// One queued unit of ore awaiting melting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreCharge {
    pub material: u16,
}

/// Explicit lit/unlit state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnaceStatus {
    Unlit,
    Lit,
}

/// Point-in-time snapshot of all persisted furnace state, taken between
/// ticks. Field order is the wire order and must round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnaceSnapshot {
    pub fuel: Vec<u16>,
    pub ore: Vec<u16>,
    pub burn_ticks_left: i64,
    pub air_ticks: i64,
    pub burn_temperature: f32,
    pub temperature: i32,
    pub melt_amount: i32,
}

/// The multiblock blast furnace, one instance per structure location
pub struct BlastFurnace {
    pos: IVec3,
    config: FurnaceConfig,
    status: FurnaceStatus,
    fuel_queue: VecDeque<FuelCharge>,
    ore_queue: VecDeque<OreCharge>,
    capacity: CapacityMonitor,
    combustion: CombustionEngine,
    thermal: ThermalModel,
    melt: MeltLedger,
    tuyere: Option<Tuyere>,
}

impl BlastFurnace {
    pub fn new(pos: IVec3, config: FurnaceConfig) -> Self {
        Self {
            pos,
            config,
            status: FurnaceStatus::Unlit,
            fuel_queue: VecDeque::new(),
            ore_queue: VecDeque::new(),
            capacity: CapacityMonitor::new(),
            combustion: CombustionEngine::new(),
            thermal: ThermalModel::new(),
            melt: MeltLedger::new(),
            tuyere: None,
        }
    }

    /// Advance the furnace by one world tick.
    ///
    /// All external calls are synchronous and non-blocking; once a tick
    /// begins every phase runs to completion.
    pub fn tick<E: FurnaceEnv + ?Sized>(&mut self, env: &mut E, materials: &Materials) {
        let mouth = self.mouth();
        let below = self.below();

        // Slow cadence: recompute capacity from the chimney, then pull items
        // from the intake volume
        if self.capacity.tick(self.config.capacity_interval_ticks) {
            self.capacity
                .recompute(env.structure_height(self.pos), self.config.capacity_per_level);
            intake::ingest(
                env,
                materials,
                mouth,
                self.config.intake_extent,
                self.capacity.max_fuel,
                self.capacity.max_ore,
                &mut self.fuel_queue,
                &mut self.ore_queue,
                &mut self.thermal,
            );
        }

        // The melt ledger runs unconditionally so a residual pool keeps
        // draining after the fire goes out
        self.melt.convert(
            &mut self.ore_queue,
            materials,
            self.thermal.temperature,
            &mut self.combustion,
            &mut self.tuyere,
        );
        self.melt.drip(env, below);

        let mut outcome = ThermalOutcome::Burning;
        if self.status == FurnaceStatus::Lit {
            self.combustion.step(&mut self.fuel_queue, materials);
            outcome = self.thermal.step(
                &mut self.combustion,
                env,
                below,
                self.config.temperature_modifier_heating,
            );
        }

        let structure_height = env.structure_height(self.pos);
        slag::update(
            env,
            self.pos,
            self.fuel_queue.len() + self.ore_queue.len(),
            structure_height,
            self.is_lit(),
        );

        if outcome == ThermalOutcome::Extinguished {
            self.status = FurnaceStatus::Unlit;
            env.set_lit(self.pos, false);
            log::info!("furnace at {} extinguished", self.pos);
        }
    }

    /// True when both queues hold at least one charge and this instance runs
    /// the authoritative simulation (a passive replica never ignites).
    pub fn is_ignitable<E: FurnaceEnv + ?Sized>(&self, env: &E) -> bool {
        env.is_authoritative() && !self.fuel_queue.is_empty() && !self.ore_queue.is_empty()
    }

    /// Light the furnace. Returns false when not ignitable or already lit.
    pub fn ignite<E: FurnaceEnv + ?Sized>(&mut self, env: &mut E) -> bool {
        if self.status == FurnaceStatus::Lit || !self.is_ignitable(env) {
            return false;
        }
        self.status = FurnaceStatus::Lit;
        env.set_lit(self.pos, true);
        log::info!("furnace at {} lit", self.pos);
        true
    }

    /// Bellows blowing into the tuyere, the only external combustion input
    pub fn inject_air(&mut self, amount: i64) {
        self.combustion
            .inject_air(amount, self.tuyere.as_ref(), self.config.max_air_ticks);
    }

    pub fn install_tuyere(&mut self, tuyere: Tuyere) {
        self.tuyere = Some(tuyere);
    }

    pub fn tuyere(&self) -> Option<&Tuyere> {
        self.tuyere.as_ref()
    }

    pub fn status(&self) -> FurnaceStatus {
        self.status
    }

    /// Restore the lit flag from block state alongside a loaded snapshot
    pub fn set_status(&mut self, status: FurnaceStatus) {
        self.status = status;
    }

    pub fn is_lit(&self) -> bool {
        self.status == FurnaceStatus::Lit
    }

    pub fn pos(&self) -> IVec3 {
        self.pos
    }

    pub fn temperature(&self) -> i32 {
        self.thermal.temperature
    }

    pub fn burn_temperature(&self) -> f32 {
        self.combustion.burn_temperature
    }

    pub fn burn_ticks_left(&self) -> i64 {
        self.combustion.burn_ticks_left
    }

    pub fn air_ticks(&self) -> i64 {
        self.combustion.air_ticks
    }

    pub fn melt_amount(&self) -> i32 {
        self.melt.melt_amount
    }

    pub fn fuel_count(&self) -> usize {
        self.fuel_queue.len()
    }

    pub fn ore_count(&self) -> usize {
        self.ore_queue.len()
    }

    pub fn max_fuel(&self) -> usize {
        self.capacity.max_fuel
    }

    pub fn max_ore(&self) -> usize {
        self.capacity.max_ore
    }

    /// Take a point-in-time snapshot of all persisted state
    pub fn save(&self) -> FurnaceSnapshot {
        FurnaceSnapshot {
            fuel: self.fuel_queue.iter().map(|c| c.material).collect(),
            ore: self.ore_queue.iter().map(|c| c.material).collect(),
            burn_ticks_left: self.combustion.burn_ticks_left,
            air_ticks: self.combustion.air_ticks,
            burn_temperature: self.combustion.burn_temperature,
            temperature: self.thermal.temperature,
            melt_amount: self.melt.melt_amount,
        }
    }

    /// Restore state from a snapshot taken between ticks.
    ///
    /// Malformed values are clamped to their valid domains rather than
    /// rejected so the entity always stays loadable.
    pub fn load(&mut self, snapshot: FurnaceSnapshot) {
        self.fuel_queue = snapshot
            .fuel
            .into_iter()
            .map(|material| FuelCharge { material })
            .collect();
        self.ore_queue = snapshot
            .ore
            .into_iter()
            .map(|material| OreCharge { material })
            .collect();
        self.combustion.burn_ticks_left = snapshot.burn_ticks_left.max(0);
        self.combustion.air_ticks = snapshot.air_ticks.clamp(0, self.config.max_air_ticks);
        self.combustion.burn_temperature = snapshot.burn_temperature.clamp(0.0, MAX_TEMPERATURE);
        self.thermal.temperature = snapshot.temperature.clamp(0, MAX_TEMPERATURE as i32);
        self.melt.melt_amount = snapshot.melt_amount.max(0);
    }

    fn mouth(&self) -> IVec3 {
        self.pos + IVec3::Y
    }

    fn below(&self) -> IVec3 {
        self.pos - IVec3::Y
    }
}
