//! Thermal model
//!
//! Moves the internal temperature toward a target derived from the burning
//! charge and the residual airflow bonus. Heating under airflow runs twice as
//! fast, cooling under airflow at half speed. Heat is pushed to the receiver
//! below on every tick with any heat in the system.

use crate::simulation::combustion::CombustionEngine;
use crate::world::env::HeatReceiver;
use glam::IVec3;

/// Upper bound on internal temperature
pub const MAX_TEMPERATURE: f32 = 1601.0;

/// Outcome of a thermal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalOutcome {
    Burning,
    /// Internal and burn temperature both reached zero
    Extinguished,
}

/// Integer temperature ledger with asymmetric heating and cooling rates
#[derive(Debug, Clone, Default)]
pub struct ThermalModel {
    pub temperature: i32,
}

impl ThermalModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick. Only called while lit.
    ///
    /// Temperature moves toward `min(MAX_TEMPERATURE, burn_temperature +
    /// air_ticks)` with integer truncation, so a 0.5x cooling modifier still
    /// loses a whole degree per tick.
    pub fn step<E: HeatReceiver + ?Sized>(
        &mut self,
        combustion: &mut CombustionEngine,
        env: &mut E,
        below: IVec3,
        heating_modifier: f32,
    ) -> ThermalOutcome {
        combustion.decay_air();

        if self.temperature > 0 || combustion.burn_temperature > 0.0 {
            let target = (combustion.burn_temperature + combustion.air_ticks as f32)
                .min(MAX_TEMPERATURE);
            let current = self.temperature as f32;
            if current < target {
                // Bellows airflow doubles the heating rate
                let modifier = if combustion.air_ticks > 0 { 2.0 } else { 1.0 };
                self.temperature = (current + modifier * heating_modifier) as i32;
            } else if current > target {
                // ...and halves the cooling rate
                let modifier = if combustion.air_ticks > 0 { 0.5 } else { 1.0 };
                self.temperature = (current - modifier * heating_modifier) as i32;
            }
            self.temperature = self.temperature.clamp(0, MAX_TEMPERATURE as i32);
            env.accept_heat(below, self.temperature);
        }

        if self.temperature <= 0 && combustion.burn_temperature <= 0.0 {
            self.temperature = 0;
            ThermalOutcome::Extinguished
        } else {
            ThermalOutcome::Burning
        }
    }
}
