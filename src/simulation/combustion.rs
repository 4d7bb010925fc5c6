//! Combustion engine
//!
//! Burns fuel charges one at a time, tracking the remaining burn duration and
//! the intrinsic temperature of the charge. Also holds the residual bellows
//! airflow, the only combustion state an external caller can mutate.

use crate::entity::Tuyere;
use crate::simulation::furnace::FuelCharge;
use crate::simulation::materials::Materials;
use std::collections::VecDeque;

/// Consumes one fuel charge at a time while the furnace is lit
#[derive(Debug, Clone, Default)]
pub struct CombustionEngine {
    /// Ticks remaining for the charge currently burning; 0 means a new
    /// charge is needed
    pub burn_ticks_left: i64,
    /// Intrinsic temperature of the charge currently burning; 0 when nothing
    /// burns
    pub burn_temperature: f32,
    /// Residual bellows airflow, decays by one per tick
    pub air_ticks: i64,
}

impl CombustionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance combustion by one tick. Only called while lit.
    ///
    /// When the current charge runs out the head of the fuel queue is
    /// consumed; an empty queue leaves the engine at zero burn temperature so
    /// the thermal model cools the furnace down.
    pub fn step(&mut self, fuel_queue: &mut VecDeque<FuelCharge>, materials: &Materials) {
        self.burn_ticks_left -= 1;
        if self.burn_ticks_left <= 0 {
            if let Some(charge) = fuel_queue.pop_front() {
                let fuel = materials.fuel(charge.material);
                self.burn_ticks_left = fuel.burn_ticks;
                self.burn_temperature = fuel.burn_temperature;
                log::debug!(
                    "consumed fuel charge {} ({} ticks at {}°)",
                    charge.material,
                    fuel.burn_ticks,
                    fuel.burn_temperature
                );
            } else {
                self.burn_temperature = 0.0;
            }
        }
    }

    /// Bellows intake. Effective only while a charge is burning and a tuyere
    /// is installed; capped at `max_air_ticks`.
    pub fn inject_air(&mut self, amount: i64, tuyere: Option<&Tuyere>, max_air_ticks: i64) {
        if tuyere.is_none() || self.burn_ticks_left <= 0 {
            return;
        }
        self.air_ticks = (self.air_ticks + amount).min(max_air_ticks);
    }

    /// Decay residual airflow by one tick, floored at zero
    pub fn decay_air(&mut self) {
        if self.air_ticks > 0 {
            self.air_ticks -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::TuyereTier;
    use crate::simulation::materials::{FuelDef, MaterialDef, MaterialId, MaterialTag};

    fn test_materials() -> Materials {
        let mut materials = Materials::new();
        materials.register(MaterialDef {
            id: 50,
            name: "Test Fuel".to_string(),
            tags: vec![MaterialTag::Fuel],
            fuel: Some(FuelDef {
                burn_ticks: 10,
                burn_temperature: 200.0,
            }),
            smelt: None,
        });
        materials
    }

    #[test]
    fn test_consumes_head_charge_when_exhausted() {
        let materials = test_materials();
        let mut engine = CombustionEngine::new();
        let mut queue: VecDeque<FuelCharge> = VecDeque::from([FuelCharge { material: 50 }]);

        engine.step(&mut queue, &materials);
        assert!(queue.is_empty());
        assert_eq!(engine.burn_ticks_left, 10);
        assert_eq!(engine.burn_temperature, 200.0);

        // Burns down one tick at a time without touching the queue
        for expected in (0..10).rev() {
            engine.step(&mut queue, &materials);
            assert_eq!(engine.burn_ticks_left, expected.max(0));
        }
        assert_eq!(engine.burn_temperature, 0.0);
    }

    #[test]
    fn test_unknown_fuel_burns_out_immediately() {
        let materials = test_materials();
        let mut engine = CombustionEngine::new();
        let mut queue: VecDeque<FuelCharge> = VecDeque::from([FuelCharge { material: 9999 }]);

        engine.step(&mut queue, &materials);
        assert_eq!(engine.burn_ticks_left, 0);
        assert_eq!(engine.burn_temperature, 0.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_inject_air_caps_at_limit() {
        let mut engine = CombustionEngine::new();
        engine.burn_ticks_left = 5;
        let tuyere = Tuyere::new(TuyereTier::Copper);

        engine.inject_air(700, Some(&tuyere), 600);
        assert_eq!(engine.air_ticks, 600);

        engine.inject_air(50, Some(&tuyere), 600);
        assert_eq!(engine.air_ticks, 600);
    }

    #[test]
    fn test_inject_air_requires_tuyere_and_burning_charge() {
        let mut engine = CombustionEngine::new();
        let tuyere = Tuyere::new(TuyereTier::Copper);

        // No burning charge
        engine.burn_ticks_left = 0;
        engine.inject_air(100, Some(&tuyere), 600);
        assert_eq!(engine.air_ticks, 0);

        // No tuyere
        engine.burn_ticks_left = 5;
        engine.inject_air(100, None, 600);
        assert_eq!(engine.air_ticks, 0);

        engine.inject_air(100, Some(&tuyere), 600);
        assert_eq!(engine.air_ticks, 100);
    }

    #[test]
    fn test_air_decays_to_zero_and_stays() {
        let mut engine = CombustionEngine::new();
        engine.air_ticks = 2;
        engine.decay_air();
        engine.decay_air();
        assert_eq!(engine.air_ticks, 0);
        engine.decay_air();
        assert_eq!(engine.air_ticks, 0);
    }
}
