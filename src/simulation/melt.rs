//! Melt conversion ledger
//!
//! Converts ore charges into pending molten pig iron once the furnace runs
//! hotter than the charge's melt threshold, then drips the pool into the
//! receiver below at exactly one unit per tick so the crucible never sees a
//! burst.

use crate::entity::Tuyere;
use crate::simulation::combustion::CombustionEngine;
use crate::simulation::furnace::OreCharge;
use crate::simulation::materials::{MaterialId, Materials};
use crate::world::env::HeatReceiver;
use glam::IVec3;
use std::collections::VecDeque;

/// Pending molten output and its fixed-rate drain
#[derive(Debug, Clone, Default)]
pub struct MeltLedger {
    /// Units of molten metal awaiting transfer to the receiver
    pub melt_amount: i32,
}

impl MeltLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Melt the ore charge at the queue head if the furnace is hot enough.
    ///
    /// Melting uses up the burning fuel charge instantly (`burn_ticks_left`
    /// drops to zero so combustion re-evaluates next step) and wears the
    /// installed tuyere by one point; a broken tuyere is removed.
    pub fn convert(
        &mut self,
        ore_queue: &mut VecDeque<OreCharge>,
        materials: &Materials,
        temperature: i32,
        combustion: &mut CombustionEngine,
        tuyere: &mut Option<Tuyere>,
    ) {
        // A charge without smelt data stays inert in the queue
        let Some(smelt) = ore_queue
            .front()
            .and_then(|head| materials.smelt(head.material))
        else {
            return;
        };
        if temperature <= smelt.melt_temperature {
            return;
        }

        let Some(charge) = ore_queue.pop_front() else {
            return;
        };
        self.melt_amount += smelt.smelt_amount;
        combustion.burn_ticks_left = 0;
        log::debug!(
            "melted ore charge {} into {} units ({} pending)",
            charge.material,
            smelt.smelt_amount,
            self.melt_amount
        );

        if let Some(installed) = tuyere {
            if installed.apply_wear(1) {
                log::info!("tuyere broke after melting a charge");
                *tuyere = None;
            }
        }
    }

    /// Hand at most one unit of molten pig iron to the receiver below.
    /// Runs even while unlit so a residual pool still drains; a rejected
    /// transfer is simply retried next tick.
    pub fn drip<E: HeatReceiver + ?Sized>(&mut self, env: &mut E, below: IVec3) {
        if self.melt_amount > 0 && env.accept_molten(below, MaterialId::PIG_IRON, 1) {
            self.melt_amount -= 1;
        }
    }
}
