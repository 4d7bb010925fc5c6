//! Material intake
//!
//! Scans the volume above the furnace mouth for fuel, ore and flux stacks and
//! moves them into the charge queues one unit at a time, up to capacity.

use crate::simulation::furnace::{FuelCharge, OreCharge};
use crate::simulation::materials::Materials;
use crate::simulation::thermal::ThermalModel;
use crate::world::env::FurnaceEnv;
use glam::IVec3;
use std::collections::VecDeque;

/// Scan the intake volume and fill the charge queues up to capacity.
///
/// Fuel stacks transfer freely. Ore only enters paired with flux: one flux
/// unit is consumed per ore charge, both or neither, and at most one flux
/// source and one ore source are tracked per call. Adding ore rebalances the
/// internal temperature: a resting furnace gaining its first charge starts
/// cold, and any growth spreads the existing heat across the larger charge
/// count (integer truncation).
#[allow(clippy::too_many_arguments)]
pub fn ingest<E: FurnaceEnv + ?Sized>(
    env: &mut E,
    materials: &Materials,
    mouth: IVec3,
    extent: IVec3,
    max_fuel: usize,
    max_ore: usize,
    fuel_queue: &mut VecDeque<FuelCharge>,
    ore_queue: &mut VecDeque<OreCharge>,
    thermal: &mut ThermalModel,
) {
    let mut flux_key = None;
    let mut ore_key = None;

    for key in env.scan_items(mouth, mouth + extent) {
        let Some(stack) = env.item_stack(key) else {
            continue;
        };
        let material = stack.material_id;

        if materials.is_fuel(material) {
            while fuel_queue.len() < max_fuel {
                let Some(stack) = env.item_stack(key) else {
                    break;
                };
                let emptied = stack.take_one();
                fuel_queue.push_back(FuelCharge { material });
                if emptied {
                    env.despawn_item(key);
                    break;
                }
            }
        } else if materials.is_smeltable(material) {
            ore_key = Some(key);
        } else if materials.is_flux(material) {
            flux_key = Some(key);
        }
    }

    let before = ore_queue.len();
    while ore_queue.len() < max_ore {
        let (Some(fk), Some(ok)) = (flux_key, ore_key) else {
            break;
        };

        // Both units or neither: verify both stacks before consuming
        if env.item_stack(fk).map_or(true, |s| s.is_empty()) {
            break;
        }
        let Some(ore) = env.item_stack(ok) else {
            break;
        };
        let material = ore.material_id;
        if ore.take_one() {
            env.despawn_item(ok);
            ore_key = None;
        }
        ore_queue.push_back(OreCharge { material });

        let Some(flux) = env.item_stack(fk) else {
            break;
        };
        if flux.take_one() {
            env.despawn_item(fk);
            flux_key = None;
        }
    }

    if before == 0 && !ore_queue.is_empty() {
        // A resting furnace starts its batch cold
        thermal.temperature = 0;
    }
    if before < ore_queue.len() {
        // Spread the existing heat across the larger charge count
        thermal.temperature = thermal.temperature * before as i32 / ore_queue.len() as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::materials::MaterialId;
    use crate::world::{ItemStack, SimWorld};

    const MOUTH: IVec3 = IVec3::new(0, 65, 0);
    const EXTENT: IVec3 = IVec3::new(1, 5, 1);

    fn run_ingest(
        world: &mut SimWorld,
        max_fuel: usize,
        max_ore: usize,
        fuel_queue: &mut VecDeque<FuelCharge>,
        ore_queue: &mut VecDeque<OreCharge>,
        thermal: &mut ThermalModel,
    ) {
        let materials = Materials::new();
        ingest(
            world, &materials, MOUTH, EXTENT, max_fuel, max_ore, fuel_queue, ore_queue, thermal,
        );
    }

    #[test]
    fn test_fuel_moves_one_unit_at_a_time_up_to_capacity() {
        let mut world = SimWorld::new(2);
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::CHARCOAL, 10));

        let mut fuel_queue = VecDeque::new();
        let mut ore_queue = VecDeque::new();
        let mut thermal = ThermalModel::new();
        run_ingest(
            &mut world,
            8,
            8,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );

        assert_eq!(fuel_queue.len(), 8);
        // Two units left in the world stack
        assert_eq!(world.item_count(), 1);
    }

    #[test]
    fn test_exhausted_fuel_stack_despawns() {
        let mut world = SimWorld::new(2);
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::CHARCOAL, 3));

        let mut fuel_queue = VecDeque::new();
        let mut ore_queue = VecDeque::new();
        let mut thermal = ThermalModel::new();
        run_ingest(
            &mut world,
            8,
            8,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );

        assert_eq!(fuel_queue.len(), 3);
        assert_eq!(world.item_count(), 0);
    }

    #[test]
    fn test_ore_requires_flux_pairing() {
        let mut world = SimWorld::new(2);
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::HEMATITE, 4));

        let mut fuel_queue = VecDeque::new();
        let mut ore_queue = VecDeque::new();
        let mut thermal = ThermalModel::new();
        run_ingest(
            &mut world,
            8,
            8,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );
        // No flux in the volume: nothing enters
        assert!(ore_queue.is_empty());

        world.spawn_item(MOUTH, ItemStack::new(MaterialId::FLUX_DUST, 2));
        run_ingest(
            &mut world,
            8,
            8,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );
        // Flux runs out after two pairs
        assert_eq!(ore_queue.len(), 2);
        // Ore stack remains with 2 units, flux stack despawned
        assert_eq!(world.item_count(), 1);
    }

    #[test]
    fn test_cold_start_resets_temperature() {
        let mut world = SimWorld::new(2);
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::HEMATITE, 1));
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::FLUX_DUST, 1));

        let mut fuel_queue = VecDeque::new();
        let mut ore_queue = VecDeque::new();
        let mut thermal = ThermalModel { temperature: 840 };
        run_ingest(
            &mut world,
            8,
            8,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );

        assert_eq!(ore_queue.len(), 1);
        assert_eq!(thermal.temperature, 0);
    }

    #[test]
    fn test_dilution_truncates() {
        let mut world = SimWorld::new(2);
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::HEMATITE, 2));
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::FLUX_DUST, 2));

        let mut fuel_queue = VecDeque::new();
        let mut ore_queue: VecDeque<OreCharge> = VecDeque::from([
            OreCharge {
                material: MaterialId::HEMATITE,
            },
            OreCharge {
                material: MaterialId::HEMATITE,
            },
        ]);
        let mut thermal = ThermalModel { temperature: 100 };
        run_ingest(
            &mut world,
            8,
            4,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );

        // Queue grew 2 -> 4 at temperature 100: diluted to 100 * 2 / 4 = 50
        assert_eq!(ore_queue.len(), 4);
        assert_eq!(thermal.temperature, 50);
    }

    #[test]
    fn test_capacity_limits_intake() {
        let mut world = SimWorld::new(2);
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::CHARCOAL, 10));
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::HEMATITE, 10));
        world.spawn_item(MOUTH, ItemStack::new(MaterialId::FLUX_DUST, 10));

        let mut fuel_queue = VecDeque::new();
        let mut ore_queue = VecDeque::new();
        let mut thermal = ThermalModel::new();
        run_ingest(
            &mut world,
            0,
            0,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );

        assert!(fuel_queue.is_empty());
        assert!(ore_queue.is_empty());
        assert_eq!(world.item_count(), 3);
    }

    #[test]
    fn test_items_outside_volume_are_ignored() {
        let mut world = SimWorld::new(2);
        world.spawn_item(IVec3::new(0, 90, 0), ItemStack::new(MaterialId::CHARCOAL, 5));

        let mut fuel_queue = VecDeque::new();
        let mut ore_queue = VecDeque::new();
        let mut thermal = ThermalModel::new();
        run_ingest(
            &mut world,
            8,
            8,
            &mut fuel_queue,
            &mut ore_queue,
            &mut thermal,
        );

        assert!(fuel_queue.is_empty());
        assert_eq!(world.item_count(), 1);
    }
}
