//! Material definitions and registry
//!
//! Data-driven lookup for everything the furnace needs to know about an item
//! stack: is it fuel, how long and how hot does it burn, is it a smeltable
//! ore, how much molten metal does it yield, is it flux.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Built-in material IDs
pub struct MaterialId;

impl MaterialId {
    pub const AIR: u16 = 0;

    // Fuels
    pub const CHARCOAL: u16 = 1;
    pub const COAL: u16 = 2;
    pub const COKE: u16 = 3;

    // Iron ores (blast furnace feedstock)
    pub const HEMATITE: u16 = 4;
    pub const MAGNETITE: u16 = 5;
    pub const LIMONITE: u16 = 6;

    // Flux
    pub const FLUX_DUST: u16 = 7;

    // Refined output
    pub const PIG_IRON: u16 = 8;
}

/// Tags for material categorization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialTag {
    /// Combustible furnace fuel
    Fuel,
    /// Smeltable ore
    Ore,
    /// Flux dust consumed alongside ore
    Flux,
    /// Refined metal
    Metal,
}

/// Burn properties of a fuel material
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelDef {
    /// Ticks one charge sustains combustion
    pub burn_ticks: i64,
    /// Intrinsic temperature while the charge burns
    pub burn_temperature: f32,
}

/// Smelting properties of an ore material
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmeltDef {
    /// Internal temperature that must be exceeded before the charge melts
    pub melt_temperature: i32,
    /// Units of molten metal one charge yields
    pub smelt_amount: i32,
}

/// Definition of a material's properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDef {
    pub id: u16,
    pub name: String,
    pub tags: Vec<MaterialTag>,
    /// Present iff the material can be burned as furnace fuel
    pub fuel: Option<FuelDef>,
    /// Present iff the material can be melted down
    pub smelt: Option<SmeltDef>,
}

/// Material registry (loaded once, immutable during simulation)
pub struct Materials {
    defs: HashMap<u16, MaterialDef>,
}

impl Materials {
    pub fn new() -> Self {
        let mut registry = Self {
            defs: HashMap::new(),
        };
        registry.register_default_materials();
        registry
    }

    fn register_default_materials(&mut self) {
        self.register(MaterialDef {
            id: MaterialId::CHARCOAL,
            name: "Charcoal".to_string(),
            tags: vec![MaterialTag::Fuel],
            fuel: Some(FuelDef {
                burn_ticks: 8000,
                burn_temperature: 1350.0,
            }),
            smelt: None,
        });

        self.register(MaterialDef {
            id: MaterialId::COAL,
            name: "Bituminous Coal".to_string(),
            tags: vec![MaterialTag::Fuel],
            fuel: Some(FuelDef {
                burn_ticks: 2200,
                burn_temperature: 1415.0,
            }),
            smelt: None,
        });

        self.register(MaterialDef {
            id: MaterialId::COKE,
            name: "Coke".to_string(),
            tags: vec![MaterialTag::Fuel],
            fuel: Some(FuelDef {
                burn_ticks: 6000,
                burn_temperature: 1540.0,
            }),
            smelt: None,
        });

        // Iron ores all melt into pig iron at the same threshold
        for (id, name) in [
            (MaterialId::HEMATITE, "Hematite"),
            (MaterialId::MAGNETITE, "Magnetite"),
            (MaterialId::LIMONITE, "Limonite"),
        ] {
            self.register(MaterialDef {
                id,
                name: name.to_string(),
                tags: vec![MaterialTag::Ore],
                fuel: None,
                smelt: Some(SmeltDef {
                    melt_temperature: 1535,
                    smelt_amount: 25,
                }),
            });
        }

        self.register(MaterialDef {
            id: MaterialId::FLUX_DUST,
            name: "Flux Dust".to_string(),
            tags: vec![MaterialTag::Flux],
            fuel: None,
            smelt: None,
        });

        self.register(MaterialDef {
            id: MaterialId::PIG_IRON,
            name: "Pig Iron".to_string(),
            tags: vec![MaterialTag::Metal],
            fuel: None,
            smelt: None,
        });
    }

    /// Register a material, replacing any previous definition with the same id
    pub fn register(&mut self, def: MaterialDef) {
        log::debug!("registered material {} ({})", def.id, def.name);
        self.defs.insert(def.id, def);
    }

    pub fn get(&self, id: u16) -> Option<&MaterialDef> {
        self.defs.get(&id)
    }

    /// True when the material can be burned as furnace fuel
    pub fn is_fuel(&self, id: u16) -> bool {
        self.get(id).is_some_and(|def| def.fuel.is_some())
    }

    /// True when the material is an ore the furnace can melt
    pub fn is_smeltable(&self, id: u16) -> bool {
        self.get(id).is_some_and(|def| def.smelt.is_some())
    }

    /// True when the material is flux dust
    pub fn is_flux(&self, id: u16) -> bool {
        self.get(id)
            .is_some_and(|def| def.tags.contains(&MaterialTag::Flux))
    }

    /// Fuel table lookup. Unknown fuels burn for zero ticks at zero
    /// temperature rather than failing.
    pub fn fuel(&self, id: u16) -> FuelDef {
        self.get(id).and_then(|def| def.fuel).unwrap_or(FuelDef {
            burn_ticks: 0,
            burn_temperature: 0.0,
        })
    }

    /// Smelting lookup for ore materials
    pub fn smelt(&self, id: u16) -> Option<SmeltDef> {
        self.get(id).and_then(|def| def.smelt)
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}
