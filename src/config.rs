//! Furnace tuning parameters - serializable to RON for presets
//!
//! The defaults reproduce the reference furnace constants. A preset file can
//! override them without recompiling; bad files fall back to defaults with a
//! warning so a furnace is never left without a config.

use anyhow::{Context, Result};
use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete furnace tuning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnaceConfig {
    /// Degrees gained per tick while heating (doubled under airflow)
    pub temperature_modifier_heating: f32,

    /// Queue capacity contributed by each chimney level
    pub capacity_per_level: usize,

    /// Ticks between structure capacity recomputes
    pub capacity_interval_ticks: i32,

    /// Upper bound on residual airflow ticks
    pub max_air_ticks: i64,

    /// Extent of the item intake volume above the furnace mouth
    pub intake_extent: IVec3,
}

impl Default for FurnaceConfig {
    fn default() -> Self {
        Self {
            temperature_modifier_heating: 1.0,
            capacity_per_level: 4,
            capacity_interval_ticks: 20,
            max_air_ticks: 600,
            intake_extent: IVec3::new(1, 5, 1),
        }
    }
}

impl FurnaceConfig {
    /// Load a config from a RON file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    log::info!("loaded furnace config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse config {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Write this config as a RON preset
    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized = ron::ser::to_string_pretty(self, Default::default())
            .context("Failed to serialize furnace config")?;
        std::fs::write(path, serialized).context("Failed to write furnace config file")?;
        Ok(())
    }
}
