//! Furnace save files
//!
//! Snapshots are bincode-encoded, lz4-compressed and written atomically via a
//! temp-file rename. The lit flag is stored next to the snapshot because it
//! lives in block state rather than in the snapshot itself.

use crate::simulation::FurnaceSnapshot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from reading or writing a furnace save file
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode save: {0}")]
    Encode(#[from] bincode_next::error::EncodeError),
    #[error("failed to decompress save: {0}")]
    Decompress(#[from] lz4_flex::block::DecompressError),
    #[error("failed to decode save: {0}")]
    Decode(#[from] bincode_next::error::DecodeError),
}

/// On-disk record: the snapshot plus the block-state lit flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnaceSave {
    pub snapshot: FurnaceSnapshot,
    pub lit: bool,
}

/// Manages furnace save files under a world directory
pub struct FurnacePersistence {
    world_dir: PathBuf,
}

impl FurnacePersistence {
    /// Create a persistence manager for the given world name
    pub fn new(world_name: &str) -> Result<Self, PersistenceError> {
        let world_dir = PathBuf::from("worlds").join(world_name);
        std::fs::create_dir_all(world_dir.join("furnaces"))?;
        Ok(Self { world_dir })
    }

    /// Save a furnace record to disk with compression
    pub fn save(&self, name: &str, save: &FurnaceSave) -> Result<(), PersistenceError> {
        let path = self.save_path(name);

        let serialized =
            bincode_next::serde::encode_to_vec(save, bincode_next::config::standard())?;
        let compressed = lz4_flex::compress_prepend_size(&serialized);

        // Atomic write: temp file, then rename
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, &compressed)?;
        std::fs::rename(temp_path, &path)?;

        log::info!(
            "[SAVE] Furnace '{}' saved ({} bytes compressed)",
            name,
            compressed.len()
        );
        Ok(())
    }

    /// Load a furnace record, or None if no save exists
    pub fn load(&self, name: &str) -> Result<Option<FurnaceSave>, PersistenceError> {
        let path = self.save_path(name);
        if !path.exists() {
            log::debug!("[LOAD] Furnace '{}' has no save file", name);
            return Ok(None);
        }
        let save = self.load_file(&path)?;
        log::debug!("[LOAD] Furnace '{}' loaded from disk", name);
        Ok(Some(save))
    }

    fn load_file(&self, path: &Path) -> Result<FurnaceSave, PersistenceError> {
        let compressed = std::fs::read(path)?;
        let serialized = lz4_flex::decompress_size_prepended(&compressed)?;
        let (save, _): (FurnaceSave, _) =
            bincode_next::serde::decode_from_slice(&serialized, bincode_next::config::standard())?;
        Ok(save)
    }

    fn save_path(&self, name: &str) -> PathBuf {
        self.world_dir.join("furnaces").join(format!("{}.bin", name))
    }

    /// Delete a world's save directory (used by tests and --regenerate runs)
    pub fn delete_world(world_name: &str) -> Result<(), PersistenceError> {
        let world_dir = PathBuf::from("worlds").join(world_name);
        if world_dir.exists() {
            std::fs::remove_dir_all(&world_dir)?;
            log::info!("Deleted world: {}", world_name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_save() -> FurnaceSave {
        FurnaceSave {
            snapshot: FurnaceSnapshot {
                fuel: vec![1, 1, 3],
                ore: vec![4, 4],
                burn_ticks_left: 512,
                air_ticks: 33,
                burn_temperature: 1350.0,
                temperature: 1210,
                melt_amount: 12,
            },
            lit: true,
        }
    }

    #[test]
    fn test_save_load_roundtrip() -> Result<(), PersistenceError> {
        let test_world = "test_furnace_roundtrip";
        let persistence = FurnacePersistence::new(test_world)?;

        let save = sample_save();
        persistence.save("furnace_0", &save)?;
        let loaded = persistence.load("furnace_0")?.expect("save file exists");
        assert_eq!(loaded, save);

        FurnacePersistence::delete_world(test_world)?;
        Ok(())
    }

    #[test]
    fn test_load_missing_returns_none() -> Result<(), PersistenceError> {
        let test_world = "test_furnace_missing";
        let persistence = FurnacePersistence::new(test_world)?;

        assert!(persistence.load("nope")?.is_none());

        FurnacePersistence::delete_world(test_world)?;
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_an_error() -> Result<(), PersistenceError> {
        let test_world = "test_furnace_corrupt";
        let persistence = FurnacePersistence::new(test_world)?;

        std::fs::write(persistence.save_path("bad"), b"not a save file")?;
        assert!(persistence.load("bad").is_err());

        FurnacePersistence::delete_world(test_world)?;
        Ok(())
    }
}
