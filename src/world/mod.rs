//! Furnace environment - world items, collaborator traits, persistence

pub mod env;
pub mod item;
pub mod persistence;
pub mod sim_world;

pub use env::{FurnaceEnv, HeatReceiver};
pub use item::{ItemKey, ItemStack};
pub use persistence::{FurnacePersistence, FurnaceSave, PersistenceError};
pub use sim_world::{SimWorld, SlagCell};
