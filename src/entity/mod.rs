//! Entity items - furnace accessories

pub mod tuyere;

pub use tuyere::{Tuyere, TuyereTier};
