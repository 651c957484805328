//! Room design state
//!
//! - `RoomConfiguration`: the selected source and materials
//! - `ConfigurationStore`: single owner of the configuration and its analysis

mod configuration;
mod store;

pub use configuration::{RoomConfiguration, Selection, Slot};
pub use store::ConfigurationStore;
