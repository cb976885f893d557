//! Plates module - pressure plate sensors and the network that combines them.

mod components;
mod error;
mod network;
mod plugin;
mod sensor;
mod systems;

pub use components::PressurePlate;
pub use error::NetworkError;
pub use network::{
    PlateChange, PlateId, PlateListener, PlateNetwork, PlateNetworkBuilder, Subscriber,
};
pub use plugin::PlatesPlugin;
pub use sensor::{PlateState, Sensor};
pub use systems::{handle_plate_triggers, sync_plate_visuals};
