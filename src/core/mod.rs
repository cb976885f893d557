//! Core module - states, phase ordering, events, tunables and shared math.
//!
//! This module provides the foundation that all other gameplay plugins build upon.

mod config;
mod error;
mod events;
pub mod layers;
mod plugin;
mod states;
mod tween;

pub use config::*;
pub use error::ConfigError;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
pub use tween::*;
