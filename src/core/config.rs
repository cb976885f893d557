//! Gameplay tunables loaded from an external RON file.
//!
//! Allows tweaking speeds, distances and time constants without recompilation.
//! Every section falls back to its defaults field by field.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;
use crate::camera::CameraConfig;
use crate::player::PlayerConfig;
use crate::world::{DoorConfig, LadderConfig};

/// Default location of the tunables file.
pub const TUNABLES_PATH: &str = "assets/data/tunables.ron";

/// All per-instance tunables, used as construction defaults by the spawners.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameTunables {
    pub player: PlayerConfig,
    pub door: DoorConfig,
    pub ladder: LadderConfig,
    pub camera: CameraConfig,
}

impl GameTunables {
    /// Parse tunables from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, ConfigError> {
        ron::from_str::<Self>(contents)
            .map(Self::sanitized)
            .map_err(|e| ConfigError::Parse {
                path: path.to_string(),
                details: e.to_string(),
            })
    }

    /// Load tunables from a file, failing on any problem.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound(display));
        }
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron(&display, &contents)
    }

    /// Load tunables from the default path, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(TUNABLES_PATH) {
            Ok(tunables) => {
                info!("Loaded tunables from {}", TUNABLES_PATH);
                tunables
            }
            Err(ConfigError::NotFound(path)) => {
                warn!("Tunables file {} not found. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Floor every time constant and speed to a usable value.
    pub fn sanitized(self) -> Self {
        Self {
            player: self.player.sanitized(),
            door: self.door.sanitized(),
            ladder: self.ladder.sanitized(),
            camera: self.camera.sanitized(),
        }
    }
}

/// System to load tunables at startup unless a test or caller already
/// inserted them.
pub fn load_tunables(mut commands: Commands, existing: Option<Res<GameTunables>>) {
    if existing.is_none() {
        commands.insert_resource(GameTunables::load());
    }
}
