//! World construction parameters
//!
//! A [`WorldConfig`] carries everything the host chooses at startup: bounds,
//! particle cap, speed/life limits, gravity, and the RNG seed. All fields
//! have serde defaults so a host can deserialize a partial JSON document and
//! get documented values for the rest.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Construction parameters for a [`World`](crate::sim::World)
///
/// Units are centimeters and seconds throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Initial world width in cm (usually the render surface width)
    pub width: u32,
    /// Initial world height in cm
    pub height: u32,

    /// Maximum lifespan of a spawned particle before it despawns, seconds
    pub max_life_s: f32,
    /// Maximum speed a particle can attain, cm/s
    pub max_speed_cms: f32,
    /// Maximum number of live particles at any moment
    pub max_particles: usize,
    /// Acceleration due to gravity, cm/s^2 (positive is downward, matching
    /// screen coordinates where y grows toward the floor)
    pub gravity: f32,

    /// RNG seed for reproducible runs; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Spawn fixed-velocity, long-lived particles instead of random ones
    pub debug_spawn: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            max_life_s: DEFAULT_MAX_LIFE_S,
            max_speed_cms: DEFAULT_MAX_SPEED_CMS,
            max_particles: DEFAULT_MAX_PARTICLES,
            gravity: DEFAULT_GRAVITY,

            seed: None,
            debug_spawn: false,
        }
    }
}

impl WorldConfig {
    /// Config with the given bounds and defaults for everything else
    pub fn with_bounds(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = WorldConfig::default();
        assert_eq!(config.max_particles, 1000);
        assert!((config.max_life_s - 20.0).abs() < f32::EPSILON);
        assert!((config.max_speed_cms - 700.0).abs() < f32::EPSILON);
        assert!((config.gravity - 980.0).abs() < f32::EPSILON);
        assert!(config.seed.is_none());
        assert!(!config.debug_spawn);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = WorldConfig::from_json(r#"{"width": 800, "height": 600, "seed": 42}"#)
            .expect("valid json");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.seed, Some(42));
        // Unspecified fields fall back to defaults
        assert_eq!(config.max_particles, 1000);
        assert!((config.gravity - 980.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_json_round_trip() {
        let config = WorldConfig {
            width: 200,
            height: 300,
            max_particles: 64,
            seed: Some(7),
            debug_spawn: true,
            ..Default::default()
        };
        let json = config.to_json().expect("serializable");
        let parsed = WorldConfig::from_json(&json).expect("round trip");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_garbage_json_is_rejected() {
        assert!(WorldConfig::from_json("not json").is_err());
    }
}
