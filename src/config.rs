// World configuration: every tunable the game uses in one serde struct.
//
// Defaults reproduce the shipped balance; a JSON file can override any
// subset of fields (every field has a default, so partial files are fine).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A river rectangle in the outdoor scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiverRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// All gameplay tuning values.
///
/// Timers are in frame ticks (the game runs at 60 ticks per second), so
/// e.g. `tree_regrowth_ticks: 3600` is one minute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    // Scene
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub tree_count: usize,
    pub berry_count: usize,
    pub fish_per_river: usize,
    pub rivers: Vec<RiverRect>,

    // Movement
    pub fred_speed: f32,
    pub fish_speed: f32,
    pub pet_wander_speed: f32,
    pub pet_walk_speed: f32,
    pub pet_follow_fast: f32,
    pub pet_follow_slow: f32,

    // Interaction
    pub interaction_radius: f32,
    pub double_click_ms: u64,
    pub replant_threshold: f32,

    // Timers (ticks)
    pub tree_regrowth_ticks: u32,
    pub berry_regrowth_ticks: u32,
    pub egg_hatch_ticks: u32,
    pub pet_sleep_ticks: u32,
    pub pet_turn_ticks: u32,

    // Behavior chances (per tick)
    pub fish_turn_chance: f64,
    pub bowl_eat_chance: f64,
    pub bed_seek_chance: f64,

    // Economy
    pub chop_food_cost: i32,
    pub fish_food_cost: i32,
    pub berry_food_gain: i32,
    pub eat_food_gain: i32,
    pub house_wood_cost: u32,
    pub pet_house_wood_cost: u32,
    pub bed_berry_cost: u32,
    pub pet_coin_cost: u32,
    pub bowl_capacity: u32,
    pub max_beds_per_house: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            canvas_width: 800.0,
            canvas_height: 600.0,
            tree_count: 15,
            berry_count: 20,
            fish_per_river: 8,
            rivers: vec![
                RiverRect { x: 200.0, y: 450.0, w: 400.0, h: 100.0 },
                RiverRect { x: 650.0, y: 200.0, w: 100.0, h: 200.0 },
            ],
            fred_speed: 2.0,
            fish_speed: 0.5,
            pet_wander_speed: 0.3,
            pet_walk_speed: 0.8,
            pet_follow_fast: 1.5,
            pet_follow_slow: 0.5,
            interaction_radius: 60.0,
            double_click_ms: 500,
            replant_threshold: 10.0,
            tree_regrowth_ticks: 3600, // 1 minute
            berry_regrowth_ticks: 1800,
            egg_hatch_ticks: 180, // 3 seconds
            pet_sleep_ticks: 600,
            pet_turn_ticks: 120,
            fish_turn_chance: 0.02,
            bowl_eat_chance: 0.05,
            bed_seek_chance: 0.005,
            chop_food_cost: 10,
            fish_food_cost: 5,
            berry_food_gain: 5,
            eat_food_gain: 30,
            house_wood_cost: 10,
            pet_house_wood_cost: 5,
            bed_berry_cost: 3,
            pet_coin_cost: 3,
            bowl_capacity: 10,
            max_beds_per_house: 5,
        }
    }
}

impl WorldConfig {
    /// Parses a config from a JSON string. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }
}

/// Errors from loading a world config.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse world config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let config = WorldConfig::default();
        assert_eq!(config.tree_count, 15);
        assert_eq!(config.rivers.len(), 2);
        assert_eq!(config.tree_regrowth_ticks, 3600);
        assert_eq!(config.house_wood_cost, 10);
        assert_eq!(config.pet_coin_cost, 3);
    }

    #[test]
    fn test_partial_json_override() {
        let config = WorldConfig::from_json(r#"{ "tree_count": 3, "fred_speed": 4.0 }"#)
            .expect("valid config");
        assert_eq!(config.tree_count, 3);
        assert_eq!(config.fred_speed, 4.0);
        // Untouched fields keep defaults
        assert_eq!(config.berry_count, 20);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let result = WorldConfig::from_json("{ not json");
        assert!(result.is_err());
        let message: String = result.unwrap_err().into();
        assert!(message.contains("world config"));
    }
}
