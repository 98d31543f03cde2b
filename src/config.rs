use std::{fs, path::Path};

use color_eyre::{
    eyre::{ensure, WrapErr},
    Result,
};
use serde::{Deserialize, Serialize};

use crate::geometry::types::{Bounds, SpriteSize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub initial_allowed_length: f64,
    pub growth_per_food:        f64,
    pub food_bounds:            Bounds,
    pub food_size:              SpriteSize,
    /// Collision is only checked once the body has more points than this.
    pub min_body_points:        usize,
    /// How many of the newest points are left out of the collision polygon.
    pub tail_exclusion:         usize,
    pub collision_threshold:    f64,
    pub seed:                   Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_allowed_length: 150.0,
            growth_per_food:        50.0,
            food_bounds:            Bounds {
                min_x: 100,
                max_x: 1000,
                min_y: 100,
                max_y: 600,
            },
            food_size:              SpriteSize {
                width:  100,
                height: 100,
            },
            min_body_points:        30,
            tail_exclusion:         10,
            collision_threshold:    5.0,
            seed:                   None,
        }
    }
}

impl EngineConfig {
    /// # Errors
    ///
    /// Fails when a length, size or threshold is out of range.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_allowed_length > 0.0,
            "initial_allowed_length must be positive (got {})",
            self.initial_allowed_length
        );
        ensure!(
            self.growth_per_food > 0.0,
            "growth_per_food must be positive (got {})",
            self.growth_per_food
        );
        ensure!(
            self.food_size.width > 0 && self.food_size.height > 0,
            "food_size must be positive (got {}x{})",
            self.food_size.width,
            self.food_size.height
        );
        ensure!(
            self.collision_threshold >= 0.0,
            "collision_threshold must not be negative (got {})",
            self.collision_threshold
        );
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub frame_width:  i64,
    pub frame_height: i64,
    pub cell_width:   i64,
    pub cell_height:  i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_width:  1280,
            frame_height: 720,
            cell_width:   32,
            cell_height:  32,
        }
    }
}

impl DisplayConfig {
    /// # Errors
    ///
    /// Fails when the frame or cell size is not positive.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.frame_width > 0 && self.frame_height > 0,
            "frame size must be positive (got {}x{})",
            self.frame_width,
            self.frame_height
        );
        ensure!(
            self.cell_width > 0 && self.cell_height > 0,
            "cell size must be positive (got {}x{})",
            self.cell_width,
            self.cell_height
        );
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub engine:  EngineConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Loads a JSON config file, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read, isn't valid JSON, or holds values
    /// out of range.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let text = fs::read_to_string(path).wrap_err_with(|| {
                    format!("failed to read config {}", path.display())
                })?;
                Self::from_json(&text).wrap_err_with(|| {
                    format!("invalid config {}", path.display())
                })?
            }
            None => Self::default(),
        };

        Ok(config)
    }

    /// # Errors
    ///
    /// Fails on malformed JSON or values out of range.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).wrap_err("failed to parse config")?;
        config.engine.validate()?;
        config.display.validate()?;
        Ok(config)
    }
}
