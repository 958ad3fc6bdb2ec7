//! Game configuration shared by the scene builders and the controller

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::TableBounds;

/// Host configuration errors, reported when the config is loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("table bounds are empty or inverted")]
    InvalidBounds,
    #[error("{name} {value} does not fit inside the table bounds")]
    OversizedRadius { name: &'static str, value: f32 },
}

/// Tunable dimensions and tessellation for the table-top game.
/// Hosts can override individual fields through JSON; anything left
/// out keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mallet_radius: f32,
    pub mallet_height: f32,
    pub puck_radius: f32,
    pub puck_height: f32,
    /// Fan/strip tessellation for the puck and mallets
    pub segments: u32,
    /// Coarser tessellation for the decorative desk lamp
    pub stand_segments: u32,
    pub bounds: TableBounds,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mallet_radius: 0.08,
            mallet_height: 0.15,
            puck_radius: 0.06,
            puck_height: 0.02,
            segments: 32,
            stand_segments: 16,
            bounds: TableBounds::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a host-supplied JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run on: every
    /// dimension positive, non-empty table bounds, and each radius
    /// strictly inside half of every table extent it is clamped
    /// against (the puck crosses the whole table, a mallet only its
    /// own half).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("mallet_radius", self.mallet_radius),
            ("mallet_height", self.mallet_height),
            ("puck_radius", self.puck_radius),
            ("puck_height", self.puck_height),
        ];
        for (name, value) in dimensions {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        let b = self.bounds;
        if !(b.left < b.right && b.far < b.near) {
            return Err(ConfigError::InvalidBounds);
        }

        let width = b.right - b.left;
        let depth = b.near - b.far;
        if self.puck_radius >= width / 2.0 || self.puck_radius >= depth / 2.0 {
            return Err(ConfigError::OversizedRadius {
                name: "puck_radius",
                value: self.puck_radius,
            });
        }
        let half_depth = b.near.min(-b.far);
        if self.mallet_radius >= width / 2.0 || self.mallet_radius >= half_depth / 2.0 {
            return Err(ConfigError::OversizedRadius {
                name: "mallet_radius",
                value: self.mallet_radius,
            });
        }
        Ok(())
    }

    /// Pick-test bounding-sphere radius for a mallet. Half the mallet
    /// height rather than the mallet radius; the sphere wraps the
    /// whole mallet including its handle.
    pub fn mallet_pick_radius(&self) -> f32 {
        self.mallet_height / 2.0
    }

    /// Blue mallet start position, centered on the near half
    pub fn blue_mallet_start(&self) -> Vec3 {
        Vec3::new(0.0, self.mallet_height / 2.0, 0.4)
    }

    /// Red mallet start position, centered on the far half
    pub fn red_mallet_start(&self) -> Vec3 {
        Vec3::new(0.0, self.mallet_height / 2.0, -0.4)
    }

    /// Puck start position, resting at the table center
    pub fn puck_start(&self) -> Vec3 {
        Vec3::new(0.0, self.puck_height / 2.0, 0.0)
    }
}
