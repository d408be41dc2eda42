use super::track::TrackLayout;
use crate::domain::errors::{RouletteError, RouletteResult};
use serde::{Deserialize, Serialize};

/// Upper bound on full laps per spin
pub const MAX_ROTATIONS: u32 = 100;

/// Tunables of the roulette. Every field has a default, so a partial JSON
/// object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouletteConfig {
    /// Row height of the track in pixels
    pub item_height: f64,
    /// Rows rendered in the window
    pub visible_slots: usize,
    /// Full laps before landing, inclusive range
    pub min_rotations: u32,
    pub max_rotations: u32,
    /// Spin duration window in milliseconds
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    /// How long the celebration burst stays on screen
    pub celebration_ms: u32,
    /// How long a toast stays on screen
    pub toast_ms: u32,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            item_height: 70.0,
            visible_slots: 5,
            min_rotations: 5,
            max_rotations: 7,
            min_duration_ms: 4000.0,
            max_duration_ms: 5500.0,
            celebration_ms: 2500,
            toast_ms: 3000,
        }
    }
}

impl RouletteConfig {
    pub fn from_json(json: &str) -> RouletteResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RouletteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RouletteResult<()> {
        if !(self.item_height > 0.0) || !self.item_height.is_finite() {
            return Err(RouletteError::InvalidConfig(format!(
                "item_height must be positive, got {}",
                self.item_height
            )));
        }
        if self.visible_slots == 0 {
            return Err(RouletteError::InvalidConfig("visible_slots must be at least 1".into()));
        }
        if self.min_rotations < 1 {
            return Err(RouletteError::InvalidConfig(
                "min_rotations must be at least 1".into(),
            ));
        }
        if self.max_rotations > MAX_ROTATIONS {
            return Err(RouletteError::InvalidConfig(format!(
                "max_rotations must be at most {}, got {}",
                MAX_ROTATIONS, self.max_rotations
            )));
        }
        if self.min_rotations > self.max_rotations {
            return Err(RouletteError::InvalidConfig(format!(
                "rotation range {}..={} is empty",
                self.min_rotations, self.max_rotations
            )));
        }
        if !(self.min_duration_ms > 0.0) || self.min_duration_ms > self.max_duration_ms {
            return Err(RouletteError::InvalidConfig(format!(
                "duration range {}..={} ms is invalid",
                self.min_duration_ms, self.max_duration_ms
            )));
        }
        Ok(())
    }

    pub fn layout(&self) -> TrackLayout {
        TrackLayout::new(self.item_height, self.visible_slots)
    }
}
