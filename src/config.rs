use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use serde::Deserialize;
use std::path::Path;

use crate::entities::{PROJECTILE_LIFETIME_MS, grid_offsets};

/// Tunables for a match. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,

    pub player_start: (f32, f32),
    /// Horizontal speed while a direction is held, px/s
    pub player_speed: f32,
    /// Shots per second
    pub player_firing_rate: f64,

    /// Shots per second for each formation member
    pub enemy_firing_rate: f64,
    /// How often the formation as a whole may shoot, volleys per second
    pub volley_rate: f64,

    pub projectile_speed: f32,
    pub projectile_lifetime_ms: u64,
    pub muzzle_offset: f32,

    pub ship_size: f32,
    pub projectile_size: f32,

    pub formation_anchor: (f32, f32),
    pub formation_speed: f32,
    pub formation_rows: u16,
    pub formation_columns: u16,
    pub formation_spacing: f32,

    pub points_per_enemy: u32,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            player_start: (400.0, 525.0),
            player_speed: 250.0,
            player_firing_rate: 2.5,
            enemy_firing_rate: 1.0,
            volley_rate: 1.0,
            projectile_speed: 300.0,
            projectile_lifetime_ms: PROJECTILE_LIFETIME_MS,
            muzzle_offset: 32.0,
            ship_size: 32.0,
            projectile_size: 8.0,
            formation_anchor: (400.0, 125.0),
            formation_speed: 125.0,
            formation_rows: 2,
            formation_columns: 5,
            formation_spacing: 75.0,
            points_per_enemy: 10,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads a TOML config file. A missing file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .wrap_err_with(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_start.x", self.player_start.0),
            ("player_start.y", self.player_start.1),
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("muzzle_offset", self.muzzle_offset),
            ("ship_size", self.ship_size),
            ("projectile_size", self.projectile_size),
            ("formation_anchor.x", self.formation_anchor.0),
            ("formation_anchor.y", self.formation_anchor.1),
            ("formation_speed", self.formation_speed),
            ("formation_spacing", self.formation_spacing),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return Err(eyre!("{name} must be a finite number, got {value}"));
        }
        let rates = [
            ("player_firing_rate", self.player_firing_rate),
            ("enemy_firing_rate", self.enemy_firing_rate),
            ("volley_rate", self.volley_rate),
        ];
        let bad_rate = rates.iter().find(|(_, rate)| !rate.is_finite() || *rate <= 0.0);
        if let Some((name, value)) = bad_rate {
            return Err(eyre!("{name} must be a positive finite rate, got {value}"));
        }

        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(eyre!(
                "world size must be positive, got {}x{}",
                self.world_width,
                self.world_height
            ));
        }
        if self.ship_size <= 0.0 || self.projectile_size <= 0.0 {
            return Err(eyre!("ship and projectile sizes must be positive"));
        }
        if self.ship_size > self.world_width || self.ship_size > self.world_height {
            return Err(eyre!(
                "ship size {} does not fit a {}x{} world",
                self.ship_size,
                self.world_width,
                self.world_height
            ));
        }
        if self.projectile_speed <= 0.0 || self.player_speed < 0.0 || self.formation_speed < 0.0 {
            return Err(eyre!("speeds must not be negative and projectiles must move"));
        }
        if self.formation_rows == 0 || self.formation_columns == 0 {
            return Err(eyre!("formation needs at least one member"));
        }
        Ok(())
    }

    pub fn formation_offsets(&self) -> Vec<(f32, f32)> {
        grid_offsets(self.formation_rows, self.formation_columns, self.formation_spacing)
    }
}
