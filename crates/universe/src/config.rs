//! Simulation settings.
//!
//! Every field has a default, so a host may send a partial JSON document.

use serde::{Deserialize, Serialize};
use universe_engine::{Color, GameConfig, Rng};

use crate::error::ConfigError;
use crate::sizing::DEFAULT_EASING_RATE;

/// Closed sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut Rng) -> f32 {
        rng.range_f32(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::BadRange { field, min: self.min, max: self.max })
        }
    }
}

/// Colors and glow for everything drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub planet_fill: Color,
    pub planet_glow: Color,
    pub planet_glow_blur: f32,
    pub satellite_fill: Color,
    pub spawned_satellite_fill: Color,
    pub satellite_glow: Color,
    pub satellite_glow_blur: f32,
}

impl Default for Palette {
    fn default() -> Self {
        let planet = Color::rgb8(100, 120, 230);
        Self {
            background: Color::rgb8(0x12, 0x12, 0x12),
            planet_fill: planet,
            planet_glow: planet,
            planet_glow_blur: 20.0,
            satellite_fill: Color::WHITE,
            spawned_satellite_fill: Color::rgb8(0xea, 0xea, 0xea),
            satellite_glow: Color::WHITE,
            satellite_glow_blur: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Tick period in milliseconds.
    pub tick_ms: f32,
    pub world_width: f32,
    pub world_height: f32,
    pub seed: u64,
    pub initial_planets: usize,
    pub initial_satellites: usize,
    /// Radius a planet starts with before easing takes over.
    pub planet_radius: f32,
    /// Base orbit radius R; each satellite orbits at R times a factor from `orbit_factor`.
    pub base_orbit_radius: f32,
    pub orbit_factor: Span,
    /// Angular speed range, radians per tick.
    pub speed: Span,
    /// Satellite dot radius range.
    pub satellite_size: Span,
    pub easing_rate: f32,
    /// Extra grab distance around a planet for pointer-down hit tests.
    pub hit_margin: f32,
    pub max_circles: usize,
    pub palette: Palette,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            tick_ms: 20.0,
            world_width: 800.0,
            world_height: 600.0,
            seed: 42,
            initial_planets: 3,
            initial_satellites: 10,
            planet_radius: 10.0,
            base_orbit_radius: 70.0,
            orbit_factor: Span::new(0.7, 1.2),
            speed: Span::new(0.01, 0.06),
            satellite_size: Span::new(0.5, 2.5),
            easing_rate: DEFAULT_EASING_RATE,
            hit_margin: 10.0,
            max_circles: 4096,
            palette: Palette::default(),
        }
    }
}

impl UniverseConfig {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tick_ms", self.tick_ms)?;
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("planet_radius", self.planet_radius)?;
        not_negative("base_orbit_radius", self.base_orbit_radius)?;
        not_negative("hit_margin", self.hit_margin)?;
        not_negative("planet_glow_blur", self.palette.planet_glow_blur)?;
        not_negative("satellite_glow_blur", self.palette.satellite_glow_blur)?;

        self.orbit_factor.check("orbit_factor")?;
        self.speed.check("speed")?;
        self.satellite_size.check("satellite_size")?;
        not_negative("speed.min", self.speed.min)?;
        not_negative("satellite_size.min", self.satellite_size.min)?;

        if !(self.easing_rate > 0.0 && self.easing_rate <= 1.0) {
            return Err(ConfigError::EasingRate(self.easing_rate));
        }
        if self.initial_planets == 0 && self.initial_satellites > 0 {
            return Err(ConfigError::OrphanSatellites(self.initial_satellites));
        }
        Ok(())
    }

    /// Range the orbit radius is drawn from.
    pub fn orbit_radius(&self) -> Span {
        Span::new(
            self.base_orbit_radius * self.orbit_factor.min,
            self.base_orbit_radius * self.orbit_factor.max,
        )
    }

    /// Engine settings derived from these.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: self.tick_ms / 1000.0,
            world_width: self.world_width,
            world_height: self.world_height,
            max_circles: self.max_circles,
            clear_color: self.palette.background,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn not_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
