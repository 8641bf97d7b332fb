//! Universe: planets pull the nearest satellites into orbit.
//!
//! Click empty space to spawn a planet with five satellites (hold to keep
//! spawning), press on a planet to drag it.

use universe_engine::{EngineContext, Game, GameConfig, GameEvent, InputQueue, RenderContext};

use crate::config::UniverseConfig;
use crate::render::build_circles;
use crate::sim::Simulation;
use crate::style::{SatelliteKind, StyleBook};

// ── Game event kinds to the host ─────────────────────────────────────

/// a = planet count, b = satellite count, c = selection code.
pub const EVENT_POPULATION: f32 = 1.0;

// ── Game struct ──────────────────────────────────────────────────────

pub struct Universe {
    sim: Simulation,
    styles: StyleBook,
}

impl Universe {
    pub fn new() -> Self {
        Self::with_config(UniverseConfig::default())
    }

    pub fn with_config(config: UniverseConfig) -> Self {
        Self {
            styles: StyleBook::new(config.satellite_size, config.seed),
            sim: Simulation::new(config),
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    fn population_event(&self) -> GameEvent {
        let store = self.sim.store();
        GameEvent::new(
            EVENT_POPULATION,
            store.planet_count() as f32,
            store.satellite_count() as f32,
            self.sim.selection().code(),
        )
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Universe {
    fn config(&self) -> GameConfig {
        let bounds = self.sim.bounds();
        GameConfig {
            world_width: bounds.x,
            world_height: bounds.y,
            ..self.sim.config().game_config()
        }
    }

    fn load_settings(&mut self, json: &str) {
        match UniverseConfig::from_json(json) {
            Ok(config) => {
                log::info!(
                    "settings loaded: {} planets, {} satellites, seed {}",
                    config.initial_planets,
                    config.initial_satellites,
                    config.seed
                );
                *self = Self::with_config(config);
            }
            Err(e) => log::error!("invalid settings, keeping defaults: {}", e),
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let config = self.sim.config().clone();
        self.styles = StyleBook::new(config.satellite_size, config.seed);
        self.sim = Simulation::seeded(config, ctx.rng.clone());
        self.styles.sync(self.sim.store(), SatelliteKind::Seeded);
        log::info!(
            "universe ready: {} planets, {} satellites",
            self.sim.store().planet_count(),
            self.sim.store().satellite_count()
        );
        ctx.emit_event(self.population_event());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let report = self.sim.advance(input.iter());
        self.styles.sync(self.sim.store(), SatelliteKind::Spawned);
        if let Some(planet) = report.spawned {
            log::debug!("tick {}: spawned {:?}", self.sim.ticks(), planet);
        }
        if report.reassigned > 0 {
            log::trace!("tick {}: {} satellites changed planet", self.sim.ticks(), report.reassigned);
        }
        ctx.emit_event(self.population_event());
    }

    fn render(&self, ctx: &mut RenderContext) {
        build_circles(
            self.sim.store(),
            &self.styles,
            &self.sim.config().palette,
            ctx.circles,
        );
    }
}
