//! The simulation state object and its tick.
//!
//! Tick order: input effects (drag / spawn) → attraction → orbit motion →
//! radius easing. Rendering reads the store afterwards.

use glam::Vec2;
use universe_engine::{InputEvent, Rng};

use crate::attraction;
use crate::config::UniverseConfig;
use crate::interaction::{InteractionController, Selection};
use crate::orbit;
use crate::sizing;
use crate::spawn;
use crate::store::{EntityStore, PlanetId};

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub spawned: Option<PlanetId>,
    pub reassigned: usize,
}

pub struct Simulation {
    store: EntityStore,
    interaction: InteractionController,
    config: UniverseConfig,
    rng: Rng,
    ticks: u64,
}

impl Simulation {
    /// An empty universe whose RNG starts from `config.seed`.
    pub fn new(config: UniverseConfig) -> Self {
        let rng = Rng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// An empty universe drawing from `rng`.
    pub fn with_rng(config: UniverseConfig, rng: Rng) -> Self {
        let bounds = Vec2::new(config.world_width, config.world_height);
        Self {
            store: EntityStore::new(),
            interaction: InteractionController::new(bounds, config.hit_margin),
            config,
            rng,
            ticks: 0,
        }
    }

    /// A universe with the configured initial planets and satellites.
    pub fn seeded(config: UniverseConfig, rng: Rng) -> Self {
        let mut sim = Self::with_rng(config, rng);
        let bounds = sim.interaction.bounds();
        spawn::seed(&mut sim.store, &sim.config, &mut sim.rng, bounds);
        sim
    }

    /// Run one tick with the input events received since the previous one.
    pub fn advance<'a, I>(&mut self, events: I) -> TickReport
    where
        I: IntoIterator<Item = &'a InputEvent>,
    {
        for event in events {
            self.interaction.handle(event, &self.store);
        }
        let spawned = self
            .interaction
            .apply(&mut self.store, &self.config, &mut self.rng);

        let reassigned = attraction::reassign(&mut self.store);
        orbit::advance(&mut self.store);
        sizing::ease_radii(&mut self.store, self.config.easing_rate);

        self.ticks += 1;
        TickReport { spawned, reassigned }
    }

    /// Create a planet with its satellites at `pos`, outside of any tick.
    pub fn spawn_planet(&mut self, pos: Vec2) -> PlanetId {
        spawn::spawn_planet(&mut self.store, pos, &self.config, &mut self.rng)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    pub fn selection(&self) -> Selection {
        self.interaction.selection()
    }

    /// Logical canvas size, as of the latest resize.
    pub fn bounds(&self) -> Vec2 {
        self.interaction.bounds()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
