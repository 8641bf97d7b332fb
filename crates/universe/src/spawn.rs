//! Entity creation: the initial seeding and planet-with-satellites spawns.

use glam::Vec2;
use universe_engine::Rng;

use crate::config::UniverseConfig;
use crate::store::{EntityStore, Orbit, PlanetId};

/// Satellites created alongside every spawned planet.
pub const SATELLITES_PER_PLANET: usize = 5;

fn new_orbit(config: &UniverseConfig, rng: &mut Rng) -> Orbit {
    Orbit {
        radius: config.orbit_radius().sample(rng),
        speed: config.speed.sample(rng),
    }
}

/// Create one planet at `pos` and its satellites, all centered on it.
pub fn spawn_planet(
    store: &mut EntityStore,
    pos: Vec2,
    config: &UniverseConfig,
    rng: &mut Rng,
) -> PlanetId {
    let planet = store.add_planet(pos, config.planet_radius);
    for _ in 0..SATELLITES_PER_PLANET {
        let orbit = new_orbit(config, rng);
        let added = store.add_satellite(pos, planet, orbit);
        debug_assert!(added.is_some(), "planet {:?} was just added", planet);
    }
    log::debug!("spawned planet {:?} at ({:.1}, {:.1})", planet, pos.x, pos.y);
    planet
}

/// Initial population: planets at random spots inside `bounds`, satellites at
/// the canvas center bound to random planets.
pub fn seed(store: &mut EntityStore, config: &UniverseConfig, rng: &mut Rng, bounds: Vec2) {
    for _ in 0..config.initial_planets {
        let pos = Vec2::new(rng.next_f32() * bounds.x, rng.next_f32() * bounds.y);
        store.add_planet(pos, config.planet_radius);
    }

    let planet_count = store.planet_count() as u32;
    if planet_count == 0 {
        if config.initial_satellites > 0 {
            log::warn!("no planets to seed {} satellites around", config.initial_satellites);
        }
        return;
    }

    let center = bounds * 0.5;
    for _ in 0..config.initial_satellites {
        let orbit = new_orbit(config, rng);
        let planet = store.planets()[rng.next_int(planet_count) as usize].id();
        store.add_satellite(center, planet, orbit);
    }
}
