//! Orbit motion: smoothed center tracking plus a circular phase offset.

use glam::Vec2;
use universe_engine::lerp_vec2;

use crate::store::{EntityStore, Satellite};

/// Drawn position for a satellite's current center and phase.
pub fn derived_position(satellite: &Satellite) -> Vec2 {
    let angle = satellite.phase + Vec2::splat(satellite.phase_seed());
    satellite.center + satellite.orbit().radius * Vec2::new(angle.x.cos(), angle.y.sin())
}

/// Advance every satellite by one tick.
///
/// Phase advances by the satellite's speed, the center eases toward the
/// currently assigned planet with the same speed as coefficient, and the
/// drawn position is re-derived from both.
pub fn advance(store: &mut EntityStore) {
    let (planets, satellites) = store.split_mut();
    for satellite in satellites.iter_mut() {
        let speed = satellite.orbit().speed;
        satellite.phase += Vec2::splat(speed);

        if let Some(planet) = planets.get(satellite.planet().index()) {
            satellite.center = lerp_vec2(satellite.center, planet.pos, speed);
        }

        let pos = derived_position(satellite);
        satellite.set_pos(pos);
    }
}
