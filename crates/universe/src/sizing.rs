//! Size regulator: planet radius eases toward its live satellite count.

use universe_engine::lerp;

use crate::store::EntityStore;

/// Default fraction of the gap closed per tick.
pub const DEFAULT_EASING_RATE: f32 = 0.025;

/// Ease every planet's radius toward the number of satellites it holds,
/// clamped to the minimum radius.
pub fn ease_radii(store: &mut EntityStore, rate: f32) {
    if store.planet_count() == 0 {
        log::trace!("sizing skipped: no planets");
        return;
    }
    let counts = store.neighbor_counts();
    for (planet, count) in store.planets_mut().iter_mut().zip(counts) {
        let eased = lerp(planet.radius(), count as f32, rate);
        planet.set_radius(eased);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Orbit, PlanetId, MIN_PLANET_RADIUS};
    use glam::Vec2;

    fn planet_with(satellites: usize, radius: f32) -> EntityStore {
        let mut store = EntityStore::new();
        let p = store.add_planet(Vec2::ZERO, radius);
        for _ in 0..satellites {
            store
                .add_satellite(Vec2::ZERO, p, Orbit { radius: 50.0, speed: 0.02 })
                .unwrap();
        }
        store
    }

    #[test]
    fn single_step() {
        let mut store = planet_with(5, 10.0);
        ease_radii(&mut store, DEFAULT_EASING_RATE);
        let r = store.planet(PlanetId(0)).unwrap().radius();
        assert!((r - (10.0 + (5.0 - 10.0) * 0.025)).abs() < 1e-6);
    }

    #[test]
    fn converges_geometrically_toward_count() {
        let k = 5.0;
        let r0 = 30.0f32;
        let mut store = planet_with(5, r0);
        for t in 1..=200 {
            ease_radii(&mut store, DEFAULT_EASING_RATE);
            let r = store.planet(PlanetId(0)).unwrap().radius();
            let bound = (r0 - k).abs() * (1.0 - DEFAULT_EASING_RATE).powi(t);
            assert!((r - k).abs() <= bound + 1e-4, "tick {}: |{} - {}| > {}", t, r, k, bound);
        }
    }

    #[test]
    fn never_drops_below_minimum() {
        let mut store = planet_with(0, 10.0);
        for _ in 0..1000 {
            ease_radii(&mut store, DEFAULT_EASING_RATE);
            assert!(store.planet(PlanetId(0)).unwrap().radius() >= MIN_PLANET_RADIUS);
        }
        assert_eq!(store.planet(PlanetId(0)).unwrap().radius(), MIN_PLANET_RADIUS);
    }

    #[test]
    fn empty_store_is_a_no_op() {
        let mut store = EntityStore::new();
        ease_radii(&mut store, DEFAULT_EASING_RATE);
        assert_eq!(store.planet_count(), 0);
    }
}
