//! Attraction solver: which planet each satellite orbits.
//!
//! Each satellite scans the planets in order and moves to any planet strictly
//! closer than its running best. The outcome is the nearest planet; a tie
//! never moves a satellite off its current planet, and among tied challengers
//! the earliest wins.

use glam::Vec2;

use crate::store::{EntityStore, Planet, PlanetId};

/// The planet a satellite at `pos`, currently bound to `current`, should orbit.
pub fn resolve(planets: &[Planet], pos: Vec2, current: PlanetId) -> PlanetId {
    let mut best = current;
    let mut best_dist = planets
        .get(current.index())
        .map_or(f32::INFINITY, |p| p.pos.distance(pos));

    for planet in planets {
        if planet.id() == best {
            continue;
        }
        let dist = planet.pos.distance(pos);
        if dist < best_dist {
            best = planet.id();
            best_dist = dist;
        }
    }
    best
}

/// Re-point every satellite at its attracting planet, using the positions
/// derived on the previous tick. Returns how many satellites changed planet.
pub fn reassign(store: &mut EntityStore) -> usize {
    let (planets, satellites) = store.split_mut();
    if planets.is_empty() {
        log::trace!("attraction skipped: no planets");
        return 0;
    }

    let mut moved = 0;
    for satellite in satellites.iter_mut() {
        let target = resolve(planets, satellite.pos(), satellite.planet());
        if target != satellite.planet() {
            satellite.set_planet(target);
            moved += 1;
        }
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Orbit;

    fn store_with(planets: &[Vec2]) -> EntityStore {
        let mut store = EntityStore::new();
        for &p in planets {
            store.add_planet(p, 10.0);
        }
        store
    }

    fn add_sat(store: &mut EntityStore, pos: Vec2, planet: PlanetId) {
        store
            .add_satellite(pos, planet, Orbit { radius: 50.0, speed: 0.03 })
            .unwrap();
    }

    #[test]
    fn moves_to_strictly_closer_planet() {
        let mut store = store_with(&[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]);
        add_sat(&mut store, Vec2::new(90.0, 0.0), PlanetId(0));

        assert_eq!(reassign(&mut store), 1);
        assert_eq!(store.satellites()[0].planet(), PlanetId(1));
        // Stable once settled
        assert_eq!(reassign(&mut store), 0);
    }

    #[test]
    fn ties_keep_current_planet() {
        let mut store = store_with(&[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]);
        add_sat(&mut store, Vec2::new(50.0, 0.0), PlanetId(1));

        assert_eq!(reassign(&mut store), 0);
        assert_eq!(store.satellites()[0].planet(), PlanetId(1));
    }

    #[test]
    fn picks_nearest_of_several_closer_planets() {
        // Current planet far away; two challengers closer, the later one nearest.
        let planets = [
            Vec2::new(1000.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(10.0, 0.0),
        ];
        let mut store = store_with(&planets);
        add_sat(&mut store, Vec2::ZERO, PlanetId(0));
        reassign(&mut store);
        assert_eq!(store.satellites()[0].planet(), PlanetId(2));

        // Same challengers in the other order: the nearest still wins.
        let mut store = store_with(&[planets[0], planets[2], planets[1]]);
        add_sat(&mut store, Vec2::ZERO, PlanetId(0));
        reassign(&mut store);
        assert_eq!(store.satellites()[0].planet(), PlanetId(1));
    }

    #[test]
    fn equidistant_challengers_resolve_to_earliest() {
        let mut store = store_with(&[
            Vec2::new(500.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(0.0, -10.0),
        ]);
        add_sat(&mut store, Vec2::ZERO, PlanetId(0));
        reassign(&mut store);
        assert_eq!(store.satellites()[0].planet(), PlanetId(1));
    }

    #[test]
    fn empty_planet_set_is_a_no_op() {
        let mut store = EntityStore::new();
        assert_eq!(reassign(&mut store), 0);
    }

    #[test]
    fn closer_planet_wins_within_one_tick() {
        // Static positions: condition holds before the first solve.
        let mut store = store_with(&[Vec2::new(0.0, 0.0), Vec2::new(200.0, 200.0)]);
        add_sat(&mut store, Vec2::new(190.0, 190.0), PlanetId(0));
        add_sat(&mut store, Vec2::new(5.0, 5.0), PlanetId(1));

        reassign(&mut store);
        assert_eq!(store.satellites()[0].planet(), PlanetId(1));
        assert_eq!(store.satellites()[1].planet(), PlanetId(0));
        assert!(store.is_linked());
    }
}
