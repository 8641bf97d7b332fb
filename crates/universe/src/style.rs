//! Satellite drawing attributes, kept beside the entity store rather than in it.
//!
//! The simulation never reads a look. Looks are handed out after the fact to
//! whatever satellites the store gained since the last `sync`.

use universe_engine::Rng;

use crate::config::Span;
use crate::store::{EntityStore, SatelliteId};

/// Offsets the settings seed for the style stream.
const STYLE_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Which palette entry a satellite is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatelliteKind {
    /// Created by the initial seeding.
    Seeded,
    /// Created together with a spawned planet.
    Spawned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteLook {
    /// Dot radius.
    pub size: f32,
    pub kind: SatelliteKind,
}

impl Default for SatelliteLook {
    fn default() -> Self {
        Self { size: 1.0, kind: SatelliteKind::Spawned }
    }
}

/// One look per satellite, indexed like `EntityStore::satellites()`.
#[derive(Debug, Clone)]
pub struct StyleBook {
    looks: Vec<SatelliteLook>,
    size: Span,
    rng: Rng,
}

impl StyleBook {
    pub fn new(size: Span, seed: u64) -> Self {
        Self {
            looks: Vec::new(),
            size,
            rng: Rng::new(seed ^ STYLE_SEED_SALT),
        }
    }

    /// Give a look of `kind` to every satellite added since the last call.
    /// Returns how many were styled.
    pub fn sync(&mut self, store: &EntityStore, kind: SatelliteKind) -> usize {
        let fresh = store.satellite_count().saturating_sub(self.looks.len());
        for _ in 0..fresh {
            let size = self.size.sample(&mut self.rng);
            self.looks.push(SatelliteLook { size, kind });
        }
        fresh
    }

    /// Look of `id`. Satellites not synced yet get the default look.
    pub fn look(&self, id: SatelliteId) -> SatelliteLook {
        self.looks.get(id.index()).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Orbit;
    use glam::Vec2;

    fn store_with(satellites: usize) -> EntityStore {
        let mut store = EntityStore::new();
        let p = store.add_planet(Vec2::ZERO, 10.0);
        for _ in 0..satellites {
            store.add_satellite(Vec2::ZERO, p, Orbit { radius: 50.0, speed: 0.02 });
        }
        store
    }

    #[test]
    fn sync_styles_only_new_satellites() {
        let size = Span::new(0.5, 2.5);
        let mut store = store_with(3);
        let mut book = StyleBook::new(size, 42);

        assert_eq!(book.sync(&store, SatelliteKind::Seeded), 3);
        assert_eq!(book.sync(&store, SatelliteKind::Spawned), 0);

        let p = store.planets()[0].id();
        store.add_satellite(Vec2::ONE, p, Orbit { radius: 60.0, speed: 0.03 });
        assert_eq!(book.sync(&store, SatelliteKind::Spawned), 1);

        assert_eq!(book.look(SatelliteId(0)).kind, SatelliteKind::Seeded);
        assert_eq!(book.look(SatelliteId(3)).kind, SatelliteKind::Spawned);
        for s in store.satellites() {
            assert!(size.contains(book.look(s.id()).size));
        }
    }

    #[test]
    fn unsynced_satellite_gets_default_look() {
        let book = StyleBook::new(Span::new(0.5, 2.5), 1);
        assert_eq!(book.look(SatelliteId(7)), SatelliteLook::default());
    }

    #[test]
    fn same_seed_same_sizes() {
        let store = store_with(5);
        let mut a = StyleBook::new(Span::new(0.5, 2.5), 9);
        let mut b = StyleBook::new(Span::new(0.5, 2.5), 9);
        a.sync(&store, SatelliteKind::Seeded);
        b.sync(&store, SatelliteKind::Seeded);
        for s in store.satellites() {
            assert_eq!(a.look(s.id()), b.look(s.id()));
        }
    }
}
