//! Entity store: planets, satellites and their identities.
//!
//! Ids are allocated sequentially and never reused; nothing is ever removed,
//! so an id is also the entity's index in its collection.

use glam::Vec2;

/// Smallest radius a planet may have.
pub const MIN_PLANET_RADIUS: f32 = 2.0;

/// Identifier of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanetId(pub u32);

/// Identifier of a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SatelliteId(pub u32);

impl PlanetId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl SatelliteId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// An attractor.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    id: PlanetId,
    /// Position in world space. Moved by dragging.
    pub pos: Vec2,
    radius: f32,
}

impl Planet {
    pub fn id(&self) -> PlanetId {
        self.id
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the radius, clamped to `MIN_PLANET_RADIUS`. NaN clamps too.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(MIN_PLANET_RADIUS);
    }
}

/// Per-satellite constants fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Distance of the drawn position from the smoothed center.
    pub radius: f32,
    /// Phase advance per tick; also the center smoothing coefficient.
    pub speed: f32,
}

/// A body orbiting exactly one planet at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    id: SatelliteId,
    pos: Vec2,
    /// Exponentially smoothed orbital origin.
    pub center: Vec2,
    /// Accumulated phase, x and y advanced together.
    pub phase: Vec2,
    phase_seed: f32,
    orbit: Orbit,
    planet: PlanetId,
}

impl Satellite {
    pub fn id(&self) -> SatelliteId {
        self.id
    }

    /// Derived drawn position, as of the last orbit step.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn orbit(&self) -> Orbit {
        self.orbit
    }

    /// Constant angular offset, bound to the id.
    pub fn phase_seed(&self) -> f32 {
        self.phase_seed
    }

    pub fn planet(&self) -> PlanetId {
        self.planet
    }

    /// Only the attraction solver re-points satellites, and only at planets
    /// it read from the same store.
    pub(crate) fn set_planet(&mut self, planet: PlanetId) {
        self.planet = planet;
    }
}

/// Owns every planet and satellite. No removal operation exists.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    planets: Vec<Planet>,
    satellites: Vec<Satellite>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a planet at `pos` with the given starting radius (clamped).
    pub fn add_planet(&mut self, pos: Vec2, radius: f32) -> PlanetId {
        let id = PlanetId(self.planets.len() as u32);
        self.planets.push(Planet {
            id,
            pos,
            radius: radius.max(MIN_PLANET_RADIUS),
        });
        id
    }

    /// Add a satellite whose position and smoothed center start at `pos`.
    /// Returns None, adding nothing, if `planet` does not exist.
    pub fn add_satellite(
        &mut self,
        pos: Vec2,
        planet: PlanetId,
        orbit: Orbit,
    ) -> Option<SatelliteId> {
        if self.planet(planet).is_none() {
            log::warn!("refusing satellite for unknown planet {:?}", planet);
            return None;
        }
        let id = SatelliteId(self.satellites.len() as u32);
        self.satellites.push(Satellite {
            id,
            pos,
            center: pos,
            phase: Vec2::ZERO,
            phase_seed: id.0 as f32,
            orbit,
            planet,
        });
        Some(id)
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(id.index())
    }

    pub fn planet_mut(&mut self, id: PlanetId) -> Option<&mut Planet> {
        self.planets.get_mut(id.index())
    }

    pub fn satellite(&self, id: SatelliteId) -> Option<&Satellite> {
        self.satellites.get(id.index())
    }

    pub fn planets_mut(&mut self) -> &mut [Planet] {
        &mut self.planets
    }

    /// Planets read-only and satellites mutable at the same time.
    pub fn split_mut(&mut self) -> (&[Planet], &mut [Satellite]) {
        (&self.planets, &mut self.satellites)
    }

    /// Satellites currently referencing `planet`.
    pub fn satellites_of(&self, planet: PlanetId) -> impl Iterator<Item = &Satellite> {
        self.satellites.iter().filter(move |s| s.planet == planet)
    }

    /// Satellite count per planet, indexed like `planets()`.
    pub fn neighbor_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.planets.len()];
        for s in &self.satellites {
            if let Some(c) = counts.get_mut(s.planet.index()) {
                *c += 1;
            }
        }
        counts
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn satellite_count(&self) -> usize {
        self.satellites.len()
    }

    /// Whether every satellite references an existing planet.
    pub fn is_linked(&self) -> bool {
        self.satellites.iter().all(|s| self.planet(s.planet).is_some())
    }
}
