use universe_engine::{CircleBuffer, CircleInstance, Glow};

use crate::config::Palette;
use crate::store::EntityStore;
use crate::style::{SatelliteKind, StyleBook};

/// Push every planet, then every satellite, as a styled circle.
pub fn build_circles(
    store: &EntityStore,
    styles: &StyleBook,
    palette: &Palette,
    circles: &mut CircleBuffer,
) {
    let planet_glow = Glow::new(palette.planet_glow, palette.planet_glow_blur);
    for planet in store.planets() {
        circles.push(CircleInstance::new(
            planet.pos,
            planet.radius(),
            palette.planet_fill,
            planet_glow,
        ));
    }

    let satellite_glow = Glow::new(palette.satellite_glow, palette.satellite_glow_blur);
    for satellite in store.satellites() {
        let look = styles.look(satellite.id());
        let fill = match look.kind {
            SatelliteKind::Seeded => palette.satellite_fill,
            SatelliteKind::Spawned => palette.spawned_satellite_fill,
        };
        circles.push(CircleInstance::new(satellite.pos(), look.size, fill, satellite_glow));
    }
}
