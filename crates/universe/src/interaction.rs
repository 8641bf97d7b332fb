//! Interaction controller: pointer state in, drag and spawn effects out.
//!
//! Events only update the selection and tracked pointer; the store is touched
//! exclusively from `apply`, once per tick.

use glam::Vec2;
use universe_engine::{InputEvent, PointerState, Rng};

use crate::config::UniverseConfig;
use crate::spawn::spawn_planet;
use crate::store::{EntityStore, PlanetId};

/// What a held pointer is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Button released.
    #[default]
    None,
    /// Pressed over empty space: spawn a planet at the pointer every tick.
    SpawnPending,
    /// Pressed on a planet: it follows the pointer.
    Dragging(PlanetId),
}

impl Selection {
    /// Numeric code reported to the host.
    pub fn code(self) -> f32 {
        match self {
            Selection::None => 0.0,
            Selection::SpawnPending => 1.0,
            Selection::Dragging(_) => 2.0,
        }
    }
}

/// First planet (in planet order) whose grab box contains `pos`.
/// The box extends `radius + margin` from the center along each axis.
pub fn hit_test(store: &EntityStore, pos: Vec2, margin: f32) -> Option<PlanetId> {
    store
        .planets()
        .iter()
        .find(|p| {
            let reach = p.radius() + margin;
            let d = (pos - p.pos).abs();
            d.x <= reach && d.y <= reach
        })
        .map(|p| p.id())
}

pub struct InteractionController {
    selection: Selection,
    pointer: PointerState,
    bounds: Vec2,
    hit_margin: f32,
}

impl InteractionController {
    /// Pointer starts released at the center of `bounds`.
    pub fn new(bounds: Vec2, hit_margin: f32) -> Self {
        Self {
            selection: Selection::None,
            pointer: PointerState::at(bounds * 0.5),
            bounds,
            hit_margin,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Logical canvas size.
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Route one input event.
    pub fn handle(&mut self, event: &InputEvent, store: &EntityStore) {
        match *event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(Vec2::new(x, y), store),
            InputEvent::PointerUp { .. } => {
                self.pointer.apply(event);
                self.on_pointer_up();
            }
            InputEvent::PointerMove { x, y } => self.on_pointer_move(Vec2::new(x, y)),
            InputEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }

    pub fn on_pointer_down(&mut self, pos: Vec2, store: &EntityStore) {
        self.pointer.apply(&InputEvent::PointerDown { x: pos.x, y: pos.y });
        self.selection = match hit_test(store, pos, self.hit_margin) {
            Some(planet) => {
                log::debug!("dragging planet {:?}", planet);
                Selection::Dragging(planet)
            }
            None => Selection::SpawnPending,
        };
    }

    pub fn on_pointer_up(&mut self) {
        self.selection = Selection::None;
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        self.pointer.apply(&InputEvent::PointerMove { x: pos.x, y: pos.y });
    }

    /// Only the logical bounds change; entities stay where they are.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.bounds = Vec2::new(width, height);
        } else {
            log::warn!("ignoring resize to {}x{}", width, height);
        }
    }

    /// Per-tick effect of the current selection. Returns the planet spawned this tick, if any.
    pub fn apply(
        &mut self,
        store: &mut EntityStore,
        config: &UniverseConfig,
        rng: &mut Rng,
    ) -> Option<PlanetId> {
        match self.selection {
            Selection::None => None,
            Selection::Dragging(id) => {
                match store.planet_mut(id) {
                    Some(planet) => planet.pos = self.pointer.pos,
                    None => {
                        log::warn!("drag target {:?} missing, releasing", id);
                        self.selection = Selection::None;
                    }
                }
                None
            }
            Selection::SpawnPending => Some(spawn_planet(store, self.pointer.pos, config, rng)),
        }
    }
}
