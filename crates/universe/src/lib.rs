use wasm_bindgen::prelude::*;
use universe_engine::InputEvent;

pub mod attraction;
pub mod config;
pub mod error;
pub mod game;
pub mod interaction;
pub mod orbit;
pub mod render;
pub mod sim;
pub mod sizing;
pub mod spawn;
pub mod store;
pub mod style;

pub use config::{Palette, Span, UniverseConfig};
pub use error::ConfigError;
pub use game::Universe;
pub use interaction::{InteractionController, Selection};
pub use sim::{Simulation, TickReport};
pub use store::{EntityStore, Planet, PlanetId, Satellite, SatelliteId};
pub use style::{SatelliteKind, SatelliteLook, StyleBook};

universe_web::export_game!(Universe, "universe");
