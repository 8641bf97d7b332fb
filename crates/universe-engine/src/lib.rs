pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::GameEvent;
pub use crate::core::time::FixedTimestep;
pub use crate::core::rng::Rng;
pub use crate::core::easing::{lerp, lerp_vec2};
pub use input::queue::{InputEvent, InputQueue};
pub use input::pointer::PointerState;
pub use renderer::color::Color;
pub use renderer::circle::{CircleInstance, CircleBuffer, Glow};
pub use bridge::protocol::{ProtocolLayout, FrameStats};
