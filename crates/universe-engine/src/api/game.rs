use crate::api::types::GameEvent;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::renderer::circle::CircleBuffer;
use crate::renderer::color::Color;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/50, a 20 ms tick).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of circles handed to the renderer per frame (default: 4096).
    pub max_circles: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Color the host clears the surface with before drawing circles.
    pub clear_color: Color,
    /// Seed for the engine RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 50.0,
            world_width: 800.0,
            world_height: 600.0,
            max_circles: 4096,
            max_events: 32,
            clear_color: Color::BLACK,
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called before init and again after it.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply host-provided settings (JSON). Called before init, if at all.
    fn load_settings(&mut self, _json: &str) {}

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick. Input events queued since the previous frame are visible
    /// to the first step of the frame that drains them; later steps see none.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass: push the circles to draw this frame.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    ticks: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create an EngineContext whose RNG starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            events: Vec::new(),
            ticks: 0,
        }
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Number of fixed ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Called by the runner after each fixed step.
    pub fn advance_tick(&mut self) {
        self.ticks += 1;
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the per-frame circle list.
pub struct RenderContext<'a> {
    pub circles: &'a mut CircleBuffer,
}
