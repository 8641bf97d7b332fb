use universe_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, CircleBuffer,
    FixedTimestep, ProtocolLayout, FrameStats,
};
use universe_engine::bridge::protocol::HEADER_FLOATS;

/// Generic game runner that wires up the tick loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to every fixed step after the first one in a frame.
    no_input: InputQueue,
    circles: CircleBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u64,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let circles = CircleBuffer::with_capacity(config.max_circles);

        Self {
            game,
            ctx: EngineContext::with_seed(config.seed),
            input: InputQueue::new(),
            no_input: InputQueue::new(),
            circles,
            timestep,
            layout,
            config,
            initialized: false,
            frame: 0,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Forward host settings to the game. Only honored before `init`.
    pub fn load_settings(&mut self, json: &str) {
        if self.initialized {
            log::warn!("settings ignored: game already initialized");
            return;
        }
        self.game.load_settings(json);
    }

    /// Initialize the game. Call once after construction (and settings).
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.circles = CircleBuffer::with_capacity(self.config.max_circles);
        self.ctx = EngineContext::with_seed(self.config.seed);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.render();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: zero or more fixed ticks, then rebuild the circle list.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            // Events are consumed exactly once, by the first step of the frame.
            let input = if step == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
            self.ctx.advance_tick();
        }

        // A frame with no step keeps its input for the next one.
        if steps > 0 {
            self.input.drain();
            let fresh = self.game.config();
            self.config.world_width = fresh.world_width;
            self.config.world_height = fresh.world_height;
        }

        self.render();
        self.frame += 1;
    }

    fn render(&mut self) {
        self.circles.clear();
        {
            let mut render_ctx = RenderContext {
                circles: &mut self.circles,
            };
            self.game.render(&mut render_ctx);
        }
        if self.circles.dropped() > 0 {
            log::debug!(
                "circle buffer full: {} circles not drawn",
                self.circles.dropped()
            );
        }

        self.header = self.layout.header(&FrameStats {
            frame: self.frame,
            circle_count: self.circles.instances().len(),
            event_count: self.ctx.events.len(),
            world_width: self.config.world_width,
            world_height: self.config.world_height,
        });
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn ticks(&self) -> u64 {
        self.ctx.ticks()
    }

    // ---- Pointer accessors for host reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn circles(&self) -> &CircleBuffer {
        &self.circles
    }

    pub fn circles_ptr(&self) -> *const f32 {
        self.circles.instances_ptr()
    }

    pub fn circle_count(&self) -> u32 {
        self.circles.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn clear_r(&self) -> f32 {
        self.config.clear_color.r
    }

    pub fn clear_g(&self) -> f32 {
        self.config.clear_color.g
    }

    pub fn clear_b(&self) -> f32 {
        self.config.clear_color.b
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_circles(&self) -> u32 {
        self.layout.max_circles as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use universe_engine::{CircleInstance, Color, GameEvent, Glow};

    /// Counts pointer-downs and updates; draws one circle per pointer-down.
    #[derive(Default)]
    struct Probe {
        downs: usize,
        updates: usize,
    }

    impl Game for Probe {
        fn config(&self) -> GameConfig {
            GameConfig {
                fixed_dt: 0.02,
                max_circles: 2,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            self.downs += input
                .iter()
                .filter(|e| matches!(e, InputEvent::PointerDown { .. }))
                .count();
            ctx.emit_event(GameEvent::new(1.0, self.downs as f32, 0.0, 0.0));
        }

        fn render(&self, ctx: &mut RenderContext) {
            for _ in 0..self.downs {
                ctx.circles.push(CircleInstance::new(Vec2::ZERO, 1.0, Color::WHITE, Glow::NONE));
            }
        }
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Probe::default());
        runner.tick(1.0);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn events_reach_only_the_first_step() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        runner.tick(0.061);
        assert_eq!(runner.game().updates, 3);
        assert_eq!(runner.game().downs, 1);
        assert_eq!(runner.ticks(), 3);
    }

    #[test]
    fn events_wait_for_a_frame_that_ticks() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        runner.tick(0.005);
        assert_eq!(runner.game().downs, 0);
        runner.tick(0.016);
        assert_eq!(runner.game().downs, 1);
    }

    #[test]
    fn circle_list_is_capped_by_config() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        for _ in 0..3 {
            runner.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        }
        runner.tick(0.02);
        assert_eq!(runner.circle_count(), 2);
        assert_eq!(runner.max_circles(), 2);
        assert_eq!(runner.game_events_len(), 1);
    }
}
