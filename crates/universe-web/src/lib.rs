pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use universe_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// universe_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must provide `fn new() -> Self` and implement `universe_engine::Game`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        fn install_runner(settings: Option<&str>) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            if let Some(json) = settings {
                runner.load_settings(json);
            }
            runner.init();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
        }

        /// Start with the game's default settings. The initial world size is
        /// the configured one; a later `game_resize` moves the bounds but never
        /// re-seeds.
        #[wasm_bindgen]
        pub fn game_init() {
            install_runner(None);
        }

        /// Start with settings JSON applied first. Pass the viewport size as
        /// `world_width` / `world_height` to seed over the real canvas.
        #[wasm_bindgen]
        pub fn game_init_with_settings(json: &str) {
            install_runner(Some(json));
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_circles_ptr() -> *const f32 {
            with_runner(|r| r.circles_ptr())
        }

        #[wasm_bindgen]
        pub fn get_circle_count() -> u32 {
            with_runner(|r| r.circle_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_clear_r() -> f32 {
            with_runner(|r| r.clear_r())
        }

        #[wasm_bindgen]
        pub fn get_clear_g() -> f32 {
            with_runner(|r| r.clear_g())
        }

        #[wasm_bindgen]
        pub fn get_clear_b() -> f32 {
            with_runner(|r| r.clear_b())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_circles() -> u32 {
            with_runner(|r| r.max_circles())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
