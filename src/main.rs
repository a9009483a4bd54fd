//! Neon Runner entry point
//!
//! Wasm builds wire the DOM HUD, keyboard listeners, and the
//! requestAnimationFrame loop to the simulation engine. The scene itself (2D
//! SVG or 3D WebGL) is drawn by external JS renderers fed with JSON snapshots.
//! Native builds run a seeded headless demo session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    use neon_runner::settings::Settings;
    use neon_runner::sim::{GameEngine, GameKey, GameStatus};

    /// Level-up banner display duration (presentation-owned, not sim state)
    const BANNER_MS: i32 = 2500;
    /// Confetti display duration
    const CONFETTI_MS: i32 = 3000;

    // JS hook for the scene renderers: the page installs window.renderFrame
    // (SVG or WebGL implementation) and receives the parsed state snapshot.
    #[wasm_bindgen(inline_js = "
        export function render_frame(json) {
            if (window.renderFrame) {
                window.renderFrame(JSON.parse(json));
            }
        }
    ")]
    extern "C" {
        fn render_frame(json: &str);
    }

    /// Game instance holding engine and presentation bookkeeping
    struct Game {
        engine: GameEngine,
        settings: Settings,
        /// Whether a rAF callback is currently scheduled
        loop_running: bool,
        /// Celebration animations currently on screen (awaiting their ack)
        banner_showing: bool,
        confetti_showing: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                engine: GameEngine::new(seed),
                settings,
                loop_running: false,
                banner_showing: false,
                confetti_showing: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one tick and refresh the FPS window
        fn update(&mut self, time: f64) {
            self.engine.tick();

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self, document: &Document) {
            let state = self.engine.state();
            let config = state.level_config();

            set_text(document, "hud-score", &state.score.to_string());
            set_text(document, "hud-level", config.name);
            set_text(document, "final-score", &state.score.to_string());

            if let Some(el) = document.get_element_by_id("hud-level") {
                let _ = el.set_attribute("style", &format!("color: {}", config.color));
            }
            if let Some(el) = document.get_element_by_id("hud-progress-bar") {
                let width = (state.level_progress * 100.0).round();
                let _ = el.set_attribute("style", &format!("width: {width}%"));
            }

            if self.settings.show_fps {
                set_text(document, "hud-fps", &self.fps.to_string());
            }
            set_hidden(document, "hud-fps", !self.settings.show_fps);

            set_hidden(document, "menu-overlay", state.status != GameStatus::Menu);
            set_hidden(document, "pause-overlay", state.status != GameStatus::Paused);
            set_hidden(document, "game-over-overlay", state.status != GameStatus::GameOver);
            set_hidden(document, "win-overlay", state.status != GameStatus::Won);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(f);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        );
        closure.forget();
    }

    /// Start any newly-raised celebration animations and schedule their acks
    ///
    /// The engine only raises the transient flags; display duration and the
    /// completion callback timing belong to this layer.
    fn service_celebrations(game: &Rc<RefCell<Game>>, document: &Document) {
        let (start_banner, start_confetti, expert, confetti_enabled) = {
            let mut g = game.borrow_mut();
            let state = g.engine.state();
            let start_banner = state.show_level_up && !g.banner_showing;
            let start_confetti = state.show_confetti && !g.confetti_showing;
            let expert = state.is_expert_celebration;
            let confetti_enabled = g.settings.confetti_enabled();
            if start_banner {
                g.banner_showing = true;
            }
            if start_confetti {
                g.confetti_showing = true;
            }
            (start_banner, start_confetti, expert, confetti_enabled)
        };

        if start_banner {
            let config = game.borrow().engine.state().level_config();
            set_text(document, "level-up-name", config.name);
            set_text(document, "level-up-desc", config.description);
            set_hidden(document, "level-up-banner", false);

            let game = game.clone();
            set_timeout(BANNER_MS, move || {
                let mut g = game.borrow_mut();
                g.engine.on_level_up_complete();
                g.banner_showing = false;
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    set_hidden(&document, "level-up-banner", true);
                }
            });
        }

        if start_confetti {
            if confetti_enabled {
                if let Some(el) = document.get_element_by_id("confetti") {
                    let _ = el.set_attribute("class", if expert { "expert" } else { "" });
                }

                let game = game.clone();
                set_timeout(CONFETTI_MS, move || {
                    let mut g = game.borrow_mut();
                    g.engine.on_confetti_complete();
                    g.confetti_showing = false;
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        set_hidden(&document, "confetti", true);
                    }
                });
            } else {
                // Reduced motion: acknowledge immediately, nothing to animate
                let mut g = game.borrow_mut();
                g.engine.on_confetti_complete();
                g.confetti_showing = false;
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let document = web_sys::window().unwrap().document().unwrap();

        let reschedule = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.update_hud(&document);
            render_frame(&g.engine.snapshot_json());
            let reschedule = g.engine.should_reschedule();
            g.loop_running = reschedule;
            reschedule
        };

        service_celebrations(&game, &document);

        // Stopping the reschedule is the only cancellation mechanism; menu,
        // game over, and won stay frozen until an explicit intent restarts it.
        if reschedule {
            request_animation_frame(game);
        }
    }

    /// Kick the loop off if it is not already scheduled
    fn ensure_loop(game: &Rc<RefCell<Game>>) {
        let should_start = {
            let mut g = game.borrow_mut();
            if !g.loop_running && g.engine.should_reschedule() {
                g.loop_running = true;
                true
            } else {
                false
            }
        };
        if should_start {
            request_animation_frame(game.clone());
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = GameKey::from_dom_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().engine.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = GameKey::from_dom_key(&event.key()) {
                    game.borrow_mut().engine.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Start (menu) and restart (game over / won) intents
        for id in ["start-btn", "restart-btn", "play-again-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let restart = id != "start-btn";
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    {
                        let mut g = game.borrow_mut();
                        if restart {
                            g.engine.restart();
                        } else {
                            g.engine.start();
                        }
                    }
                    ensure_loop(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Resume button on the pause overlay
        if let Some(btn) = document.get_element_by_id("resume-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().engine.toggle_pause();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Renderer toggle (2D DOM/SVG vs 3D WebGL front end)
        if let Some(btn) = document.get_element_by_id("renderer-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                use neon_runner::settings::RendererMode;
                g.settings.renderer = match g.settings.renderer {
                    RendererMode::Dom => RendererMode::WebGl,
                    RendererMode::WebGl => RendererMode::Dom,
                };
                g.settings.save();
                apply_renderer_mode(g.settings.renderer);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Expose the renderer choice to the page as a body class
    fn apply_renderer_mode(mode: neon_runner::settings::RendererMode) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.set_attribute("data-renderer", mode.as_str());
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.engine.state().status == GameStatus::Playing {
                        g.engine.toggle_pause();
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.engine.state().status == GameStatus::Playing {
                    g.engine.toggle_pause();
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::load();
        apply_renderer_mode(settings.renderer);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        // Show the menu; the tick loop starts on the start intent
        game.borrow().update_hud(&document);
        render_frame(&game.borrow().engine.snapshot_json());

        log::info!("Neon Runner ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_runner::consts::*;
    use neon_runner::sim::{GameEngine, GameStatus};

    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    log::info!("Neon Runner (native) headless demo, seed {seed}");

    let mut engine = GameEngine::new(seed);
    engine.start();

    let mut ticks: u64 = 0;
    while engine.should_reschedule() && ticks < 100_000 {
        autopilot(&mut engine);
        engine.tick();
        ticks += 1;
    }

    let state = engine.state();
    println!(
        "demo finished after {} ticks: status={} score={} level={}",
        ticks,
        state.status.as_str(),
        state.score,
        state.current_level.as_str()
    );
    if state.status == GameStatus::Won {
        println!("reached the win threshold of {WIN_THRESHOLD}");
    }
}

/// Tiny demo pilot: steer toward coins, away from imminent obstacles
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(engine: &mut neon_runner::sim::GameEngine) {
    use neon_runner::consts::*;

    let state = engine.state();
    let player_lane = state.player.lane;

    // Danger per lane: obstacles approaching the player row
    let mut danger = [false; LANE_COUNT as usize];
    for obstacle in &state.obstacles {
        if obstacle.pos.y > PLAYER_Y - 160.0 && obstacle.pos.y < PLAYER_Y + 40.0 {
            danger[obstacle.lane as usize] = true;
        }
    }

    if danger[player_lane as usize] {
        // Step to the nearest safe lane
        for delta in [-1, 1, -2, 2] {
            let lane = player_lane + delta;
            if (0..LANE_COUNT).contains(&lane) && !danger[lane as usize] {
                engine.move_lane(delta.signum());
                return;
            }
        }
    } else if let Some(coin) = state
        .coins
        .iter()
        .filter(|c| c.pos.y > PLAYER_Y - 250.0 && c.pos.y < PLAYER_Y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        let toward = (coin.lane - player_lane).signum();
        let next = player_lane + toward;
        if toward != 0 && !danger[next as usize] {
            engine.move_lane(toward);
        }
    }
}
