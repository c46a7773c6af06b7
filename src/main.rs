//! Gap Glider entry point
//!
//! Handles platform-specific initialization and drives the simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use gap_glider::input::{is_game_key, key_trigger, pointer_trigger};
    use gap_glider::renderer::{RenderState, scene};
    use gap_glider::sim::{GameEvent, GameState, InputOutcome, Trigger, advance_frame, handle_input};
    use gap_glider::{HudView, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                render_state: None,
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Log what happened since the last frame
        fn drain_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::Crashed { score, best_score, .. } if score == best_score && score > 0 => {
                        log::info!("New best score: {}", best_score);
                    }
                    GameEvent::Scored { score } => log::debug!("Score: {}", score),
                    _ => {}
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let view = HudView::from_state(&self.state);

            set_hidden(&document, "start-screen", !view.start_prompt);

            if let Some(el) = document.get_element_by_id("hud-score") {
                match view.score {
                    Some(score) => {
                        el.set_text_content(Some(&score.to_string()));
                        let _ = el.class_list().remove_1("hidden");
                    }
                    None => {
                        let _ = el.class_list().add_1("hidden");
                    }
                }
            }

            match view.game_over {
                Some(summary) => {
                    if let Some(el) = document.get_element_by_id("score-display") {
                        el.set_text_content(Some(&summary.score_line()));
                    }
                    if let Some(el) = document.get_element_by_id("medal-display") {
                        el.set_text_content(Some(&summary.medal_line()));
                    }
                    set_hidden(&document, "game-over", false);
                }
                None => set_hidden(&document, "game-over", true),
            }
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&format!("{}: {}", context, e))
    }

    /// Preset from `?variant=`, overridden by a `data-tuning` JSON attribute
    fn load_tuning(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> Tuning {
        let query = window.location().search().unwrap_or_default();
        let mut tuning = Tuning::from_query(&query).unwrap_or_else(|e| {
            log::warn!("{}; using standard tuning", e);
            Tuning::standard()
        });
        if let Some(json) = canvas.get_attribute("data-tuning") {
            match Tuning::from_json(&json) {
                Ok(custom) => tuning = custom,
                Err(e) => log::warn!("Ignoring data-tuning: {}", e),
            }
        }
        tuning
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| js_err("logger", e))?;

        log::info!("Gap Glider starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let tuning = load_tuning(&window, &canvas);
        log::info!(
            "Tuning: gap {} -> {}, interval {} -> {}",
            tuning.initial_gap,
            tuning.min_gap,
            tuning.initial_spawn_interval,
            tuning.min_spawn_interval
        );
        let playfield = (tuning.playfield_width, tuning.playfield_height);

        // Backing store in device pixels, aspect locked to the playfield
        let dpr = window.device_pixel_ratio();
        let client_h = canvas.client_height().max(1) as f64;
        let client_w = client_h * (playfield.0 / playfield.1) as f64;
        let width = (client_w * dpr) as u32;
        let height = (client_h * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_tuning(seed, tuning).map_err(|e| js_err("tuning", e))?;
        let game = Rc::new(RefCell::new(Game::new(state)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| js_err("surface", e))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| js_err("adapter", e))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, playfield)
            .await
            .map_err(|e| js_err("device", e))?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        {
            let mut g = game.borrow_mut();
            g.render_state = Some(render_state);
            // Show the idle scene behind the start prompt
            g.render();
            g.update_hud();
        }

        setup_input_handlers(&canvas, game.clone())?;
        setup_restart_button(&document, game);

        log::info!("Gap Glider ready");
        Ok(())
    }

    /// Route a trigger into the simulation and react to the outcome
    fn dispatch(game: &Rc<RefCell<Game>>, trigger: Trigger) {
        let outcome = {
            let mut g = game.borrow_mut();
            let outcome = handle_input(&mut g.state, trigger);
            match outcome {
                InputOutcome::Started => g.update_hud(),
                InputOutcome::Restarted => {
                    g.drain_events();
                    g.render();
                    g.update_hud();
                }
                InputOutcome::Flapped | InputOutcome::Ignored => {}
            }
            outcome
        };

        // The loop only runs while Running; arm it on the way in
        if outcome == InputOutcome::Started {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&game, pointer_trigger());
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                dispatch(&game, pointer_trigger());
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if is_game_key(&code) {
                    event.prevent_default();
                }
                let phase = game.borrow().state.phase;
                if let Some(trigger) = key_trigger(&code, phase) {
                    dispatch(&game, trigger);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                dispatch(&game, Trigger::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    /// One step-and-render cycle; re-arms itself only while running
    fn game_loop(game: Rc<RefCell<Game>>) {
        let rearm = {
            let mut g = game.borrow_mut();
            let outcome = advance_frame(&mut g.state);
            if outcome.render {
                g.render();
            }
            g.drain_events();
            g.update_hud();
            outcome.rearm
        };

        if rearm {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Gap Glider failed to start: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gap_glider::Tuning;

    env_logger::init();
    log::info!("Gap Glider (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let variant = args.next().unwrap_or_default();
    let runs: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);

    let tuning = match Tuning::preset(&variant) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    headless::play(tuning, runs);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Autopilot sessions without a display, for balancing tunings
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use gap_glider::sim::{GamePhase, GameState, Trigger, advance_frame, handle_input};
    use gap_glider::{GameOverSummary, Tuning};

    /// Give up on a run after this many frames
    const MAX_FRAMES: u64 = 100_000;

    /// Aim a little below the gap centre; flaps lift more than gravity pulls
    fn wants_flap(state: &GameState) -> bool {
        let tuning = &state.tuning;
        let target = state
            .obstacles
            .iter()
            .find(|o| o.trailing_edge(tuning.obstacle_width) >= tuning.avatar_x - tuning.avatar_radius)
            .map(|o| o.gap_y + o.gap_size * 0.6)
            .unwrap_or(tuning.playfield_height / 2.0);
        state.avatar.y > target && state.avatar.vel > 0.0
    }

    pub fn play(tuning: Tuning, runs: u32) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut state = match GameState::with_tuning(seed, tuning) {
            Ok(s) => s,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        for run in 1..=runs {
            handle_input(&mut state, Trigger::Primary);
            while state.phase == GamePhase::Running && state.frame < MAX_FRAMES {
                if wants_flap(&state) {
                    handle_input(&mut state, Trigger::Flap);
                }
                advance_frame(&mut state);
            }
            state.drain_events();

            if state.phase == GamePhase::Running {
                log::warn!("Run {} hit the frame cap, not counted as best", run);
            }
            let summary = GameOverSummary::new(state.score, state.best_score);
            println!(
                "run {:>3}: {} ({}) after {} frames",
                run,
                summary.score_line(),
                summary.medal_line(),
                state.frame
            );
            state.reset();
        }

        println!("best score: {}", state.best_score);
    }
}
