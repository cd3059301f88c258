//! Catch the Stars entry point
//!
//! Handles platform-specific initialization and drives the frame loop. The
//! driver samples input into a `TickInput`, calls `tick` exactly once per
//! display refresh with the elapsed milliseconds, then renders and updates
//! the DOM HUD.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use star_catch::Settings;
    use star_catch::consts::MAX_FRAME_DT_MS;
    use star_catch::renderer::{RenderState, build_frame};
    use star_catch::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        last_time: f64,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                render_state: None,
                input: TickInput::default(),
                last_time: 0.0,
                settings: Settings::load(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One tick per frame with real elapsed time, then clear the
        /// per-frame input snapshot
        fn update(&mut self, dt_ms: f32, time: f64) {
            let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
            let input = self.input.clone();
            tick(&mut self.state, &input, dt_ms);

            // One-shots and the pointer sample last a single tick
            self.input.start = false;
            self.input.pause = false;
            self.input.reset = false;
            self.input.target_center_x = None;

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame (read-only pass over the state)
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_frame(&self.state, &self.settings);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let playfield = render_state.playfield;
                        render_state.resize(w, h, playfield);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&self.state.lives.to_string()));
            }
            if let Some(el) = document.get_element_by_id("level") {
                el.set_text_content(Some(&self.state.level.to_string()));
            }
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
            if let Some(btn) = document.get_element_by_id("pauseBtn") {
                let label = if self.state.phase == GamePhase::Paused {
                    "Resume"
                } else {
                    "Pause"
                };
                btn.set_text_content(Some(label));
            }
        }
    }

    /// Size the canvas backing store for the device pixel ratio; returns the
    /// logical (CSS pixel) size used as the playfield
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let window = web_sys::window().expect("no window");
        let dpr = window.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        canvas.set_width((rect.width() * dpr) as u32);
        canvas.set_height((rect.height() * dpr) as u32);
        (rect.width() as f32, rect.height() as f32)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Catch the Stars starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (field_w, field_h) = fit_canvas(&canvas);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        game.borrow_mut().state.set_playfield(field_w, field_h);

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            canvas.width(),
            canvas.height(),
            (field_w, field_h),
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        setup_buttons(game.clone());
        setup_keyboard(game.clone());
        setup_mouse(&canvas, game.clone());
        setup_resize(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Catch the Stars running!");
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("startBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("pauseBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pause = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("resetBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.reset = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" => g.input.left = true,
                    "ArrowRight" | "d" => g.input.right = true,
                    " " | "Enter" => g.input.start = true,
                    "Escape" | "p" => g.input.pause = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" => g.input.left = false,
                    "ArrowRight" | "d" => g.input.right = false,
                    _ => {}
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_mouse(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer tracking: desired paddle-center x in logical pixels
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            game.borrow_mut().input.target_center_x = Some(event.offset_x() as f32);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (field_w, field_h) = fit_canvas(&canvas);
            let mut g = game.borrow_mut();
            g.state.set_playfield(field_w, field_h);
            let (w, h) = (canvas.width(), canvas.height());
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(w, h, (field_w, field_h));
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt_ms, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use star_catch::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Catch the Stars (native) starting...");

    // Headless scripted session: a paddle that chases the lowest star
    let mut state = GameState::new(2024);
    let mut input = TickInput {
        start: true,
        ..Default::default()
    };

    for _ in 0..10_000 {
        tick(&mut state, &input, 16.7);
        input = TickInput::default();

        if state.phase == GamePhase::GameOver {
            break;
        }

        input.target_center_x = state
            .stars
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|s| s.pos.x + s.size / 2.0);
    }

    log::info!(
        "session finished: score {} level {} lives {} after {} ticks",
        state.score,
        state.level,
        state.lives,
        state.time_ticks
    );
    println!(
        "score {} / level {} / lives {} ({} ticks)",
        state.score, state.level, state.lives, state.time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
