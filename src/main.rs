//! Lecture Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use lecture_dodge::Settings;
    use lecture_dodge::consts::*;
    use lecture_dodge::renderer::{CanvasSurface, DomHud, draw_scene, update_hud};
    use lecture_dodge::sim::{Command, FrameStepper, GameEvent, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        stepper: FrameStepper,
        surface: CanvasSurface,
        hud: DomHud,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks for this frame
        fn update(&mut self, dt: f32) {
            self.stepper
                .advance(&mut self.state, dt, self.settings.timing);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::GameOver { score } => log::info!("Game over! Final score {}", score),
                    other => log::debug!("{:?}", other),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            draw_scene(&self.state, &mut self.surface, time, &self.settings);
            update_hud(&self.state, &mut self.hud);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        if console_log::init_with_level(settings.log_level()).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Lecture Dodge starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas element"))?
            .dyn_into()?;

        let surface = CanvasSurface::new(canvas)?;
        surface.resize(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!(
            "Game initialized with seed: {} (timing: {})",
            seed,
            settings.timing.as_str()
        );

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            settings,
            stepper: FrameStepper::default(),
            surface,
            hud: DomHud::new(&document),
            last_time: 0.0,
        }));

        setup_keyboard(&window, game.clone())?;

        // Start game loop
        request_animation_frame(game)?;

        log::info!("Lecture Dodge running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            if let Some(command) = Command::from_key(&key) {
                // Keep arrows and space from scrolling the page
                event.prevent_default();
                game.borrow_mut().state.input.push(command);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(time);
        }

        if let Err(e) = request_animation_frame(game) {
            log::error!("Failed to schedule next frame: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lecture Dodge (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nPlaying a scripted session...");
    scripted_session(0x5eed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session: wander, distract when possible, mash when caught
#[cfg(not(target_arch = "wasm32"))]
fn scripted_session(seed: u64) {
    use lecture_dodge::consts::SIM_DT;
    use lecture_dodge::sim::{Command, Direction, GameEvent, GameState, tick};

    let mut state = GameState::new(seed);
    let mut catches = 0;
    let moves = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    while !state.is_game_over() {
        if state.player.laptop_open {
            if state.time_ticks % 120 == 0 {
                let dir = moves[(state.time_ticks / 120) as usize % moves.len()];
                state.input.push(Command::Move(dir));
            }
            state.input.push(Command::Distract);
        } else if state.time_ticks % 10 == 0 {
            state.input.push(Command::Mash);
        }
        tick(&mut state, SIM_DT);

        for event in state.drain_events() {
            if event == GameEvent::Caught {
                catches += 1;
            }
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
    }

    println!(
        "✓ {} (caught {} times, {} ticks)",
        state.message.text, catches, state.time_ticks
    );
}
