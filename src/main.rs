//! Blockfall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use blockfall::audio::AudioManager;
    use blockfall::consts::{MUSIC_SRC, MUSIC_VOLUME};
    use blockfall::input::InputState;
    use blockfall::platform::Interval;
    use blockfall::render::CanvasRenderer;
    use blockfall::sim::{GamePhase, GameState, reduce_spawn_interval, spawn_block, step};
    use blockfall::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        renderer: CanvasRenderer,
        audio: AudioManager,
        spawn_timer: Option<Interval>,
        difficulty_timer: Option<Interval>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Blockfall starting...");

        let tuning = Tuning::default();
        if let Err(e) = tuning.validate() {
            log::error!("Invalid tuning: {e}");
            return;
        }

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(tuning.play_width as u32);
        canvas.set_height(tuning.play_height as u32);

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to create renderer");
        let audio = AudioManager::new(MUSIC_SRC, MUSIC_VOLUME);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(tuning, seed),
            input: InputState::new(),
            renderer,
            audio,
            spawn_timer: None,
            difficulty_timer: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_click_handlers(&canvas, game.clone());

        start_spawning(&game);
        request_animation_frame(game);

        log::info!("Blockfall running!");
    }

    /// Create a spawn timer firing at `interval_ms`
    fn make_spawn_timer(game: &Rc<RefCell<Game>>, interval_ms: u32) -> Option<Interval> {
        let game = game.clone();
        Interval::new(interval_ms, move || {
            spawn_block(&mut game.borrow_mut().state);
        })
        .map_err(|e| log::error!("Failed to start spawn timer: {e:?}"))
        .ok()
    }

    /// (Re)start the spawn and difficulty timers at the state's current
    /// cadence. Replacing the handles drops - and thereby cancels - any
    /// timers already running.
    fn start_spawning(game: &Rc<RefCell<Game>>) {
        let (interval_ms, period_ms) = {
            let g = game.borrow();
            (g.state.spawn_interval_ms, g.state.tuning.difficulty_period_ms)
        };

        let spawn_timer = make_spawn_timer(game, interval_ms);

        let difficulty_timer = {
            let game = game.clone();
            Interval::new(period_ms, move || {
                let changed = reduce_spawn_interval(&mut game.borrow_mut().state);
                if changed {
                    let interval_ms = game.borrow().state.spawn_interval_ms;
                    let timer = make_spawn_timer(&game, interval_ms);
                    game.borrow_mut().spawn_timer = timer;
                }
            })
            .map_err(|e| log::error!("Failed to start difficulty timer: {e:?}"))
            .ok()
        };

        let mut g = game.borrow_mut();
        g.spawn_timer = spawn_timer;
        g.difficulty_timer = difficulty_timer;
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_click_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Music starts on the first click anywhere on the page and keeps
        // looping across game over and restarts.
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow().audio.ensure_playing();
            });
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart on canvas click, only while the game-over overlay is up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let restarted = {
                    let mut g = game.borrow_mut();
                    if g.state.phase == GamePhase::GameOver {
                        g.state.restart();
                        true
                    } else {
                        false
                    }
                };
                if restarted {
                    start_spawning(&game);
                    request_animation_frame(game.clone());
                }
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let input = g.input.frame_input();
            step(&mut g.state, &input);
            g.renderer.render(&g.state);

            if g.state.phase == GamePhase::GameOver {
                // Pause the spawn and difficulty timers while the overlay is
                // up; restart recreates them at the initial cadence.
                g.spawn_timer = None;
                g.difficulty_timer = None;
                false
            } else {
                true
            }
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use blockfall::sim::{FrameInput, GamePhase, GameState, reduce_spawn_interval, spawn_block, step};
    use blockfall::tuning::Tuning;

    env_logger::init();
    log::info!("Blockfall (native) starting...");

    let tuning = Tuning::default();
    if let Err(e) = tuning.validate() {
        log::error!("Invalid tuning: {e}");
        std::process::exit(1);
    }

    // Headless smoke run: the browser build is the product, this just
    // exercises the sim end to end at ~60 fps timer ratios.
    let mut state = GameState::new(tuning, 42);
    let mut frames = 0u32;
    while state.phase == GamePhase::Playing && frames < 36_000 {
        if frames % 48 == 0 {
            spawn_block(&mut state);
        }
        if frames > 0 && frames % 300 == 0 {
            reduce_spawn_interval(&mut state);
        }
        step(&mut state, &FrameInput::default());
        frames += 1;
    }

    assert_eq!(state.phase, GamePhase::GameOver, "idle run should end");
    println!(
        "✓ Smoke run: game over after {} frames, score {}, spawn interval {}ms",
        frames, state.score, state.spawn_interval_ms
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
