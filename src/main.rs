//! Space Invaders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use space_invaders::renderer::{DomSurface, Scene, Surface};
    use space_invaders::{Session, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: DomSurface,
    }

    impl Game {
        /// One display frame: simulate, then draw
        fn frame(&mut self) {
            self.session.frame();
            let scene = Scene::from_state(&self.session.state);
            self.surface.present(&scene);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Space Invaders starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document - not running in a browser page?");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::load();
        let tuning = Tuning::load();
        log::info!(
            "Arena {}x{}, {} enemies, fire mode {}",
            tuning.arena_width,
            tuning.arena_height,
            tuning.enemy_count(),
            settings.fire_mode.as_str()
        );

        let Some(mut surface) = DomSurface::new(document, settings.show_debug) else {
            log::error!("Page has no #arena element");
            return;
        };
        surface.set_show_debug(settings.show_debug);

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(tuning, settings),
            surface,
        }));

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());
        setup_focus_loss(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Space Invaders running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                // Game bindings win over the toggle keys
                let toggle = !g.session.keyboard.is_bound(&key) && !event.repeat();
                match key.as_str() {
                    "i" | "I" if toggle => g.session.toggle_idle_mode(),
                    "f" | "F" if toggle => g.session.toggle_fire_mode(),
                    "`" if toggle => {
                        g.session.toggle_show_debug();
                        let show_debug = g.session.settings.show_debug;
                        g.surface.set_show_debug(show_debug);
                    }
                    _ => {
                        // Stop arrows/space from scrolling the page
                        if g.session.keyboard.is_bound(&key) {
                            event.prevent_default();
                        }
                        g.session.keyboard.key_down(&key);
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.keyboard.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().session.restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Key-up events are lost while the window is unfocused; drop held keys
    /// so the ship doesn't keep drifting when focus returns
    fn setup_focus_loss(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().session.keyboard.release_all();
            log::debug!("Window blur - released held keys");
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation step per animation frame, no delta time
    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use space_invaders::renderer::{LogSurface, Scene, Surface};
    use space_invaders::{Session, Settings, Tuning};

    /// Frames the headless demo runs (one minute at 60 Hz)
    const DEMO_FRAMES: u64 = 60 * 60;

    env_logger::init();
    log::info!("Space Invaders (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::from_path(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {path}: {e}");
                Tuning::default()
            }
        },
        None => Tuning::load(),
    };

    let mut session = Session::new(tuning, Settings::load());
    session.toggle_idle_mode();
    let mut surface = LogSurface::default();

    for _ in 0..DEMO_FRAMES {
        session.frame();
        surface.present(&Scene::from_state(&session.state));
        if session.state.is_game_over() || session.state.enemies.is_empty() {
            break;
        }
    }

    log::info!(
        "Demo finished after {} frames: score {}, {} enemies left{}",
        surface.frames_presented(),
        session.state.score,
        session.state.enemies.len(),
        if session.state.is_game_over() { " (game over)" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
