//! Friends Snake entry point
//!
//! Browser: wires the DOM (canvas, HUD, buttons, keyboard, touch) to a
//! `Session` and drives it from requestAnimationFrame.
//! Native: runs the autopilot headless as a smoke test.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

    use friends_snake::audio::{AudioManager, SoundEffect};
    use friends_snake::consts::*;
    use friends_snake::hud::music_label;
    use friends_snake::input::{self, InputAction};
    use friends_snake::renderer::{self, canvas::paint, palette};
    use friends_snake::sim::GameEvent;
    use friends_snake::{HudSnapshot, Session, Settings, offline};

    /// Game instance holding all state
    struct Game {
        session: Session,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        size_px: f64,
        audio: AudioManager,
        settings: Settings,
        // Skip DOM writes when nothing changed
        last_hud: Option<HudSnapshot>,
    }

    impl Game {
        /// Route a player action. Music is handled here, everything else
        /// goes to the session.
        fn handle(&mut self, action: InputAction) {
            // Any gesture may unblock audio
            self.audio.resume();
            self.audio.start_music();

            match action {
                InputAction::ToggleMusic => {
                    let on = self.settings.toggle_music();
                    self.audio.set_music(on);
                    self.settings.save();
                    set_text("soundToggle", music_label(on));
                }
                other => self.session.apply(other),
            }
        }

        /// Advance the session to `time` and react to what happened
        fn update(&mut self, time: f64) {
            for event in self.session.frame(time) {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
                match event {
                    GameEvent::GameOver { cause, score } => {
                        log::info!("Crashed into {:?} with {} points", cause, score);
                        self.flash_game_over();
                    }
                    GameEvent::SpeedBoostExpired { factor } => {
                        log::debug!("Boost x{:.2} ended", factor);
                    }
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            let commands = renderer::build_frame(&self.session.state, self.size_px as f32);
            paint(&self.ctx, self.size_px, &commands);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let hud = HudSnapshot::from_state(&self.session.state);
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }
            set_text("score", &hud.score);
            set_text("speedDisplay", &hud.speed);
            set_text("powerUpDisplay", &hud.power);
            set_text("pauseBtn", hud.pause_label);
            self.last_hud = Some(hud);
        }

        /// Briefly desaturate the canvas
        fn flash_game_over(&self) {
            if !self.settings.effective_flash() {
                return;
            }
            let style = self.canvas.style();
            let _ = style.set_property("transition", "filter 0.12s");
            let _ = style.set_property("filter", palette::GAME_OVER_FILTER);

            let Some(window) = web_sys::window() else { return };
            let style = style.clone();
            let closure = Closure::once(move || {
                let _ = style.set_property("filter", "");
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                GAME_OVER_FLASH_MS,
            );
            closure.forget();
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Friends Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_SIZE_PX);
        canvas.set_height(CANVAS_SIZE_PX);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let audio = AudioManager::new(&settings);
        set_text("soundToggle", music_label(audio.music_enabled()));

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed),
            canvas,
            ctx,
            size_px: f64::from(CANVAS_SIZE_PX),
            audio,
            settings,
            last_hud: None,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_touch_controls(&document, game.clone());
        setup_buttons(&document, game.clone());
        setup_auto_pause(&document, game.clone());
        offline::register_service_worker();

        // Likely blocked until the first gesture; retried on input
        game.borrow().audio.start_music();

        request_animation_frame(game);
        log::info!("Friends Snake running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            let Some(action) = input::action_for_key(&key) else {
                return;
            };
            // Keep arrows and space from scrolling the page
            if matches!(action, InputAction::Steer(_) | InputAction::TogglePause) {
                event.prevent_default();
            }
            game.borrow_mut().handle(action);
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch_controls(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        // Only show the d-pad on touch devices
        let touch_capable =
            js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        if touch_capable {
            if let Some(el) = document.get_element_by_id("touchControls") {
                let _ = el.class_list().remove_1("hidden");
            }
        }

        let Ok(buttons) = document.query_selector_all("#touchControls button") else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(button) = buttons
                .item(i)
                .and_then(|n| n.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let Some(action) = button
                .dataset()
                .get("dir")
                .and_then(|d| input::action_for_touch(&d))
            else {
                continue;
            };

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().handle(action);
                });
                let _ = button.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().handle(action);
                });
                let _ = button.add_event_listener_with_callback(
                    "mousedown",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let buttons = [
            ("soundToggle", InputAction::ToggleMusic),
            ("pauseBtn", InputAction::TogglePause),
            ("resetBtn", InputAction::Reset),
        ];
        for (id, action) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().handle(action);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Pause when the tab is hidden so the snake does not die unattended
    fn setup_auto_pause(document: &Document, game: Rc<RefCell<Game>>) {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.session.state.is_running() {
                    g.session.apply(InputAction::TogglePause);
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }
        request_animation_frame(game);
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

/// Headless autopilot run: `friends-snake [seconds] [tuning.json]`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use friends_snake::consts::HEADLESS_FRAME_MS;
    use friends_snake::sim::GameEvent;
    use friends_snake::{HudSnapshot, InputAction, Session, Tuning};

    env_logger::init();
    log::info!("Friends Snake (native) starting...");
    log::info!("Native mode runs the autopilot headless - serve web/ for the playable version");

    let mut args = std::env::args().skip(1);
    let seconds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60);
    let tuning = match args.next() {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::error!("Could not load tuning from {}: {}", path, e);
                    return std::process::ExitCode::FAILURE;
                }
            }
        }
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = Session::with_tuning(seed, tuning);
    session.apply(InputAction::ToggleAutopilot);

    let frames = (f64::from(seconds) * 1000.0 / HEADLESS_FRAME_MS) as u64;
    let (mut food, mut crashes, mut best) = (0u32, 0u32, 0u64);
    for frame in 0..frames {
        for event in session.frame(frame as f64 * HEADLESS_FRAME_MS) {
            log::debug!("{:?}", event);
            match event {
                GameEvent::FoodEaten { .. } => food += 1,
                GameEvent::GameOver { score, .. } => {
                    crashes += 1;
                    best = best.max(score);
                }
                _ => {}
            }
        }
    }
    best = best.max(session.state.score);

    let hud = HudSnapshot::from_state(&session.state);
    log::info!(
        "{}s simulated (seed {}): {} food, {} crashes, best score {}, final HUD {:?}",
        seconds,
        seed,
        food,
        crashes,
        best,
        hud
    );
    println!(
        "food={} crashes={} best={} score={} speed={} power={}",
        food, crashes, best, hud.score, hud.speed, hud.power
    );
    std::process::ExitCode::SUCCESS
}
