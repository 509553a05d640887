//! Meniscus entry point
//!
//! Handles platform-specific initialization and starts the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use meniscus::platform::{AnimationFrameScheduler, FrameScheduler, LoopControl};
    use meniscus::renderer::CanvasSurface;
    use meniscus::{Animation, Settings};

    /// Page URL query, e.g. `?debug&cap=straight`
    fn page_query(window: &web_sys::Window) -> String {
        window.location().search().unwrap_or_default()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Meniscus starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("canvas")
            .map(|el| el.dyn_into::<HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            Some(Err(_)) => {
                log::error!("#canvas is not a canvas element");
                return;
            }
            None => {
                log::error!("No #canvas element");
                return;
            }
        };

        let mut surface = match CanvasSurface::from_canvas(&canvas) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to acquire 2d context: {:?}", e);
                return;
            }
        };

        let mut settings = Settings::load();
        settings.apply_query(&page_query(&window));

        let mut animation = match Animation::for_surface(settings, &surface) {
            Ok(animation) => animation,
            Err(e) => {
                log::error!("Invalid settings: {}", e);
                return;
            }
        };

        AnimationFrameScheduler.run(Box::new(move || {
            animation.frame(&mut surface);
            LoopControl::Continue
        }));

        log::info!("Meniscus running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: `meniscus [settings.json] [frames]`.
/// Prints the final frame's render commands as JSON.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use meniscus::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
    use meniscus::platform::{FrameScheduler, HeadlessScheduler, LoopControl};
    use meniscus::renderer::RenderCommand;
    use meniscus::{Animation, Settings};

    const DEFAULT_FRAMES: u64 = 600;

    env_logger::init();
    log::info!("Meniscus (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad frame count ({}), using {}", e, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let settings = Settings::load(settings_path.as_deref());
    let animation = match Animation::new(settings, SURFACE_WIDTH, SURFACE_HEIGHT) {
        Ok(animation) => Rc::new(RefCell::new(animation)),
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    let last_frame: Rc<RefCell<Vec<RenderCommand>>> = Rc::default();
    {
        let animation = animation.clone();
        let last_frame = last_frame.clone();
        let mut scheduler = HeadlessScheduler::new(frames);
        scheduler.run(Box::new(move || {
            *last_frame.borrow_mut() = animation.borrow_mut().tick();
            LoopControl::Continue
        }));
        log::info!("Ran {} frames", scheduler.frames_run());
    }

    let animation = animation.borrow();
    let state = animation.state();
    log::info!(
        "Ball y={:.3}, water line y={:.3}, wraps={}",
        state.ball.pos.y,
        state.water_line.y,
        state.wraps
    );

    match serde_json::to_string_pretty(&*last_frame.borrow()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize frame: {}", e),
    }
}
