//! `requestAnimationFrame` scheduler

use wasm_bindgen::prelude::*;

use super::{FrameScheduler, LoopControl};

/// Schedules frames on the browser's refresh; each frame registers the next
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn run(&mut self, frame: Box<dyn FnMut() -> LoopControl>) {
        request_animation_frame(frame);
    }
}

fn request_animation_frame(mut frame: Box<dyn FnMut() -> LoopControl>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window; animation loop not started");
        return;
    };

    let closure = Closure::once(move |_time: f64| {
        if frame() == LoopControl::Continue {
            request_animation_frame(frame);
        } else {
            log::info!("Animation loop stopped");
        }
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}
