//! Platform abstraction layer
//!
//! Frame scheduling differs per host:
//! - Web: `requestAnimationFrame`, re-registered every frame
//! - Native: a bounded headless loop

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessScheduler;
#[cfg(target_arch = "wasm32")]
pub use web::AnimationFrameScheduler;

/// Returned by a frame callback to keep or end the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Calls a frame callback once per display refresh
pub trait FrameScheduler {
    /// Drive `frame` until it returns [`LoopControl::Stop`] or the scheduler
    /// runs out of frames. May return before the loop ends on hosts with an
    /// event loop of their own.
    fn run(&mut self, frame: Box<dyn FnMut() -> LoopControl>);
}
