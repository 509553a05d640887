//! Headless scheduler for native runs and tests

use super::{FrameScheduler, LoopControl};

/// Runs frames back to back, up to a fixed budget
#[derive(Debug, Clone)]
pub struct HeadlessScheduler {
    max_frames: u64,
    frames_run: u64,
}

impl HeadlessScheduler {
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            frames_run: 0,
        }
    }

    /// Frames executed so far
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }
}

impl FrameScheduler for HeadlessScheduler {
    fn run(&mut self, mut frame: Box<dyn FnMut() -> LoopControl>) {
        while self.frames_run < self.max_frames {
            self.frames_run += 1;
            if frame() == LoopControl::Stop {
                log::debug!("Frame loop stopped after {} frames", self.frames_run);
                return;
            }
        }
        log::debug!("Frame budget of {} exhausted", self.max_frames);
    }
}
