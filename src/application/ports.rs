//! Capabilities the roulette consumes from its surroundings.
//!
//! The browser implements these with `performance.now()`,
//! `requestAnimationFrame` and Leptos signals; tests use recording doubles.

use crate::domain::errors::AppResult;
use crate::domain::roulette::{SpinResult, VisualState};

/// Monotonic milliseconds, same time base as the frame callback timestamps.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Token of a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Per-frame scheduling primitive.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> AppResult<FrameHandle>;
    /// Must be safe to call with a handle that already fired.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Sink for everything the roulette wants on screen.
pub trait RouletteView {
    fn render_track(&mut self, state: &VisualState);
    fn show_result(&mut self, result: &SpinResult);
    fn clear_result(&mut self);
    fn show_no_candidates(&mut self);
    fn set_spinning(&mut self, spinning: bool);
}

/// Fire-and-forget celebration on a settled spin.
pub trait CelebrationEffect {
    fn celebrate(&mut self);
}
