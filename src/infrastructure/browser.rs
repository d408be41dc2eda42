//! Browser implementations of the roulette ports.

use crate::application::ports::{Clock, FrameHandle, FrameScheduler};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::domain::roulette::RandomSource;
use crate::log_trace;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// `performance.now()`, falling back to `Date.now()` without a window
#[derive(Debug, Default, Clone, Copy)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

/// `Math.random()`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Schedules one callback per display refresh via `requestAnimationFrame`.
///
/// The closure lives as long as the scheduler, so a frame must not be left
/// pending when the scheduler is dropped.
pub struct AnimationFrameScheduler {
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameScheduler {
    pub fn new(on_frame: impl FnMut(f64) + 'static) -> Self {
        Self { callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>) }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> AppResult<FrameHandle> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Browser("window not available".into()))?;
        let id = window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map_err(|e| AppError::Browser(format!("requestAnimationFrame failed: {:?}", e)))?;
        log_trace!(LogComponent::Browser("AnimationFrame"), "frame {} requested", id);
        Ok(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }
}
