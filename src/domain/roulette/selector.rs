use super::Candidate;
use crate::domain::errors::{RouletteError, RouletteResult};

/// Injectable source of uniform numbers in `[0, 1)`.
///
/// Any `FnMut() -> f64` qualifies, so tests can pass a closure over a fixed
/// sequence and the browser passes `Math.random`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Maps a unit sample onto `[0, len)`. Out-of-range samples are clamped so a
/// misbehaving source can never produce an out-of-bounds index.
pub fn scale_to_index(unit: f64, len: usize) -> usize {
    debug_assert!(len > 0);
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    ((unit * len as f64).floor() as usize).min(len - 1)
}

/// Uniform pick in the inclusive range `[min, max]`.
pub fn pick_inclusive(rng: &mut dyn RandomSource, min: u32, max: u32) -> u32 {
    // u64 so a full u32 span does not overflow a 32-bit usize
    let span = u64::from(max.saturating_sub(min)) + 1;
    let unit = rng.next_unit();
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    let offset = ((unit * span as f64).floor() as u64).min(span - 1);
    min + offset as u32
}

/// Uniform real in `[min, max]`.
pub fn pick_between(rng: &mut dyn RandomSource, min: f64, max: f64) -> f64 {
    let unit = rng.next_unit();
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    min + (max - min) * unit
}

/// Picks the winning index of `pool`.
pub fn select_winner(pool: &[Candidate], rng: &mut dyn RandomSource) -> RouletteResult<usize> {
    if pool.is_empty() {
        return Err(RouletteError::EmptyPool);
    }
    Ok(scale_to_index(rng.next_unit(), pool.len()))
}
