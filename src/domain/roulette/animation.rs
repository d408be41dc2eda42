//! Spin animation: easing, session state and the per-frame driver.

use super::config::RouletteConfig;
use super::result::SpinResult;
use super::selector::{RandomSource, pick_between, pick_inclusive, select_winner};
use super::track::{TrackLayout, VisualState};
use super::Candidate;
use crate::domain::errors::{RouletteError, RouletteResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

/// Quartic ease-out: fast start, zero velocity at the end.
pub fn ease_out_quartic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Fraction of the spin elapsed at `now_ms`, clamped into `[0, 1]` so a clock
/// that jumps backwards or overshoots never leaks out of range.
pub fn spin_progress(now_ms: f64, start_ms: f64, total_duration_ms: f64) -> f64 {
    if !(total_duration_ms > 0.0) {
        return 1.0;
    }
    let raw = (now_ms - start_ms) / total_duration_ms;
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}

/// Logical track position for a given progress.
pub fn logical_position_at(target_logical_position: f64, progress: f64) -> f64 {
    target_logical_position * ease_out_quartic(progress)
}

/// `(full_rotations * pool_len + winner_index) * item_height`
pub fn target_logical_position(
    full_rotations: u32,
    pool_len: usize,
    winner_index: usize,
    item_height: f64,
) -> f64 {
    (full_rotations as f64 * pool_len as f64 + winner_index as f64) * item_height
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, Serialize, Deserialize)]
pub enum SpinStatus {
    Idle,
    Running,
    Settled,
}

/// Random choices fixed when a spin starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub full_rotations: u32,
    pub total_duration_ms: f64,
    pub target_logical_position: f64,
}

impl SpinPlan {
    /// Draws winner, lap count and duration, in that order, from `rng`.
    pub fn draw(
        pool: &[Candidate],
        config: &RouletteConfig,
        rng: &mut dyn RandomSource,
    ) -> RouletteResult<Self> {
        let winner_index = select_winner(pool, rng)?;
        let full_rotations = pick_inclusive(rng, config.min_rotations, config.max_rotations);
        let total_duration_ms = pick_between(rng, config.min_duration_ms, config.max_duration_ms);
        Ok(Self {
            winner_index,
            full_rotations,
            total_duration_ms,
            target_logical_position: target_logical_position(
                full_rotations,
                pool.len(),
                winner_index,
                config.item_height,
            ),
        })
    }
}

/// The one piece of state the roulette owns
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    pool: Vec<Candidate>,
    plan: SpinPlan,
    start_time_ms: f64,
    status: SpinStatus,
}

impl SpinSession {
    pub fn pool(&self) -> &[Candidate] {
        &self.pool
    }

    pub fn plan(&self) -> &SpinPlan {
        &self.plan
    }

    pub fn winner_index(&self) -> usize {
        self.plan.winner_index
    }

    pub fn winner(&self) -> &Candidate {
        &self.pool[self.plan.winner_index]
    }

    pub fn start_time_ms(&self) -> f64 {
        self.start_time_ms
    }

    pub fn status(&self) -> SpinStatus {
        self.status
    }

    pub fn result(&self) -> SpinResult {
        SpinResult::from_candidate(self.plan.winner_index, self.winner())
    }
}

/// Outcome of a spin request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartOutcome {
    Started(SpinPlan),
    /// A spin was already running; nothing changed.
    AlreadyRunning,
}

/// Everything produced by one animation frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub progress: f64,
    pub logical_position: f64,
    pub visual: VisualState,
    /// Present only on the frame that settles the spin
    pub result: Option<SpinResult>,
}

impl FrameUpdate {
    pub fn is_final(&self) -> bool {
        self.result.is_some()
    }
}

/// Idle -> Running -> Settled state machine advanced once per display frame.
#[derive(Debug, Clone)]
pub struct SpinDriver {
    config: RouletteConfig,
    layout: TrackLayout,
    session: Option<SpinSession>,
}

impl SpinDriver {
    pub fn new(config: RouletteConfig) -> Self {
        let layout = config.layout();
        Self { config, layout, session: None }
    }

    pub fn config(&self) -> &RouletteConfig {
        &self.config
    }

    pub fn layout(&self) -> TrackLayout {
        self.layout
    }

    pub fn status(&self) -> SpinStatus {
        self.session.as_ref().map_or(SpinStatus::Idle, SpinSession::status)
    }

    pub fn is_running(&self) -> bool {
        self.status() == SpinStatus::Running
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// Track at rest before any spin.
    pub fn idle_state(&self, pool: &[Candidate]) -> VisualState {
        self.layout.resolve(0.0, pool)
    }

    /// Starts a new session over a snapshot of `pool`.
    ///
    /// A request while running is ignored. A settled session is replaced.
    pub fn start(
        &mut self,
        pool: &[Candidate],
        now_ms: f64,
        rng: &mut dyn RandomSource,
    ) -> RouletteResult<StartOutcome> {
        if self.is_running() {
            log_debug!(LogComponent::Roulette("Driver"), "spin ignored, already running");
            return Ok(StartOutcome::AlreadyRunning);
        }
        if pool.is_empty() {
            return Err(RouletteError::EmptyPool);
        }

        let plan = SpinPlan::draw(pool, &self.config, rng)?;
        log_info!(
            LogComponent::Roulette("Driver"),
            "spin started: winner {} of {}, {} laps, {:.0} ms",
            plan.winner_index,
            pool.len(),
            plan.full_rotations,
            plan.total_duration_ms
        );
        self.session = Some(SpinSession {
            pool: pool.to_vec(),
            plan,
            start_time_ms: now_ms,
            status: SpinStatus::Running,
        });
        Ok(StartOutcome::Started(plan))
    }

    /// Computes the frame at `now_ms`. Returns `None` unless a spin is running.
    pub fn advance(&mut self, now_ms: f64) -> Option<FrameUpdate> {
        let layout = self.layout;
        let session = self.session.as_mut().filter(|s| s.status == SpinStatus::Running)?;
        let plan = session.plan;
        let progress = spin_progress(now_ms, session.start_time_ms, plan.total_duration_ms);

        if progress < 1.0 {
            let logical_position = logical_position_at(plan.target_logical_position, progress);
            return Some(FrameUpdate {
                progress,
                logical_position,
                visual: layout.resolve(logical_position, &session.pool),
                result: None,
            });
        }

        // Land on the exact target, not on target * eased(1.0).
        session.status = SpinStatus::Settled;
        let logical_position = plan.target_logical_position;
        let visual = layout
            .resolve(logical_position, &session.pool)
            .highlight(plan.winner_index, session.pool.len());
        debug_assert_eq!(visual.base_index, plan.winner_index);

        let result = session.result();
        log_info!(
            LogComponent::Roulette("Driver"),
            "spin settled on '{}' (index {})",
            result.winner_name,
            result.winner_index
        );
        Some(FrameUpdate { progress: 1.0, logical_position, visual, result: Some(result) })
    }

    /// Drops any session. Returns true if a running spin was interrupted.
    pub fn reset(&mut self) -> bool {
        let interrupted = self.is_running();
        if interrupted {
            log_debug!(LogComponent::Roulette("Driver"), "running spin cancelled");
        }
        self.session = None;
        interrupted
    }
}
