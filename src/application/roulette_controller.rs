use super::ports::{Clock, FrameHandle, FrameScheduler, RouletteView};
use super::result_publisher::ResultPublisher;
use crate::domain::errors::{AppResult, RouletteError};
use crate::domain::events::{EventDispatcher, RouletteEvent};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::roulette::{
    Candidate, RandomSource, RouletteConfig, SpinDriver, SpinSession, SpinStatus, StartOutcome,
};

/// What a frame callback did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame rendered, next one scheduled
    Continue,
    /// Final frame rendered and result published
    Settled,
    /// No spin was running
    Idle,
}

/// Entry points of the roulette: open the view, spin, react to frames, close.
///
/// The controller is the only writer of the spin session. It tracks the one
/// outstanding frame request so that closing or reopening can cancel it before
/// a new session begins.
pub struct RouletteController {
    driver: SpinDriver,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    scheduler: Box<dyn FrameScheduler>,
    view: Box<dyn RouletteView>,
    publisher: ResultPublisher,
    pending_frame: Option<FrameHandle>,
}

impl RouletteController {
    pub fn new(
        config: RouletteConfig,
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
        scheduler: Box<dyn FrameScheduler>,
        view: Box<dyn RouletteView>,
        publisher: ResultPublisher,
    ) -> Self {
        Self {
            driver: SpinDriver::new(config),
            clock,
            rng,
            scheduler,
            view,
            publisher,
            pending_frame: None,
        }
    }

    pub fn status(&self) -> SpinStatus {
        self.driver.status()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.driver.session()
    }

    pub fn config(&self) -> &RouletteConfig {
        self.driver.config()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn publisher(&self) -> &ResultPublisher {
        &self.publisher
    }

    /// Shows the roulette for `pool`, discarding any previous session.
    pub fn open_selection(&mut self, pool: &[Candidate]) -> AppResult<()> {
        self.abandon_session();
        self.view.clear_result();

        if pool.is_empty() {
            self.view.show_no_candidates();
            self.publisher.events().publish_roulette_event(RouletteEvent::NoCandidates);
            return Err(RouletteError::EmptyPool.into());
        }

        self.view.render_track(&self.driver.idle_state(pool));
        self.publisher
            .events()
            .publish_roulette_event(RouletteEvent::SelectionOpened { pool_size: pool.len() });
        Ok(())
    }

    /// Starts a spin over `pool`. Ignored while one is running.
    pub fn start_spin(&mut self, pool: &[Candidate]) -> AppResult<StartOutcome> {
        if self.driver.is_running() {
            return Ok(StartOutcome::AlreadyRunning);
        }
        if pool.is_empty() {
            self.view.show_no_candidates();
            return Err(RouletteError::EmptyPool.into());
        }

        self.cancel_pending_frame();
        let now = self.clock.now_ms();
        let outcome = self.driver.start(pool, now, self.rng.as_mut())?;

        if let StartOutcome::Started(plan) = outcome {
            if let Err(err) = self.schedule_next_frame() {
                self.driver.reset();
                return Err(err);
            }
            self.view.clear_result();
            self.view.set_spinning(true);
            self.publisher.events().publish_roulette_event(RouletteEvent::SpinStarted {
                pool_size: pool.len(),
                winner_index: plan.winner_index,
                total_duration_ms: plan.total_duration_ms,
            });
        }
        Ok(outcome)
    }

    /// Frame callback body; `now_ms` is the frame timestamp.
    pub fn on_frame(&mut self, now_ms: f64) -> FrameOutcome {
        self.pending_frame = None;

        let Some(update) = self.driver.advance(now_ms) else {
            return FrameOutcome::Idle;
        };
        self.view.render_track(&update.visual);

        match update.result {
            Some(result) => {
                self.view.set_spinning(false);
                self.publisher.publish(self.view.as_mut(), &result);
                FrameOutcome::Settled
            }
            None => match self.schedule_next_frame() {
                Ok(()) => FrameOutcome::Continue,
                Err(err) => {
                    get_logger().error(
                        LogComponent::Application("RouletteController"),
                        &format!("❌ could not schedule next frame, spin dropped: {}", err),
                    );
                    self.driver.reset();
                    self.view.set_spinning(false);
                    FrameOutcome::Idle
                }
            },
        }
    }

    /// Hides the roulette, stopping any running spin.
    pub fn close(&mut self) {
        self.abandon_session();
    }

    fn abandon_session(&mut self) {
        self.cancel_pending_frame();
        if self.driver.reset() {
            self.view.set_spinning(false);
            self.publisher.events().publish_roulette_event(RouletteEvent::SpinCancelled);
        }
    }

    /// Idempotent: a no-op when nothing is scheduled.
    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    fn schedule_next_frame(&mut self) -> AppResult<()> {
        self.pending_frame = Some(self.scheduler.request_frame()?);
        Ok(())
    }
}
