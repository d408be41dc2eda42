use crate::application::{
    CelebrationEffect, ResultPublisher, RouletteController, RouletteView,
};
use crate::domain::events::DomainEvent;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::roulette::{RouletteConfig, SpinResult, VisualState};
use crate::global_state::{celebrating, is_spinning, roulette_empty, roulette_result, roulette_track};
use crate::infrastructure::browser::{AnimationFrameScheduler, BrowserRandom, PerformanceClock};
use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static ROULETTE: RefCell<Option<Rc<RefCell<RouletteController>>>> = const { RefCell::new(None) };
}

/// Pushes roulette output into the global Leptos signals
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalRouletteView;

impl RouletteView for SignalRouletteView {
    fn render_track(&mut self, state: &VisualState) {
        roulette_track().set(state.clone());
    }

    fn show_result(&mut self, result: &SpinResult) {
        roulette_result().set(Some(result.clone()));
    }

    fn clear_result(&mut self) {
        roulette_result().set(None);
        roulette_empty().set(false);
    }

    fn show_no_candidates(&mut self) {
        roulette_empty().set(true);
    }

    fn set_spinning(&mut self, spinning: bool) {
        is_spinning().set(spinning);
    }
}

/// Turns on the confetti class for a while
pub struct ConfettiBurst {
    duration_ms: u32,
    pending: Option<Timeout>,
}

impl ConfettiBurst {
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms, pending: None }
    }
}

impl CelebrationEffect for ConfettiBurst {
    fn celebrate(&mut self) {
        let signal = celebrating();
        signal.set(true);
        // Replacing the handle cancels a burst still in flight.
        self.pending = Some(Timeout::new(self.duration_ms, move || signal.set(false)));
    }
}

/// Builds the browser roulette and stores it as the global instance.
pub fn install_roulette(config: RouletteConfig) -> Rc<RefCell<RouletteController>> {
    if let Some(previous) = ROULETTE.with(|cell| cell.borrow_mut().take()) {
        previous.borrow_mut().close();
    }

    let mut publisher = ResultPublisher::new(Box::new(ConfettiBurst::new(config.celebration_ms)));
    publisher.events_mut().subscribe_to_roulette_events(|event| {
        get_logger().debug(
            LogComponent::Presentation("Roulette"),
            &format!("event {}", event.event_type()),
        );
    });
    let controller = Rc::new_cyclic(|weak: &std::rc::Weak<RefCell<RouletteController>>| {
        let weak = weak.clone();
        let scheduler = AnimationFrameScheduler::new(move |timestamp: f64| {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().on_frame(timestamp);
            }
        });
        RefCell::new(RouletteController::new(
            config,
            Box::new(PerformanceClock),
            Box::new(BrowserRandom),
            Box::new(scheduler),
            Box::new(SignalRouletteView),
            publisher,
        ))
    });

    ROULETTE.with(|cell| *cell.borrow_mut() = Some(controller.clone()));
    controller
}

/// Runs `f` against the global roulette, if installed
pub fn with_roulette<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut RouletteController) -> R,
{
    ROULETTE.with(|cell| {
        let opt = cell.borrow();
        opt.as_ref().map(|rc| f(&mut rc.borrow_mut()))
    })
}
