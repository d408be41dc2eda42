use std::cell::RefCell;
use std::rc::Rc;

use shared_lists_roulette::application::{
    CelebrationEffect, Clock, FrameHandle, FrameOutcome, FrameScheduler, ResultPublisher,
    RouletteController, RouletteView,
};
use shared_lists_roulette::domain::errors::{AppError, AppResult, RouletteError};
use shared_lists_roulette::domain::events::RouletteEvent;
use shared_lists_roulette::domain::roulette::{
    Candidate, RouletteConfig, SpinResult, SpinStatus, StartOutcome, VisualState,
};

#[derive(Default)]
struct Recorder {
    now: f64,
    next_handle: i32,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    fail_requests: bool,
    tracks: Vec<VisualState>,
    results: Vec<SpinResult>,
    cleared: usize,
    no_candidates: usize,
    spinning: Vec<bool>,
    celebrations: usize,
    events: Vec<RouletteEvent>,
}

type Shared = Rc<RefCell<Recorder>>;

struct FakeClock(Shared);
impl Clock for FakeClock {
    fn now_ms(&self) -> f64 {
        self.0.borrow().now
    }
}

struct FakeScheduler(Shared);
impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> AppResult<FrameHandle> {
        let mut rec = self.0.borrow_mut();
        if rec.fail_requests {
            return Err(AppError::Browser("no display".into()));
        }
        rec.next_handle += 1;
        let handle = FrameHandle(rec.next_handle);
        rec.requested.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.0.borrow_mut().cancelled.push(handle);
    }
}

struct FakeView(Shared);
impl RouletteView for FakeView {
    fn render_track(&mut self, state: &VisualState) {
        self.0.borrow_mut().tracks.push(state.clone());
    }
    fn show_result(&mut self, result: &SpinResult) {
        self.0.borrow_mut().results.push(result.clone());
    }
    fn clear_result(&mut self) {
        self.0.borrow_mut().cleared += 1;
    }
    fn show_no_candidates(&mut self) {
        self.0.borrow_mut().no_candidates += 1;
    }
    fn set_spinning(&mut self, spinning: bool) {
        self.0.borrow_mut().spinning.push(spinning);
    }
}

struct FakeEffect(Shared);
impl CelebrationEffect for FakeEffect {
    fn celebrate(&mut self) {
        self.0.borrow_mut().celebrations += 1;
    }
}

/// Controller whose random draws pick `winner` of three with minimum laps and duration.
fn controller(rec: &Shared, winner: usize) -> RouletteController {
    let samples = [(winner as f64 + 0.5) / 3.0, 0.0, 0.0];
    let mut index = 0;
    let rng = move || {
        let value = samples[index % samples.len()];
        index += 1;
        value
    };

    let mut publisher = ResultPublisher::new(Box::new(FakeEffect(rec.clone())));
    let events = rec.clone();
    publisher
        .events_mut()
        .subscribe_to_roulette_events(move |event| events.borrow_mut().events.push(event.clone()));

    RouletteController::new(
        RouletteConfig::default(),
        Box::new(FakeClock(rec.clone())),
        Box::new(rng),
        Box::new(FakeScheduler(rec.clone())),
        Box::new(FakeView(rec.clone())),
        publisher,
    )
}

fn pool() -> Vec<Candidate> {
    ["A", "B", "C"].iter().enumerate().map(|(i, n)| Candidate::named(i.to_string().as_str(), *n)).collect()
}

/// Feeds 16 ms frames until the spin settles; returns the frame count.
fn run_to_end(controller: &mut RouletteController, rec: &Shared) -> usize {
    let mut t = rec.borrow().now;
    for frame in 1..10_000 {
        t += 16.0;
        match controller.on_frame(t) {
            FrameOutcome::Continue => continue,
            FrameOutcome::Settled => return frame,
            FrameOutcome::Idle => panic!("spin stopped without settling"),
        }
    }
    panic!("spin never settled");
}

#[test]
fn empty_pool_shows_no_candidates_and_schedules_nothing() {
    let rec = Shared::default();
    let mut controller = controller(&rec, 0);

    let err = controller.open_selection(&[]).unwrap_err();
    assert_eq!(err, AppError::Roulette(RouletteError::EmptyPool));
    assert!(controller.start_spin(&[]).is_err());

    let rec = rec.borrow();
    assert_eq!(rec.no_candidates, 2);
    assert!(rec.requested.is_empty());
    assert!(rec.tracks.is_empty());
    assert_eq!(rec.events, vec![RouletteEvent::NoCandidates]);
    assert!(controller.session().is_none());
}

#[test]
fn opening_renders_the_track_at_rest() {
    let rec = Shared::default();
    let mut controller = controller(&rec, 0);
    controller.open_selection(&pool()).unwrap();

    let rec = rec.borrow();
    assert_eq!(rec.tracks.len(), 1);
    assert_eq!(rec.tracks[0].slot_contents, ["A", "B", "C", "A", "B"]);
    assert_eq!(rec.tracks[0].highlighted_slot, None);
    assert_eq!(rec.events, vec![RouletteEvent::SelectionOpened { pool_size: 3 }]);
}

#[test]
fn full_spin_publishes_exactly_once() {
    let rec = Shared::default();
    rec.borrow_mut().now = 1000.0;
    let mut controller = controller(&rec, 2);
    controller.open_selection(&pool()).unwrap();
    controller.start_spin(&pool()).unwrap();

    let frames = run_to_end(&mut controller, &rec);
    assert_eq!(frames, 250);
    assert_eq!(controller.status(), SpinStatus::Settled);
    assert!(!controller.has_pending_frame());

    assert_eq!(controller.on_frame(99_999.0), FrameOutcome::Idle);

    let rec = rec.borrow();
    assert_eq!(rec.results.len(), 1);
    assert_eq!(rec.results[0].winner_name, "C");
    assert_eq!(rec.celebrations, 1);
    assert_eq!(controller.publisher().published(), 1);
    let last = rec.tracks.last().unwrap();
    assert_eq!(last.base_index, 2);
    assert_eq!(last.highlighted_name(), Some("C"));
    assert_eq!(rec.spinning, vec![true, false]);
    let settled = rec.events.iter().filter(|e| matches!(e, RouletteEvent::SpinSettled(_))).count();
    assert_eq!(settled, 1);
}

#[test]
fn double_start_creates_one_session() {
    let rec = Shared::default();
    let mut controller = controller(&rec, 1);
    controller.open_selection(&pool()).unwrap();

    let first = controller.start_spin(&pool()).unwrap();
    let start_time = controller.session().map(|s| s.start_time_ms());
    rec.borrow_mut().now = 500.0;
    let second = controller.start_spin(&pool()).unwrap();

    assert!(matches!(first, StartOutcome::Started(_)));
    assert_eq!(second, StartOutcome::AlreadyRunning);
    assert_eq!(controller.session().map(|s| s.start_time_ms()), start_time);
    assert_eq!(rec.borrow().requested.len(), 1);
}

#[test]
fn reopening_cancels_the_pending_frame() {
    let rec = Shared::default();
    let mut controller = controller(&rec, 1);
    controller.open_selection(&pool()).unwrap();
    controller.start_spin(&pool()).unwrap();
    assert_eq!(controller.on_frame(16.0), FrameOutcome::Continue);
    let pending = *rec.borrow().requested.last().unwrap();

    controller.open_selection(&pool()).unwrap();

    assert_eq!(rec.borrow().cancelled, vec![pending]);
    assert_eq!(controller.status(), SpinStatus::Idle);
    assert!(!controller.has_pending_frame());
    assert!(rec.borrow().events.contains(&RouletteEvent::SpinCancelled));

    // A callback that fired anyway finds nothing to advance.
    assert_eq!(controller.on_frame(32.0), FrameOutcome::Idle);
    assert!(rec.borrow().results.is_empty());
}

#[test]
fn closing_stops_the_spin() {
    let rec = Shared::default();
    let mut controller = controller(&rec, 0);
    controller.open_selection(&pool()).unwrap();
    controller.start_spin(&pool()).unwrap();

    controller.close();
    controller.close();

    let rec = rec.borrow();
    assert_eq!(rec.cancelled.len(), 1);
    assert_eq!(rec.spinning, vec![true, false]);
    assert_eq!(rec.celebrations, 0);
}

#[test]
fn spin_can_restart_after_settling() {
    let rec = Shared::default();
    let mut controller = controller(&rec, 0);
    controller.open_selection(&pool()).unwrap();
    controller.start_spin(&pool()).unwrap();
    run_to_end(&mut controller, &rec);

    rec.borrow_mut().now = 50_000.0;
    let outcome = controller.start_spin(&pool()).unwrap();
    assert!(matches!(outcome, StartOutcome::Started(_)));
    run_to_end(&mut controller, &rec);

    assert_eq!(rec.borrow().results.len(), 2);
    assert_eq!(rec.borrow().celebrations, 2);
}

#[test]
fn backward_frame_time_holds_the_start_position() {
    let rec = Shared::default();
    rec.borrow_mut().now = 2000.0;
    let mut controller = controller(&rec, 1);
    controller.open_selection(&pool()).unwrap();
    controller.start_spin(&pool()).unwrap();

    assert_eq!(controller.on_frame(1500.0), FrameOutcome::Continue);
    let rec = rec.borrow();
    let frame = rec.tracks.last().unwrap();
    assert_eq!(frame.base_index, 0);
    assert_eq!(frame.pixel_offset, 140.0);
}

#[test]
fn scheduler_failure_leaves_no_session() {
    let rec = Shared::default();
    rec.borrow_mut().fail_requests = true;
    let mut controller = controller(&rec, 1);
    controller.open_selection(&pool()).unwrap();

    assert!(matches!(controller.start_spin(&pool()), Err(AppError::Browser(_))));
    assert_eq!(controller.status(), SpinStatus::Idle);
    assert!(rec.borrow().spinning.is_empty());
}
