use crate::global_state::{roulette_config, toast_message};
use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;

thread_local! {
    static TOAST_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// Shows `message` at the bottom of the screen, replacing any toast on screen.
pub fn show_toast(message: impl Into<String>) {
    let signal = toast_message();
    signal.set(Some(message.into()));
    let ms = roulette_config().with_untracked(|c| c.toast_ms);
    TOAST_TIMER.with(|timer| {
        *timer.borrow_mut() = Some(Timeout::new(ms, move || signal.set(None)));
    });
}
