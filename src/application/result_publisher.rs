use super::ports::{CelebrationEffect, RouletteView};
use crate::domain::events::{EventDispatcher, InMemoryEventDispatcher, RouletteEvent};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::roulette::SpinResult;

/// Hands a settled winner to the view, the effect and event subscribers.
pub struct ResultPublisher {
    effect: Box<dyn CelebrationEffect>,
    events: InMemoryEventDispatcher,
    published: usize,
}

impl ResultPublisher {
    pub fn new(effect: Box<dyn CelebrationEffect>) -> Self {
        Self { effect, events: InMemoryEventDispatcher::new(), published: 0 }
    }

    pub fn events(&self) -> &InMemoryEventDispatcher {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut InMemoryEventDispatcher {
        &mut self.events
    }

    /// Number of results published so far
    pub fn published(&self) -> usize {
        self.published
    }

    pub fn publish(&mut self, view: &mut dyn RouletteView, result: &SpinResult) {
        self.published += 1;
        get_logger().info(
            LogComponent::Roulette("Result"),
            &format!("🎉 winner: {} {}", result.winner_name, result.subtitle()),
        );
        view.show_result(result);
        self.effect.celebrate();
        self.events.publish_roulette_event(RouletteEvent::SpinSettled(result.clone()));
    }
}
