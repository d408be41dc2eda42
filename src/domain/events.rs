use crate::domain::items::ListKind;
use crate::domain::roulette::SpinResult;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Events raised by the roulette
#[derive(Debug, Clone, PartialEq)]
pub enum RouletteEvent {
    SelectionOpened { pool_size: usize },
    NoCandidates,
    SpinStarted { pool_size: usize, winner_index: usize, total_duration_ms: f64 },
    SpinCancelled,
    SpinSettled(SpinResult),
}

impl DomainEvent for RouletteEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RouletteEvent::SelectionOpened { .. } => "SelectionOpened",
            RouletteEvent::NoCandidates => "NoCandidates",
            RouletteEvent::SpinStarted { .. } => "SpinStarted",
            RouletteEvent::SpinCancelled => "SpinCancelled",
            RouletteEvent::SpinSettled(_) => "SpinSettled",
        }
    }
}

/// Events raised when list contents change
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsEvent {
    ItemsLoaded { kind: ListKind, count: usize },
    ItemsRejected { kind: ListKind, reason: String },
}

impl DomainEvent for ItemsEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ItemsEvent::ItemsLoaded { .. } => "ItemsLoaded",
            ItemsEvent::ItemsRejected { .. } => "ItemsRejected",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_roulette_event(&self, event: RouletteEvent);
    fn publish_items_event(&self, event: ItemsEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    roulette_handlers: Vec<Box<dyn Fn(&RouletteEvent)>>,
    items_handlers: Vec<Box<dyn Fn(&ItemsEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_roulette_events<F>(&mut self, handler: F)
    where
        F: Fn(&RouletteEvent) + 'static,
    {
        self.roulette_handlers.push(Box::new(handler));
    }

    pub fn subscribe_to_items_events<F>(&mut self, handler: F)
    where
        F: Fn(&ItemsEvent) + 'static,
    {
        self.items_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_roulette_event(&self, event: RouletteEvent) {
        for handler in &self.roulette_handlers {
            handler(&event);
        }
    }

    fn publish_items_event(&self, event: ItemsEvent) {
        for handler in &self.items_handlers {
            handler(&event);
        }
    }
}
