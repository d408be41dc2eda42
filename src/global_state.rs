use crate::domain::items::{
    InMemoryItemRepository, Item, ItemId, ItemRepository, ListFilter, ListKind,
};
use crate::domain::roulette::{RouletteConfig, SpinResult, VisualState};
use crate::global_signals;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub items: RwSignal<InMemoryItemRepository>,
    pub current_tab: RwSignal<ListKind>,
    pub current_filter: RwSignal<ListFilter>,
    pub roulette_config: RwSignal<RouletteConfig>,
    pub roulette_open: RwSignal<bool>,
    pub roulette_track: RwSignal<VisualState>,
    pub roulette_result: RwSignal<Option<SpinResult>>,
    pub roulette_empty: RwSignal<bool>,
    pub is_spinning: RwSignal<bool>,
    pub celebrating: RwSignal<bool>,
    pub toast_message: RwSignal<Option<String>>,
    pub delete_target: RwSignal<Option<ItemId>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        items: create_rw_signal(InMemoryItemRepository::new()),
        current_tab: create_rw_signal(ListKind::Restaurants),
        current_filter: create_rw_signal(ListFilter::All),
        roulette_config: create_rw_signal(RouletteConfig::default()),
        roulette_open: create_rw_signal(false),
        roulette_track: create_rw_signal(VisualState::default()),
        roulette_result: create_rw_signal(None),
        roulette_empty: create_rw_signal(false),
        is_spinning: create_rw_signal(false),
        celebrating: create_rw_signal(false),
        toast_message: create_rw_signal(None),
        delete_target: create_rw_signal(None),
    })
}

global_signals! {
    pub items => items: InMemoryItemRepository,
    pub current_tab => current_tab: ListKind,
    pub current_filter => current_filter: ListFilter,
    pub roulette_config => roulette_config: RouletteConfig,
    pub roulette_open => roulette_open: bool,
    pub roulette_track => roulette_track: VisualState,
    pub roulette_result => roulette_result: Option<SpinResult>,
    pub roulette_empty => roulette_empty: bool,
    pub is_spinning => is_spinning: bool,
    pub celebrating => celebrating: bool,
    pub toast_message => toast_message: Option<String>,
    pub delete_target => delete_target: Option<ItemId>,
}

/// Item repository backed by the global `items` signal
#[derive(Clone, Copy)]
pub struct SignalItemStore(pub RwSignal<InMemoryItemRepository>);

impl SignalItemStore {
    pub fn global() -> Self {
        Self(items())
    }
}

impl ItemRepository for SignalItemStore {
    fn items(&self, kind: ListKind) -> Vec<Item> {
        self.0.with_untracked(|repo| repo.items(kind))
    }

    fn replace(&mut self, kind: ListKind, items: Vec<Item>) {
        self.0.update(|repo| repo.replace(kind, items));
    }
}
