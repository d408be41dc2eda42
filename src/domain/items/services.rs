use super::entities::Item;
use super::value_objects::ItemStatus;
use crate::domain::roulette::Candidate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Status filter of the list view
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString,
    AsRefStr, Serialize, Deserialize,
)]
pub enum ListFilter {
    #[default]
    #[strum(serialize = "todos")]
    All,
    #[strum(serialize = "pendiente")]
    Pending,
    #[strum(serialize = "visitado")]
    Visited,
}

impl ListFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Pending => item.status == ItemStatus::Pending,
            Self::Visited => item.status == ItemStatus::Visited,
        }
    }
}

/// Items matching `filter`, pending ones first. The sort is stable so the
/// repository order is kept within each status.
pub fn filter_and_sort(items: &[Item], filter: ListFilter) -> Vec<Item> {
    let mut filtered: Vec<Item> = items.iter().filter(|i| filter.matches(i)).cloned().collect();
    filtered.sort_by_key(|i| !i.is_pending());
    filtered
}

/// The roulette pool: pending items in repository order.
pub fn pending_candidates(items: &[Item]) -> Vec<Candidate> {
    items.iter().filter(|i| i.is_pending()).map(Item::to_candidate).collect()
}
