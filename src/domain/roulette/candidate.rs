use crate::domain::items::{ClassTier, ItemId, ItemStatus};
use serde::{Deserialize, Serialize};

/// Read-only snapshot of an item eligible for the roulette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: ItemId,
    pub name: String,
    pub location: Option<String>,
    pub class_tier: Option<ClassTier>,
    pub status: ItemStatus,
}

impl Candidate {
    /// Pending candidate with just a name, handy for building pools by hand.
    pub fn named(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            class_tier: None,
            status: ItemStatus::Pending,
        }
    }
}
