pub use super::value_objects::{ClassTier, ItemId, ItemStatus, Rating};
use crate::domain::roulette::Candidate;
use serde::{Deserialize, Serialize};

/// Domain entity - one entry of a shared list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub location: Option<String>,
    /// Free-form category, only used by activities ("🎬 Cine", ...)
    pub activity_type: Option<String>,
    pub status: ItemStatus,
    pub description: Option<String>,
    pub rating: Rating,
    pub class_tier: Option<ClassTier>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            activity_type: None,
            status,
            description: None,
            rating: Rating::default(),
            class_tier: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_class_tier(mut self, tier: ClassTier) -> Self {
        self.class_tier = Some(tier);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Details (stars, description) are only shown once the item was visited.
    pub fn shows_details(&self) -> bool {
        !self.is_pending()
    }

    /// Read-only snapshot handed to the roulette.
    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            class_tier: self.class_tier,
            status: self.status,
        }
    }
}
