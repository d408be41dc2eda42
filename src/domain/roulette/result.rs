use super::Candidate;
use crate::domain::items::{ClassTier, ItemId};
use serde::{Deserialize, Serialize};

/// Winner of a settled spin, taken from the session's own pool snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub winner_index: usize,
    pub winner_id: ItemId,
    pub winner_name: String,
    pub winner_location: Option<String>,
    pub winner_class_tier: Option<ClassTier>,
}

impl SpinResult {
    pub fn from_candidate(winner_index: usize, candidate: &Candidate) -> Self {
        Self {
            winner_index,
            winner_id: candidate.id.clone(),
            winner_name: candidate.name.clone(),
            winner_location: candidate.location.clone(),
            winner_class_tier: candidate.class_tier,
        }
    }

    /// Location and tier line shown under the winner name
    pub fn subtitle(&self) -> String {
        match (&self.winner_location, self.winner_class_tier) {
            (Some(location), Some(tier)) => format!("📍 {} · {}", location, tier),
            (Some(location), None) => format!("📍 {}", location),
            (None, Some(tier)) => format!("{}", tier),
            (None, None) => String::new(),
        }
    }
}
