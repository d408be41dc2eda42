use crate::domain::errors::ItemError;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Opaque item identifier as handed out by the spreadsheet API
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Into, Display, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The two shared lists
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum ListKind {
    #[strum(serialize = "restaurantes")]
    #[serde(rename = "restaurantes")]
    Restaurants,
    #[strum(serialize = "actividades")]
    #[serde(rename = "actividades")]
    Activities,
}

impl ListKind {
    pub fn parse(value: &str) -> Result<Self, ItemError> {
        Self::from_str(value.trim()).map_err(|_| ItemError::UnknownListKind(value.to_string()))
    }

    /// Icon in front of card names. Activity cards carry their type instead.
    pub fn name_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Restaurants => Some("🍽️"),
            Self::Activities => None,
        }
    }

    /// Badge of an item that is no longer pending
    pub fn visited_label(&self) -> &'static str {
        match self {
            Self::Restaurants => "✅ Visitado",
            Self::Activities => "✅ Realizada",
        }
    }

    pub fn card_title(&self, name: &str) -> String {
        match self.name_prefix() {
            Some(prefix) => format!("{} {}", prefix, name),
            None => name.to_string(),
        }
    }
}

/// Whether an item is still on the to-do list
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum ItemStatus {
    #[strum(serialize = "pendiente")]
    #[serde(rename = "pendiente")]
    Pending,
    #[strum(serialize = "visitado")]
    #[serde(rename = "visitado")]
    Visited,
}

impl ItemStatus {
    /// Strict parse: blanks default to pending, anything else unknown is an error.
    pub fn parse(value: &str) -> Result<Self, ItemError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::Pending);
        }
        Self::from_str(&trimmed.to_lowercase())
            .map_err(|_| ItemError::UnknownStatus(value.to_string()))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Price/quality tier shown next to a roulette winner
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, StrumDisplay, EnumIter, EnumString,
    AsRefStr, Serialize, Deserialize,
)]
pub enum ClassTier {
    C,
    B,
    A,
    S,
}

impl ClassTier {
    pub fn parse(value: &str) -> Result<Self, ItemError> {
        Self::from_str(&value.trim().to_uppercase())
            .map_err(|_| ItemError::UnknownClassTier(value.to_string()))
    }
}

/// Star rating, 0 (unrated) to 5
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Into, Serialize, Deserialize,
)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(stars: i64) -> Self {
        Self(stars.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Which of the five stars are filled
    pub fn star_flags(&self) -> [bool; Self::MAX as usize] {
        let mut flags = [false; Self::MAX as usize];
        for (i, flag) in flags.iter_mut().enumerate() {
            *flag = i < self.0 as usize;
        }
        flags
    }
}
