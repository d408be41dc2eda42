use crate::domain::errors::{ItemError, ItemResult};
use crate::domain::items::{ClassTier, Item, ItemId, ItemStatus, ListKind, Rating};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Spreadsheet cells arrive either as numbers or as strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(f64),
    Text(String),
}

impl LooseValue {
    pub fn as_text(&self) -> String {
        match self {
            LooseValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            LooseValue::Number(n) => n.to_string(),
            LooseValue::Text(s) => s.trim().to_string(),
        }
    }

    /// Integer value, 0 when the cell is blank or not a number
    pub fn as_int(&self) -> i64 {
        match self {
            LooseValue::Number(n) => n.trunc() as i64,
            LooseValue::Text(s) => s.trim().parse::<f64>().map(|n| n.trunc() as i64).unwrap_or(0),
        }
    }
}

/// DTO of one spreadsheet row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LooseValue>,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "ubicacion", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "calificacion", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<LooseValue>,
    #[serde(rename = "clase", default, skip_serializing_if = "Option::is_none")]
    pub class_tier: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

impl ItemDto {
    /// Converts the row into a domain item. Unknown status or tier strings are
    /// reported instead of being coerced.
    pub fn to_domain_item(&self) -> ItemResult<Item> {
        let id = self.id.as_ref().map(LooseValue::as_text).unwrap_or_default();
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ItemError::MissingName(id));
        }

        let status = ItemStatus::parse(self.status.as_deref().unwrap_or(""))?;
        let class_tier = non_blank(&self.class_tier).map(|t| ClassTier::parse(&t)).transpose()?;
        let rating = Rating::new(self.rating.as_ref().map_or(0, LooseValue::as_int));

        Ok(Item {
            id: ItemId::from(id),
            name: name.to_string(),
            location: non_blank(&self.location),
            activity_type: non_blank(&self.activity_type),
            status,
            description: non_blank(&self.description),
            rating,
            class_tier,
        })
    }

    pub fn from_domain_item(item: &Item) -> Self {
        let id = item.id.value();
        Self {
            id: (!id.is_empty()).then(|| LooseValue::Text(id.to_string())),
            name: item.name.clone(),
            location: item.location.clone(),
            activity_type: item.activity_type.clone(),
            status: Some(item.status.to_string()),
            description: item.description.clone(),
            rating: Some(LooseValue::Number(item.rating.value() as f64)),
            class_tier: item.class_tier.map(|t| t.to_string()),
        }
    }
}

/// DTO of an API answer to `obtener`
#[derive(Debug, Deserialize)]
pub struct ItemsResponseDto {
    pub success: bool,
    #[serde(default)]
    pub items: Vec<ItemDto>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decodes a full `obtener` response into domain items.
pub fn decode_items_response(json: &str) -> ItemResult<Vec<Item>> {
    let response: ItemsResponseDto = serde_json::from_str(json)?;
    if !response.success {
        return Err(ItemError::Rejected(
            response.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    response.items.iter().map(ItemDto::to_domain_item).collect()
}

/// API verbs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum ApiAction {
    #[strum(serialize = "obtener")]
    #[serde(rename = "obtener")]
    Fetch,
    #[strum(serialize = "agregar")]
    #[serde(rename = "agregar")]
    Add,
    #[strum(serialize = "actualizar")]
    #[serde(rename = "actualizar")]
    Update,
    #[strum(serialize = "eliminar")]
    #[serde(rename = "eliminar")]
    Delete,
}

impl ApiAction {
    pub fn parse(value: &str) -> ItemResult<Self> {
        Self::from_str(value.trim())
            .map_err(|_| ItemError::Malformed(format!("unknown action '{}'", value)))
    }
}

/// DTO of an outgoing request, serialized into the `data` query parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub action: ApiAction,
    pub tipo: ListKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ApiRequest {
    pub fn fetch(kind: ListKind) -> Self {
        Self { action: ApiAction::Fetch, tipo: kind, item: None, id: None }
    }

    /// `agregar` for new items (blank id), `actualizar` otherwise
    pub fn save(kind: ListKind, item: &Item) -> Self {
        let action =
            if item.id.value().is_empty() { ApiAction::Add } else { ApiAction::Update };
        Self { action, tipo: kind, item: Some(ItemDto::from_domain_item(item)), id: None }
    }

    pub fn delete(kind: ListKind, id: &ItemId) -> Self {
        Self { action: ApiAction::Delete, tipo: kind, item: None, id: Some(id.value().to_string()) }
    }

    pub fn to_json(&self) -> ItemResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decodes a single item as edited in the host page's form.
pub fn decode_item(json: &str) -> ItemResult<Item> {
    let dto: ItemDto = serde_json::from_str(json)?;
    dto.to_domain_item()
}

/// DTO of an API answer to `agregar`, `actualizar` or `eliminar`
#[derive(Debug, Deserialize)]
pub struct MutationResponseDto {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn decode_mutation_response(json: &str) -> ItemResult<()> {
    let response: MutationResponseDto = serde_json::from_str(json)?;
    if response.success {
        Ok(())
    } else {
        Err(ItemError::Rejected(response.error.unwrap_or_else(|| "unknown error".to_string())))
    }
}

/// Messages handed to the host page, which owns the forms and the transport
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostMessage {
    /// Open an empty form for `tipo`
    Create { tipo: ListKind },
    /// Open the form prefilled with `item`
    Edit { tipo: ListKind, item: ItemDto },
    /// Send `request` to the API
    Request { request: ApiRequest },
}

impl HostMessage {
    pub fn to_json(&self) -> ItemResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
