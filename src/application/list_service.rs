use crate::domain::errors::{AppResult, ItemError, ItemResult};
use crate::domain::events::{EventDispatcher, InMemoryEventDispatcher, ItemsEvent};
use crate::domain::items::{
    Item, ItemId, ItemRepository, ListFilter, ListKind, filter_and_sort, pending_candidates,
};
use crate::domain::logging::LogComponent;
use crate::domain::roulette::Candidate;
use crate::infrastructure::api::{ApiAction, ApiRequest, decode_item, decode_items_response};
use crate::{log_info, log_warn};

/// Application service over the two shared lists
pub struct ListService<R: ItemRepository> {
    repository: R,
    events: InMemoryEventDispatcher,
}

impl<R: ItemRepository> ListService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository, events: InMemoryEventDispatcher::new() }
    }

    pub fn events_mut(&mut self) -> &mut InMemoryEventDispatcher {
        &mut self.events
    }

    /// Replaces `kind` with the items of an API response. On failure the
    /// previous contents are kept.
    pub fn load_response(&mut self, kind: ListKind, json: &str) -> AppResult<usize> {
        match decode_items_response(json) {
            Ok(items) => {
                let count = items.len();
                self.repository.replace(kind, items);
                log_info!(LogComponent::Items("ListService"), "loaded {} {}", count, kind);
                self.events.publish_items_event(ItemsEvent::ItemsLoaded { kind, count });
                Ok(count)
            }
            Err(err) => {
                log_warn!(LogComponent::Items("ListService"), "⚠️ {} not loaded: {}", kind, err);
                self.events
                    .publish_items_event(ItemsEvent::ItemsRejected { kind, reason: err.to_string() });
                Err(err.into())
            }
        }
    }

    /// Items as the list view shows them
    pub fn visible_items(&self, kind: ListKind, filter: ListFilter) -> Vec<Item> {
        filter_and_sort(&self.repository.items(kind), filter)
    }

    /// Fresh snapshot of the pending items of `kind`
    pub fn roulette_pool(&self, kind: ListKind) -> Vec<Candidate> {
        pending_candidates(&self.repository.items(kind))
    }

    pub fn find(&self, kind: ListKind, id: &ItemId) -> Option<Item> {
        self.repository.items(kind).into_iter().find(|item| &item.id == id)
    }

    /// `agregar` or `actualizar` payload for an item edited in the host form
    pub fn save_request(&self, kind: ListKind, item_json: &str) -> AppResult<ApiRequest> {
        let item = decode_item(item_json)?;
        if !item.id.value().is_empty() && self.find(kind, &item.id).is_none() {
            log_warn!(
                LogComponent::Items("ListService"),
                "⚠️ updating {} '{}' that is not loaded",
                kind,
                item.id
            );
        }
        Ok(ApiRequest::save(kind, &item))
    }

    pub fn delete_request(&self, kind: ListKind, id: &ItemId) -> ApiRequest {
        ApiRequest::delete(kind, id)
    }
}

/// Toast text for the API answer to `action` on `kind`.
pub fn mutation_message(action: ApiAction, kind: ListKind, outcome: &ItemResult<()>) -> String {
    match outcome {
        Ok(()) => match (action, kind) {
            (ApiAction::Add, ListKind::Restaurants) => "Restaurante agregado 🎉".to_string(),
            (ApiAction::Add, ListKind::Activities) => "Actividad agregada 🎉".to_string(),
            (ApiAction::Update, ListKind::Restaurants) => "Restaurante actualizado ✅".to_string(),
            (ApiAction::Update, ListKind::Activities) => "Actividad actualizada ✅".to_string(),
            (ApiAction::Delete, _) => "Eliminado 🗑️".to_string(),
            (ApiAction::Fetch, _) => "Lista actualizada ✅".to_string(),
        },
        Err(ItemError::Rejected(reason)) => format!("Error: {}", reason),
        Err(_) if action == ApiAction::Fetch => "Error al cargar datos 😵".to_string(),
        Err(_) => "Error de conexión 😵".to_string(),
    }
}
