//! Functions exported to the host page.
//!
//! The page owns the JSONP transport: it asks for request payloads, performs
//! the call and hands the answers back through `load_items`.

use super::host_bridge::{notify_host, set_host_handler};
use super::roulette_view::{install_roulette, with_roulette};
use super::toast::show_toast;
use crate::application::{ListService, mutation_message};
use crate::domain::errors::{AppError, AppResult, RouletteError};
use crate::domain::items::{ItemId, ListFilter, ListKind};
use crate::domain::logging::LogComponent;
use crate::domain::roulette::{RouletteConfig, StartOutcome};
use crate::global_state::{
    SignalItemStore, current_filter, current_tab, delete_target, roulette_config, roulette_open,
};
use crate::infrastructure::api::{
    ApiAction, ApiRequest, HostMessage, ItemDto, decode_mutation_response,
};
use crate::{log_info, log_warn};
use leptos::*;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

fn list_service() -> ListService<SignalItemStore> {
    ListService::new(SignalItemStore::global())
}

fn not_installed() -> AppError {
    AppError::Browser("roulette not installed".to_string())
}

/// Replaces the roulette settings with a (partial) JSON object.
#[wasm_bindgen]
pub fn configure_roulette(json: &str) -> Result<(), JsValue> {
    let config = RouletteConfig::from_json(json).map_err(AppError::from)?;
    roulette_config().set(config.clone());
    install_roulette(config);
    roulette_open().set(false);
    Ok(())
}

/// Stores an `obtener` answer for `kind` ("restaurantes" / "actividades").
#[wasm_bindgen]
pub fn load_items(kind: &str, json: &str) -> Result<usize, JsValue> {
    let kind = ListKind::parse(kind).map_err(AppError::from)?;
    match list_service().load_response(kind, json) {
        Ok(count) => Ok(count),
        Err(err) => {
            show_toast(format!("Error al cargar datos 😵 ({})", err));
            Err(err.into())
        }
    }
}

/// JSON payload of an `obtener` request for `kind`.
#[wasm_bindgen]
pub fn fetch_request(kind: &str) -> Result<String, JsValue> {
    let kind = ListKind::parse(kind).map_err(AppError::from)?;
    Ok(ApiRequest::fetch(kind).to_json().map_err(AppError::from)?)
}

/// JSON payload of an `eliminar` request.
#[wasm_bindgen]
pub fn delete_request(kind: &str, id: &str) -> Result<String, JsValue> {
    let kind = ListKind::parse(kind).map_err(AppError::from)?;
    Ok(ApiRequest::delete(kind, &ItemId::from(id)).to_json().map_err(AppError::from)?)
}

/// JSON payload of an `agregar` (blank id) or `actualizar` request for the
/// item JSON produced by the host form.
#[wasm_bindgen]
pub fn save_request(kind: &str, item_json: &str) -> Result<String, JsValue> {
    let kind = ListKind::parse(kind).map_err(AppError::from)?;
    let request = list_service().save_request(kind, item_json)?;
    Ok(request.to_json().map_err(AppError::from)?)
}

/// Registers the page function that receives `HostMessage` JSON.
#[wasm_bindgen]
pub fn register_host_handler(handler: js_sys::Function) {
    set_host_handler(handler);
}

/// Reports the API answer to a mutation the page performed. Shows the
/// matching toast and returns whether the API accepted it.
#[wasm_bindgen]
pub fn report_mutation(kind: &str, action: &str, response_json: &str) -> Result<bool, JsValue> {
    let kind = ListKind::parse(kind).map_err(AppError::from)?;
    let action = ApiAction::parse(action).map_err(AppError::from)?;
    let outcome = decode_mutation_response(response_json);
    show_toast(mutation_message(action, kind, &outcome));
    if let Err(err) = &outcome {
        log_warn!(LogComponent::Presentation("Mutation"), "⚠️ {} {} failed: {}", action, kind, err);
    }
    Ok(outcome.is_ok())
}

#[wasm_bindgen]
pub fn set_tab(kind: &str) -> Result<(), JsValue> {
    let kind = ListKind::parse(kind).map_err(AppError::from)?;
    select_tab(kind);
    Ok(())
}

#[wasm_bindgen]
pub fn set_filter(filter: &str) -> Result<(), JsValue> {
    let filter = ListFilter::from_str(filter)
        .map_err(|_| AppError::Browser(format!("unknown filter '{}'", filter)))?;
    current_filter().set(filter);
    Ok(())
}

/// Opens the roulette for the current tab. Returns false when nothing is
/// pending, in which case the "no candidates" state is shown instead.
#[wasm_bindgen]
pub fn open_roulette() -> Result<bool, JsValue> {
    Ok(open_selection()?)
}

/// Spins the open roulette. Returns false if a spin was already running.
#[wasm_bindgen]
pub fn spin_roulette() -> Result<bool, JsValue> {
    Ok(spin()?)
}

#[wasm_bindgen]
pub fn close_roulette() {
    close_selection();
}

pub fn select_tab(kind: ListKind) {
    if current_tab().get_untracked() != kind {
        close_selection();
        delete_target().set(None);
        current_tab().set(kind);
    }
}

pub fn open_selection() -> AppResult<bool> {
    let pool = list_service().roulette_pool(current_tab().get_untracked());
    roulette_open().set(true);
    match with_roulette(|c| c.open_selection(&pool)).ok_or_else(not_installed)? {
        Ok(()) => Ok(true),
        Err(AppError::Roulette(RouletteError::EmptyPool)) => {
            log_info!(LogComponent::Presentation("Roulette"), "nothing pending to pick from");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

pub fn spin() -> AppResult<bool> {
    // Fresh snapshot: the session keeps its own copy from here on.
    let pool = list_service().roulette_pool(current_tab().get_untracked());
    match with_roulette(|c| c.start_spin(&pool)).ok_or_else(not_installed)? {
        Ok(StartOutcome::Started(_)) => Ok(true),
        Ok(StartOutcome::AlreadyRunning) => Ok(false),
        Err(AppError::Roulette(RouletteError::EmptyPool)) => Ok(false),
        Err(err) => {
            log_warn!(LogComponent::Presentation("Roulette"), "⚠️ spin failed: {}", err);
            show_toast("No se pudo girar la ruleta 😵");
            Err(err)
        }
    }
}

pub fn close_selection() {
    let _ = with_roulette(|c| c.close());
    roulette_open().set(false);
}

fn report_host_error(context: &str, err: AppError) {
    log_warn!(LogComponent::Presentation("HostBridge"), "⚠️ {}: {}", context, err);
    show_toast("Error de conexión 😵");
}

/// Asks the page for an empty form on the current tab.
pub fn new_item() {
    let tipo = current_tab().get_untracked();
    if let Err(err) = notify_host(&HostMessage::Create { tipo }) {
        report_host_error("new item", err);
    }
}

/// Asks the page to open its form prefilled with item `id`.
pub fn edit_item(id: &ItemId) {
    let tipo = current_tab().get_untracked();
    let Some(item) = list_service().find(tipo, id) else {
        log_warn!(LogComponent::Presentation("Items"), "⚠️ no {} item '{}' to edit", tipo, id);
        return;
    };
    let item = ItemDto::from_domain_item(&item);
    if let Err(err) = notify_host(&HostMessage::Edit { tipo, item }) {
        report_host_error("edit item", err);
    }
}

/// Opens the delete confirmation for `id`.
pub fn request_delete(id: ItemId) {
    delete_target().set(Some(id));
}

pub fn cancel_delete() {
    delete_target().set(None);
}

/// Hands the `eliminar` request for the confirmed item to the page.
pub fn confirm_delete() {
    let Some(id) = delete_target().get_untracked() else {
        return;
    };
    delete_target().set(None);
    let request = list_service().delete_request(current_tab().get_untracked(), &id);
    if let Err(err) = notify_host(&HostMessage::Request { request }) {
        report_host_error("delete item", err);
    }
}
