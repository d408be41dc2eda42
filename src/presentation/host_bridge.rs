//! Outbound channel to the host page.
//!
//! The page registers one JavaScript function. Card actions and confirmed
//! deletes reach it as a JSON string; the page opens its forms or performs the
//! JSONP call and later reports back through `report_mutation`.

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::api::HostMessage;
use crate::log_trace;
use js_sys::Function;
use std::cell::RefCell;
use wasm_bindgen::JsValue;

thread_local! {
    static HOST_HANDLER: RefCell<Option<Function>> = const { RefCell::new(None) };
}

pub fn set_host_handler(handler: Function) {
    HOST_HANDLER.with(|cell| *cell.borrow_mut() = Some(handler));
}

pub fn notify_host(message: &HostMessage) -> AppResult<()> {
    let json = message.to_json()?;
    log_trace!(LogComponent::Presentation("HostBridge"), "→ host {}", json);
    HOST_HANDLER.with(|cell| match cell.borrow().as_ref() {
        Some(handler) => handler
            .call1(&JsValue::NULL, &JsValue::from_str(&json))
            .map(|_| ())
            .map_err(|e| AppError::Browser(format!("host handler failed: {:?}", e))),
        None => Err(AppError::Browser("no host handler registered".to_string())),
    })
}
