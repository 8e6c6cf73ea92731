use std::rc::Rc;

use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

pub mod components;
pub mod constants;
pub mod controller;
pub mod dom_utils;
pub mod envelope;
pub mod logging;
pub mod models;
pub mod network;
pub mod notify;

use constants::{LOGIN_PAGE, SIGNUP_PAGE, SURVEY_PAGE};
use network::{ApiClient, GatewayConfig};
use notify::{AlertNotify, Notify};

// Main entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Resolved exactly once; constant for the lifetime of the client.
    let config = Rc::new(GatewayConfig::from_env());
    console_log!("gateway base URL: {}", config.base_url());

    let client = Rc::new(ApiClient::new(config));
    let notify: Rc<dyn Notify> = Rc::new(AlertNotify);

    let path = window.location().pathname().unwrap_or_else(|_| "/".into());
    match path.as_str() {
        LOGIN_PAGE => components::chat_input::mount(&document, client, notify)?,
        SURVEY_PAGE => components::survey::mount(&document, client, notify)?,
        SIGNUP_PAGE => components::signup::mount(&document, client, notify)?,
        // Landing (and anything unknown) redirects to the login screen.
        _ => dom_utils::navigate_to(LOGIN_PAGE),
    }

    Ok(())
}
