//! JavaScript entry points.
//!
//! `start` runs when the module is instantiated and wires the page once the
//! DOM is ready. The other exports are for the page's own scripts:
//! `showNotification`, `currentUser`, `loadUserInfo` and `logout`.
//!
//! Classic (non-module) scripts cannot import from the WASM module, so
//! `start` also installs `showNotification`, `loadUserInfo` and `logout` on
//! `window`, and every successful load sets `window.currentUser`.
//!
//! SYSTEM CONTEXT
//! ==============
//! JS callers cannot hold Rust handles, so the page's `SessionContext` and
//! `PageConfig` live in thread-locals here. Nothing below `page` reads them;
//! they are passed down explicitly.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use crate::config::PageConfig;
use crate::consts::{
    GLOBAL_CURRENT_USER, GLOBAL_LOAD_USER_INFO, GLOBAL_LOGOUT, GLOBAL_SHOW_NOTIFICATION,
};
use crate::dom;
use crate::lifecycle::ReadyState;
use crate::logout::LogoutOutcome;
use crate::session::SessionContext;
use crate::user::UserInfo;

thread_local! {
    static SESSION: SessionContext = SessionContext::new();
    static CONFIG: RefCell<PageConfig> = RefCell::new(PageConfig::default());
}

fn session() -> SessionContext {
    SESSION.with(SessionContext::clone)
}

fn config() -> PageConfig {
    CONFIG.with(|c| c.borrow().clone())
}

/// Install logging, read page config, and wire the page on DOM ready.
///
/// # Errors
///
/// Returns an error when there is no window/document or the ready listener
/// cannot be attached.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let (config, config_error) = match dom::read_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    let level = config.log_level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(e) = config_error {
        log::error!("invalid page config, using defaults: {e}");
    }
    CONFIG.with(|c| *c.borrow_mut() = config);
    install_globals();

    if ReadyState::parse(&document.ready_state()).awaits_dom_content_loaded() {
        let ready = Closure::<dyn FnMut()>::new(on_ready);
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        ready.forget();
    } else {
        on_ready();
    }
    Ok(())
}

fn on_ready() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("page wiring skipped: {e}");
            return;
        }
    };
    let config = config();

    let session = session();
    let load_config = config.clone();
    spawn_local(async move {
        if let Some(user) = dom::load_user_info(&load_config, &session).await {
            publish_current_user(&user);
        }
    });

    let wired = dom::wire_logout_controls(&document, &config);
    log::debug!("wired {wired} logout controls");
}

fn set_global(name: &str, value: &JsValue) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), value) {
        log::warn!("could not set window.{name}: {e:?}");
    }
}

fn install_globals() {
    let show = Closure::<dyn Fn(String, JsValue)>::new(|message: String, is_success: JsValue| {
        show_notification(&message, is_success.as_bool());
    });
    set_global(GLOBAL_SHOW_NOTIFICATION, show.as_ref());
    show.forget();

    let load = Closure::<dyn Fn() -> js_sys::Promise>::new(load_user_info);
    set_global(GLOBAL_LOAD_USER_INFO, load.as_ref());
    load.forget();

    let log_out = Closure::<dyn Fn() -> js_sys::Promise>::new(logout);
    set_global(GLOBAL_LOGOUT, log_out.as_ref());
    log_out.forget();
}

/// Mirror the loaded user onto `window.currentUser` for classic scripts.
fn publish_current_user(user: &UserInfo) {
    set_global(GLOBAL_CURRENT_USER, &to_js(user));
}

fn to_js(user: &UserInfo) -> JsValue {
    let parsed = serde_json::to_string(user)
        .map_err(|e| e.to_string())
        .and_then(|json| js_sys::JSON::parse(&json).map_err(|e| format!("{e:?}")));
    match parsed {
        Ok(value) => value,
        Err(e) => {
            log::error!("could not export user info: {e}");
            JsValue::NULL
        }
    }
}

/// Show a toast. `isSuccess` defaults to `true`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, is_success: Option<bool>) {
    let timings = config().notification;
    if let Err(e) = dom::show_notification(message, is_success.unwrap_or(true), &timings) {
        log::error!("Error showing notification: {e}");
    }
}

/// The last authenticated user as a plain object, or `null`.
#[wasm_bindgen(js_name = currentUser)]
pub fn current_user() -> JsValue {
    session().current_user().map_or(JsValue::NULL, |user| to_js(&user))
}

/// Reload user info. Resolves to the user object, or `null` when signed out
/// or on failure.
#[wasm_bindgen(js_name = loadUserInfo)]
pub fn load_user_info() -> js_sys::Promise {
    let config = config();
    let session = session();
    future_to_promise(async move {
        let Some(user) = dom::load_user_info(&config, &session).await else {
            return Ok(JsValue::NULL);
        };
        publish_current_user(&user);
        Ok(to_js(&user))
    })
}

/// Log out. Resolves to `true` when a reload was scheduled.
#[wasm_bindgen(js_name = logout)]
pub fn logout() -> js_sys::Promise {
    let config = config();
    future_to_promise(async move {
        let outcome = dom::logout(&config).await;
        Ok(JsValue::from_bool(outcome == LogoutOutcome::ReloadScheduled))
    })
}
