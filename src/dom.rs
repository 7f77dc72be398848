//! `web-sys` bindings for the page: element lookup, the DOM-backed profile
//! surface, reload scheduling, logout wiring and toast mounting.
//!
//! Only compiled with the `browser` feature. Everything here is a thin
//! adapter; the decisions live in `loader`, `logout` and `notification`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement};

use crate::api;
use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::{ConfigError, DomError};
use crate::loader::load_with;
use crate::logout::{Cancelable, LogoutOutcome, Navigator, begin_logout, logout_with};
use crate::notification::{Notification, NotificationTimings, Phase, Tone};
use crate::present::ProfileSurface;
use crate::session::SessionContext;
use crate::user::UserInfo;

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// The page's document.
///
/// # Errors
///
/// Returns an error outside a window context (e.g. in a worker).
pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// All elements matching `selector`. An invalid selector matches nothing.
#[must_use]
pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect(),
        Err(e) => {
            log::warn!("invalid selector {selector:?}: {e:?}");
            Vec::new()
        }
    }
}

/// Page config from the `#userbar-config` JSON element, or the defaults.
///
/// # Errors
///
/// Returns an error if the element exists but holds invalid config.
pub fn read_config(document: &Document) -> Result<PageConfig, ConfigError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => PageConfig::from_json(&json),
        None => Ok(PageConfig::default()),
    }
}

// =============================================================
// User info
// =============================================================

/// Name and avatar elements found by selector at write time.
pub struct DomProfile {
    document: Document,
    name_selector: String,
    avatar_selector: String,
}

impl DomProfile {
    #[must_use]
    pub fn new(document: Document, config: &PageConfig) -> Self {
        Self {
            document,
            name_selector: config.user_name_selector.clone(),
            avatar_selector: config.user_avatar_selector.clone(),
        }
    }
}

impl ProfileSurface for DomProfile {
    fn set_user_names(&mut self, text: &str) -> usize {
        let elements = select_all(&self.document, &self.name_selector);
        for el in &elements {
            el.set_text_content(Some(text));
        }
        elements.len()
    }

    fn set_user_avatars(&mut self, src: &str) -> usize {
        let mut written = 0;
        for el in select_all(&self.document, &self.avatar_selector) {
            match el.set_attribute("src", src) {
                Ok(()) => written += 1,
                Err(e) => log::warn!("could not set avatar src: {e:?}"),
            }
        }
        written
    }
}

/// Fetch the user, then record and show them. Failures are logged and
/// yield `None`.
pub async fn load_user_info(config: &PageConfig, session: &SessionContext) -> Option<UserInfo> {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Error loading user info: {e}");
            return None;
        }
    };
    let mut surface = DomProfile::new(document, config);
    let endpoint = config.user_endpoint.as_str();
    load_with(|| api::fetch_user_info(endpoint), session, &mut surface).await
}

// =============================================================
// Logout
// =============================================================

impl Cancelable for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// Reloads `window.location` on a timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn schedule_reload(&self, delay_ms: u32) {
        Timeout::new(delay_ms, || {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().reload() {
                log::error!("page reload failed: {e:?}");
            }
        })
        .forget();
    }
}

/// Run one logout without a triggering click.
pub async fn logout(config: &PageConfig) -> LogoutOutcome {
    let endpoint = config.logout_endpoint.as_str();
    logout_with(|| api::post_logout(endpoint), &BrowserNavigator, config.reload_delay_ms).await
}

/// Attach an independent click listener to every logout control. Returns
/// how many were wired.
pub fn wire_logout_controls(document: &Document, config: &PageConfig) -> usize {
    let mut wired = 0;
    for control in select_all(document, &config.logout_selector) {
        let endpoint = config.logout_endpoint.clone();
        let delay_ms = config.reload_delay_ms;
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let endpoint = endpoint.clone();
            let pending = begin_logout(
                &event,
                move || async move { api::post_logout(&endpoint).await },
                BrowserNavigator,
                delay_ms,
            );
            wasm_bindgen_futures::spawn_local(async move {
                pending.await;
            });
        });
        match control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            Ok(()) => {
                on_click.forget();
                wired += 1;
            }
            Err(e) => log::warn!("could not wire logout control: {e:?}"),
        }
    }
    wired
}

// =============================================================
// Notifications
// =============================================================

/// Append a toast to `<body>` and schedule its timeline.
///
/// # Errors
///
/// Returns an error if the document, its body, or the new element is
/// unavailable.
pub fn show_notification(
    message: &str,
    is_success: bool,
    timings: &NotificationTimings,
) -> Result<(), DomError> {
    let document = document()?;
    let body = document.body().ok_or(DomError::NoBody)?;
    let toast = Notification::new(message, Tone::from_success(is_success));

    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::Js("created div is not an HtmlElement".to_owned()))?;
    element.style().set_css_text(&toast.css_text(timings));
    element.set_text_content(Some(toast.message()));
    body.append_child(&element)?;

    let toast = Rc::new(RefCell::new(toast));
    for (at_ms, phase) in timings.schedule() {
        let element = element.clone();
        let toast = Rc::clone(&toast);
        Timeout::new(at_ms, move || step_toast(&element, &toast, phase)).forget();
    }
    Ok(())
}

fn step_toast(element: &HtmlElement, toast: &RefCell<Notification>, phase: Phase) {
    if !toast.borrow_mut().advance_to(phase) {
        return;
    }
    if phase == Phase::Removed {
        // Already detached by someone else is fine.
        if element.parent_node().is_some() {
            element.remove();
        }
        return;
    }
    let pose = phase.pose();
    let style = element.style();
    if let Err(e) = style
        .set_property("opacity", pose.opacity)
        .and_then(|()| style.set_property("transform", pose.transform))
    {
        log::warn!("notification style update failed: {e:?}");
    }
}
