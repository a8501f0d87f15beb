//! Application Context
//!
//! Shared state provided via Leptos Context API. The browser URL is the
//! only mutable state the table depends on; it is mirrored into a signal
//! here and handed to everything else as plain values.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use people_query::{QueryParams, Route};

use crate::config::AppConfig;

/// Snapshot of `window.location`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub pathname: String,
    /// Includes the leading `?` when non-empty
    pub search: String,
}

impl Location {
    fn current() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Self::default();
        };
        Self {
            pathname: location.pathname().unwrap_or_default(),
            search: location.search().unwrap_or_default(),
        }
    }
}

/// App-wide config and location, provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    location: RwSignal<Location>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            location: RwSignal::new(Location::current()),
        }
    }

    pub fn base_path(&self) -> String {
        self.config.with_value(|c| c.base_path.clone())
    }

    pub fn people_url(&self) -> String {
        self.config.with_value(|c| c.people_url.clone())
    }

    /// Current route (tracked)
    pub fn route(&self) -> Route {
        let base = self.base_path();
        self.location.with(|loc| Route::parse(&loc.pathname, &base))
    }

    /// Current query parameters (tracked)
    pub fn params(&self) -> QueryParams {
        self.location.with(|loc| QueryParams::parse(&loc.search))
    }

    /// Navigate within the app, adding a history entry
    pub fn navigate(&self, href: &str) {
        self.change_url(href, false);
    }

    /// Navigate within the app, replacing the current history entry
    pub fn replace(&self, href: &str) {
        self.change_url(href, true);
    }

    fn change_url(&self, href: &str, replace: bool) {
        let Some(window) = web_sys::window() else { return };
        let history = match window.history() {
            Ok(history) => history,
            Err(e) => {
                log::error!("History API unavailable: {:?}", e);
                return;
            }
        };

        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(href))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(href))
        };
        if let Err(e) = result {
            log::error!("Failed to navigate to {}: {:?}", href, e);
            return;
        }

        log::debug!("navigated to {}", href);
        self.location.set(Location::current());
    }

    /// Keep the location signal in sync with back/forward buttons
    pub fn bind_popstate(&self) {
        let Some(window) = web_sys::window() else { return };
        let location = self.location;

        let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
            location.set(Location::current());
        });
        let _ = window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        on_popstate.forget();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
