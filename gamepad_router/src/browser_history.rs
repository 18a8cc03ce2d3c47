//! `window.history` backed history for the browser build.

use wasm_bindgen::JsValue;

use crate::{error::RouteError, history::History};

/// History mode over the browser's session history.
///
/// Entries are real URL paths (`pushState`), never hash fragments.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    history: web_sys::History,
    location: web_sys::Location,
}

impl BrowserHistory {
    /// Binds to the current window.
    pub fn new() -> Result<Self, RouteError> {
        let window =
            web_sys::window().ok_or_else(|| RouteError::History("window not found".to_owned()))?;
        let history = window.history().map_err(js_error)?;

        Ok(Self {
            history,
            location: window.location(),
        })
    }
}

impl History for BrowserHistory {
    fn location(&self) -> String {
        let pathname = self.location.pathname().unwrap_or_else(|_| "/".to_owned());
        let search = self.location.search().unwrap_or_default();
        let hash = self.location.hash().unwrap_or_default();

        format!("{pathname}{search}{hash}")
    }

    fn push(&mut self, url: &str) -> Result<(), RouteError> {
        self.history
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(js_error)
    }

    fn replace(&mut self, url: &str) -> Result<(), RouteError> {
        self.history
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(js_error)
    }

    fn go(&mut self, delta: i32) -> Result<(), RouteError> {
        self.history.go_with_delta(delta).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> RouteError {
    RouteError::History(format!("{err:?}"))
}
