//! Router configuration supplied by the build or deployment environment.

use serde::{Deserialize, Serialize};

use crate::{base::Base, error::RouteError};

/// Name of the global the server injects the configuration under.
pub const CONFIG_GLOBAL: &str = "ROUTER_CONFIG";

const DEFAULT_BASE: &str = "/";

/// Deployment settings for the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// URL prefix the application is served under.
    pub base: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_owned(),
        }
    }
}

impl RouterConfig {
    /// Configuration baked in at build time through `BASE_URL`.
    pub fn from_build_env() -> Self {
        Self {
            base: option_env!("BASE_URL").unwrap_or(DEFAULT_BASE).to_owned(),
        }
    }

    /// Runtime `BASE_URL`, falling back to the build-time value.
    pub fn from_env() -> Self {
        match std::env::var("BASE_URL") {
            Ok(base) if !base.trim().is_empty() => Self { base },
            _ => Self::from_build_env(),
        }
    }

    /// Parses the JSON form injected into the page.
    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Normalized base.
    pub fn base(&self) -> Base {
        Base::new(&self.base)
    }

    /// Script tag that exposes this configuration to the client as
    /// `window.ROUTER_CONFIG`.
    pub fn script_tag(&self) -> String {
        // keep "</script>" in a value from closing the tag
        let json = serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c");

        format!(r#"<script id="router-config">window.{CONFIG_GLOBAL} = {json};</script>"#)
    }

    /// Reads `window.ROUTER_CONFIG`, if the server injected one.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Option<Self> {
        use wasm_bindgen::JsValue;

        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;

        if value.is_undefined() || value.is_null() {
            return None;
        }

        let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;

        Self::from_json(&json).ok()
    }
}
