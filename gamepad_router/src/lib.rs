//! History-mode routing for the gamepad single-page application.
//!
//! A [`RouteTable`] binds literal paths and names to views; a [`Router`] drives
//! it over a [`History`] backend, applying the deployment [`Base`].

mod base;
mod config;
mod error;
mod history;
mod route;
mod router;

#[cfg(target_arch = "wasm32")]
mod browser_history;

pub use base::Base;
pub use config::{CONFIG_GLOBAL, RouterConfig};
pub use error::RouteError;
pub use history::{History, MemoryHistory};
pub use route::{Route, RouteTable};
pub use router::{RouteState, Router};

#[cfg(target_arch = "wasm32")]
pub use browser_history::BrowserHistory;
