//! Errors raised while building or driving a router.

use thiserror::Error;

/// Errors produced by the route table and the router.
///
/// Everything except [`RouteError::UnknownName`] and [`RouteError::History`] is a
/// configuration error: it is raised once, while the table is registered at
/// startup, and the application is expected to treat it as fatal.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Two routes were registered with the same path.
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two routes were registered with the same name.
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// A route path is not a literal absolute path.
    #[error("Invalid route path '{path}': {reason}")]
    InvalidPath {
        /// The offending path as registered.
        path: String,
        /// Why the path was refused.
        reason: &'static str,
    },

    /// A route was registered without a name.
    #[error("Route '{0}' has an empty name")]
    EmptyName(String),

    /// Navigation targeted a name that is not in the table.
    #[error("No route named '{0}'")]
    UnknownName(String),

    /// The history backend refused an operation.
    #[error("History error: {0}")]
    History(String),

    /// Router configuration could not be loaded.
    #[error("Invalid router config: {0}")]
    Config(#[from] serde_json::Error),
}
