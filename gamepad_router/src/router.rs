//! The router instance: a route table bound to a history backend.

use crate::{
    base::Base,
    error::RouteError,
    history::History,
    route::{Route, RouteTable},
};

/// What the router currently shows.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteState<'a, V> {
    /// The current location matches no route; the host decides what to show.
    Unresolved,
    /// The current location is bound to this route.
    Resolved(&'a Route<V>),
}

/// History-mode router over a fixed [`RouteTable`].
///
/// There is no global instance: the application builds one at startup and
/// passes it to whatever needs to navigate.
#[derive(Debug)]
pub struct Router<V, H> {
    table: RouteTable<V>,
    history: H,
    base: Base,
    current_path: String,
    current: Option<usize>,
}

impl<V, H: History> Router<V, H> {
    /// Binds `table` to `history` and resolves the history's current location.
    pub fn new(table: RouteTable<V>, history: H, base: Base) -> Self {
        let mut router = Self {
            table,
            history,
            base,
            current_path: String::from("/"),
            current: None,
        };

        router.sync();

        router
    }

    /// Resolves `path` against the table without navigating.
    pub fn resolve(&self, path: &str) -> Option<&Route<V>> {
        self.table.resolve(path)
    }

    /// Pushes the route named `name` as a new history entry.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownName`] if no route has that name, or the history
    /// backend's error if the push fails.
    pub fn navigate(&mut self, name: &str) -> Result<&Route<V>, RouteError> {
        let path = self.path_for(name)?;
        let url = self.base.href(&path);

        tracing::info!(name, url = url.as_str(), "navigate");
        self.history.push(&url)?;
        self.set_location(path);

        self.current_route()
            .ok_or_else(|| RouteError::UnknownName(name.to_owned()))
    }

    /// Like [`Router::navigate`], but overwrites the current history entry.
    pub fn replace(&mut self, name: &str) -> Result<&Route<V>, RouteError> {
        let path = self.path_for(name)?;
        let url = self.base.href(&path);

        tracing::info!(name, url = url.as_str(), "replace");
        self.history.replace(&url)?;
        self.set_location(path);

        self.current_route()
            .ok_or_else(|| RouteError::UnknownName(name.to_owned()))
    }

    /// Pushes an arbitrary path, relative to the base.
    ///
    /// Paths that match no route are still pushed and leave the router
    /// [`RouteState::Unresolved`].
    pub fn push(&mut self, path: &str) -> Result<RouteState<'_, V>, RouteError> {
        let url = self.base.href(path);

        tracing::info!(url = url.as_str(), "push");
        self.history.push(&url)?;

        let path = self.base.strip(&url);
        self.set_location(path);

        Ok(self.state())
    }

    /// Moves through history and re-resolves.
    pub fn go(&mut self, delta: i32) -> Result<RouteState<'_, V>, RouteError> {
        self.history.go(delta)?;
        self.sync();

        Ok(self.state())
    }

    /// Goes one entry back.
    pub fn back(&mut self) -> Result<RouteState<'_, V>, RouteError> {
        self.go(-1)
    }

    /// Goes one entry forward.
    pub fn forward(&mut self) -> Result<RouteState<'_, V>, RouteError> {
        self.go(1)
    }

    /// Re-reads the history location and resolves it.
    ///
    /// Call this when the browser reports a `popstate`.
    pub fn sync(&mut self) -> RouteState<'_, V> {
        let path = self.base.strip(&self.history.location());
        self.set_location(path);

        self.state()
    }

    /// URL a link to the route named `name` should carry.
    pub fn href(&self, name: &str) -> Result<String, RouteError> {
        let path = self.path_for(name)?;

        Ok(self.base.href(&path))
    }

    /// Current resolution state.
    pub fn state(&self) -> RouteState<'_, V> {
        match self.current_route() {
            Some(route) => RouteState::Resolved(route),
            None => RouteState::Unresolved,
        }
    }

    /// Route bound to the current location, if any.
    pub fn current_route(&self) -> Option<&Route<V>> {
        self.current.and_then(|index| self.table.get(index))
    }

    /// Current location with the base removed.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// The history backend.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// The deployment base.
    pub fn base(&self) -> &Base {
        &self.base
    }

    fn path_for(&self, name: &str) -> Result<String, RouteError> {
        self.table
            .by_name(name)
            .map(|route| route.path().to_owned())
            .ok_or_else(|| RouteError::UnknownName(name.to_owned()))
    }

    fn set_location(&mut self, path: String) {
        self.current = self.table.position(&path);

        if self.current.is_none() {
            tracing::warn!(path = path.as_str(), "no route matches location");
        }

        self.current_path = path;
    }
}
