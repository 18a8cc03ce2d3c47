//! Route records and the immutable table that resolves paths to views.
//!
//! A [`RouteTable`] is built once from an ordered list of [`Route`]s and never
//! changes afterwards. Paths are literal: `/cube` only matches `/cube`, the query
//! string and hash fragment of the incoming location are ignored.

use matchit::Router;
use std::collections::HashMap;
use std::fmt;

use crate::error::RouteError;

/// A binding between a literal path, a symbolic name, and a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    name: String,
    view: V,
}

impl<V> Route<V> {
    /// Creates a route binding `path` and `name` to `view`.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// Literal path this route answers to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Symbolic name used for programmatic navigation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// View rendered when this route is active.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Ordered, immutable set of routes.
///
/// The `Vec` keeps table order; the `matchit` index and the name map point into
/// it so both lookups avoid scanning.
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    by_path: Router<usize>,
    by_name: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Validates `routes` and builds the table.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if two routes share a path or a name, if a
    /// path is not a literal absolute path, or if a name is empty.
    pub fn register(routes: impl IntoIterator<Item = Route<V>>) -> Result<Self, RouteError> {
        let routes: Vec<Route<V>> = routes.into_iter().collect();
        let mut by_path = Router::new();
        let mut by_name = HashMap::with_capacity(routes.len());
        let mut seen_paths: HashMap<&str, usize> = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            validate_path(&route.path)?;

            if route.name.is_empty() {
                return Err(RouteError::EmptyName(route.path.clone()));
            }

            if seen_paths.insert(route.path.as_str(), index).is_some() {
                return Err(RouteError::DuplicatePath(route.path.clone()));
            }

            if by_name.insert(route.name.clone(), index).is_some() {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }

            by_path
                .insert(route.path.as_str(), index)
                .map_err(|_| RouteError::InvalidPath {
                    path: route.path.clone(),
                    reason: "conflicts with another route",
                })?;
        }

        tracing::debug!(routes = routes.len(), "route table registered");

        Ok(Self {
            routes,
            by_path,
            by_name,
        })
    }

    /// Finds the route bound to `location`.
    ///
    /// Anything after `?` or `#` is ignored. Returns `None` when no route
    /// matches; what to show in that case is up to the host.
    pub fn resolve(&self, location: &str) -> Option<&Route<V>> {
        self.position(location).map(|index| &self.routes[index])
    }

    pub(crate) fn position(&self, location: &str) -> Option<usize> {
        let path = strip_query_and_hash(location);

        match self.by_path.at(path) {
            Ok(matched) => {
                let index = *matched.value;
                tracing::debug!(path, name = self.routes[index].name(), "route resolved");
                Some(index)
            }
            Err(_) => {
                tracing::debug!(path, "no route matches");
                None
            }
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Route<V>> {
        self.routes.get(index)
    }

    /// Finds the route registered under `name`.
    pub fn by_name(&self, name: &str) -> Option<&Route<V>> {
        self.by_name.get(name).map(|index| &self.routes[*index])
    }

    /// Routes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field(
                "routes",
                &self
                    .routes
                    .iter()
                    .map(|route| (route.path(), route.name()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn validate_path(path: &str) -> Result<(), RouteError> {
    if !path.starts_with('/') {
        return Err(RouteError::InvalidPath {
            path: path.to_owned(),
            reason: "must start with '/'",
        });
    }

    // matchit would read these as parameters or catch-alls
    if path.contains(['{', '}', '*']) {
        return Err(RouteError::InvalidPath {
            path: path.to_owned(),
            reason: "only literal paths are supported",
        });
    }

    if path.contains(['?', '#']) {
        return Err(RouteError::InvalidPath {
            path: path.to_owned(),
            reason: "must not carry a query or fragment",
        });
    }

    Ok(())
}

pub(crate) fn strip_query_and_hash(location: &str) -> &str {
    location
        .split(['?', '#'])
        .next()
        .unwrap_or(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::register([
            Route::new("/", "home", "gamepad"),
            Route::new("/home", "homefake", "home"),
            Route::new("/cube", "cube", "cube"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_registered_paths() {
        let table = table();

        assert_eq!(table.resolve("/").map(Route::view), Some(&"gamepad"));
        assert_eq!(table.resolve("/home").map(Route::view), Some(&"home"));
        assert_eq!(table.resolve("/cube").map(Route::view), Some(&"cube"));
    }

    #[test]
    fn test_resolve_is_literal() {
        let table = table();

        assert!(table.resolve("/cube/").is_none());
        assert!(table.resolve("/Cube").is_none());
        assert!(table.resolve("/cube/faces").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn test_resolve_ignores_query_and_hash() {
        let table = table();

        assert_eq!(table.resolve("/cube?spin=1").map(Route::name), Some("cube"));
        assert_eq!(table.resolve("/home#top").map(Route::name), Some("homefake"));
        assert_eq!(table.resolve("/?a=b#c").map(Route::name), Some("home"));
    }

    #[test]
    fn test_by_name() {
        let table = table();

        assert_eq!(table.by_name("cube").map(Route::path), Some("/cube"));
        assert_eq!(table.by_name("homefake").map(Route::path), Some("/home"));
        assert!(table.by_name("missing").is_none());
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let result = RouteTable::register([
            Route::new("/cube", "cube", 1),
            Route::new("/cube", "other", 2),
        ]);

        assert!(matches!(result, Err(RouteError::DuplicatePath(path)) if path == "/cube"));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let result = RouteTable::register([
            Route::new("/a", "same", 1),
            Route::new("/b", "same", 2),
        ]);

        assert!(matches!(result, Err(RouteError::DuplicateName(name)) if name == "same"));
    }

    #[test]
    fn test_invalid_paths_are_rejected() {
        for path in ["cube", "/users/{id}", "/files/{*rest}", "/cube?x=1"] {
            let result = RouteTable::register([Route::new(path, "r", ())]);
            assert!(
                matches!(result, Err(RouteError::InvalidPath { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_trailing_slash_paths_are_distinct() {
        let table = RouteTable::register([
            Route::new("/cube", "cube", 1),
            Route::new("/cube/", "cube-slash", 2),
        ])
        .unwrap();

        assert_eq!(table.resolve("/cube").map(Route::view), Some(&1));
        assert_eq!(table.resolve("/cube/").map(Route::view), Some(&2));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = RouteTable::register([Route::new("/", "", ())]);

        assert!(matches!(result, Err(RouteError::EmptyName(path)) if path == "/"));
    }

    #[test]
    fn test_table_order_is_kept() {
        let table = table();
        let names: Vec<&str> = table.iter().map(Route::name).collect();

        assert_eq!(names, ["home", "homefake", "cube"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_strip_query_and_hash() {
        assert_eq!(strip_query_and_hash("/cube?x#y"), "/cube");
        assert_eq!(strip_query_and_hash("/cube#y?x"), "/cube");
        assert_eq!(strip_query_and_hash("/cube"), "/cube");
        assert_eq!(strip_query_and_hash(""), "");
    }
}
