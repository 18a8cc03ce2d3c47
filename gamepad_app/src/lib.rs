//! The gamepad single-page application: its views, its route table, and the
//! page shell shared by the server and the browser client.

use gamepad_router::{History, Route, RouteError, RouteTable, Router, RouterConfig};

pub mod shell;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

use views::{CubeView, GamepadView, HomeView, View};

/// View reference held by each route.
pub type AppView = Box<dyn View>;

/// The application's routes, in table order.
pub fn routes() -> Vec<Route<AppView>> {
    vec![
        Route::new("/", "home", Box::new(GamepadView) as AppView),
        Route::new("/home", "homefake", Box::new(HomeView) as AppView),
        Route::new("/cube", "cube", Box::new(CubeView) as AppView),
    ]
}

/// Validated route table.
pub fn route_table() -> Result<RouteTable<AppView>, RouteError> {
    RouteTable::register(routes())
}

/// Builds the application router over `history`.
///
/// This is the single place a router is created; callers hold on to the result
/// and pass it to whatever needs to navigate.
pub fn build_router<H: History>(
    config: &RouterConfig,
    history: H,
) -> Result<Router<AppView, H>, RouteError> {
    let router = Router::new(route_table()?, history, config.base());

    tracing::info!(
        base = %router.base(),
        path = router.current_path(),
        "router initialized"
    );

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamepad_router::{MemoryHistory, RouteState};

    #[test]
    fn test_route_table_matches_views() {
        let table = route_table().unwrap();

        let titles: Vec<(&str, &str, &str)> = table
            .iter()
            .map(|route| (route.path(), route.name(), route.view().title()))
            .collect();

        assert_eq!(
            titles,
            [
                ("/", "home", "Gamepad"),
                ("/home", "homefake", "Home"),
                ("/cube", "cube", "Cube"),
            ]
        );
    }

    #[test]
    fn test_build_router_resolves_initial_location() {
        let config = RouterConfig::default();
        let router = build_router(&config, MemoryHistory::new("/cube")).unwrap();

        assert!(matches!(
            router.state(),
            RouteState::Resolved(route) if route.view().title() == "Cube"
        ));
    }

    #[test]
    fn test_navigate_cube() {
        let config = RouterConfig::default();
        let mut router = build_router(&config, MemoryHistory::default()).unwrap();

        assert_eq!(
            router.current_route().map(|route| route.view().title()),
            Some("Gamepad")
        );

        router.navigate("cube").unwrap();

        assert_eq!(router.history().location(), "/cube");
        assert_eq!(
            router
                .resolve(router.current_path())
                .map(|route| route.view().title()),
            Some("Cube")
        );
    }
}
