//! HTML document shell around the routed outlet.
//!
//! The server renders the full document; the client only re-renders the outlet
//! and the title, so both go through the helpers here.

use gamepad_router::{Base, Route, RouteTable, RouterConfig};

use crate::AppView;

/// Id of the element the resolved view is rendered into.
pub const OUTLET_ID: &str = "app";

/// A rendered document and whether its location resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// `false` when no route matched the location.
    pub found: bool,
    /// Complete HTML document.
    pub html: String,
}

/// Title and outlet markup for a resolved route, or for the not-found case.
pub fn render_outlet(route: Option<&Route<AppView>>, path: &str) -> (String, String) {
    match route {
        Some(route) => (route.view().title().to_owned(), route.view().render()),
        None => (
            "Not found".to_owned(),
            format!(
                r#"<section class="not-found"><h1>Not found</h1><p>Nothing lives at <code>{}</code>.</p></section>"#,
                escape_html(path)
            ),
        ),
    }
}

/// Navigation links for every route, in table order.
///
/// Links carry the route name in `data-route` so the client can navigate by
/// name instead of reloading.
pub fn render_nav(table: &RouteTable<AppView>, base: &Base) -> String {
    let links: String = table
        .iter()
        .map(|route| {
            format!(
                r#"<a href="{}" data-route="{}">{}</a>"#,
                base.href(route.path()),
                route.name(),
                route.view().title()
            )
        })
        .collect();

    format!(r#"<nav class="routes">{links}</nav>"#)
}

/// Renders the whole document for a browser `location`.
pub fn render_document(
    table: &RouteTable<AppView>,
    config: &RouterConfig,
    location: &str,
) -> Page {
    let base = config.base();
    let path = base.strip(location);
    let route = table.resolve(&path);

    if route.is_none() {
        tracing::warn!(location, "rendering not-found page");
    }

    let (title, outlet) = render_outlet(route, &path);
    let nav = render_nav(table, &base);
    let script = config.script_tag();
    let stylesheet = base.href("/static/style.css");
    let client = base.href("/static/client.js");

    let html = format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>{title}</title><link rel="stylesheet" href="{stylesheet}">{script}</head><body>{nav}<main id="{OUTLET_ID}">{outlet}</main><script type="module" src="{client}"></script></body></html>"#
    );

    Page {
        found: route.is_some(),
        html,
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_table;

    #[test]
    fn test_render_document_for_each_route() {
        let table = route_table().unwrap();
        let config = RouterConfig::default();

        let page = render_document(&table, &config, "/");
        assert!(page.found);
        assert!(page.html.contains("<title>Gamepad</title>"));
        assert!(page.html.contains(r#"<section class="gamepad">"#));

        let page = render_document(&table, &config, "/home");
        assert!(page.html.contains("<title>Home</title>"));

        let page = render_document(&table, &config, "/cube?spin=1");
        assert!(page.found);
        assert!(page.html.contains(r#"<div class="cube""#));
    }

    #[test]
    fn test_render_document_not_found() {
        let table = route_table().unwrap();
        let page = render_document(&table, &RouterConfig::default(), "/<script>");

        assert!(!page.found);
        assert!(page.html.contains("<title>Not found</title>"));
        assert!(page.html.contains("<code>/&lt;script&gt;</code>"));
    }

    #[test]
    fn test_render_document_under_base() {
        let table = route_table().unwrap();
        let config = RouterConfig {
            base: "/app/".to_owned(),
        };

        let page = render_document(&table, &config, "/app/cube");
        assert!(page.found);
        assert!(page.html.contains(r#"<a href="/app/cube" data-route="cube">Cube</a>"#));
        assert!(page.html.contains(r#"<a href="/app/" data-route="home">Gamepad</a>"#));
        assert!(page.html.contains(r#"src="/app/static/client.js""#));
        assert!(page.html.contains(r#"window.ROUTER_CONFIG = {"base":"/app/"}"#));
    }
}
