//! Request handling for the native server.
//!
//! A history-mode SPA needs every deep link to come back with the document
//! shell, so anything that is not a static asset is resolved against the route
//! table and answered with the rendered page.

use bytes::Bytes;
use gamepad_router::{RouteTable, RouterConfig};
use http_body_util::{BodyExt, Full};
use hyper::{
    Response, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use std::path::{Component, Path, PathBuf};

use crate::{AppView, shell::render_document};

/// Response body used by every handler.
pub type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// Prefix, relative to the base, under which static files are served.
pub const STATIC_PREFIX: &str = "/static/";

/// Everything a request handler needs, shared across connections.
#[derive(Debug)]
pub struct AppState {
    /// The application's routes.
    pub table: RouteTable<AppView>,
    /// Deployment configuration, also injected into every page.
    pub config: RouterConfig,
    /// Directory static files are read from.
    pub static_dir: PathBuf,
}

fn full<T: Into<Bytes>>(chunk: T) -> BoxBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

fn respond(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<BoxBody> {
    let mut response = Response::new(full(body));

    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

    response
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

async fn serve_static(static_dir: &Path, file: &str) -> Response<BoxBody> {
    // only plain relative names; an absolute path would replace static_dir in join()
    let relative = !file.is_empty()
        && !file.starts_with(['/', '\\'])
        && Path::new(file)
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

    if !relative {
        return respond(StatusCode::BAD_REQUEST, "text/plain", "Invalid path");
    }

    let file_path = static_dir.join(file);

    match tokio::fs::read(&file_path).await {
        Ok(content) => respond(StatusCode::OK, content_type(&file_path), content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            respond(StatusCode::NOT_FOUND, "text/plain", "File not found")
        }
        Err(err) => {
            tracing::error!(path = %file_path.display(), error = %err, "failed to read static file");
            respond(StatusCode::INTERNAL_SERVER_ERROR, "text/plain", "Error reading file")
        }
    }
}

/// Answers a request for the URI path `location`.
pub async fn handle_request(location: &str, state: &AppState) -> Response<BoxBody> {
    let path = state.config.base().strip(location);

    if let Some(file) = path.strip_prefix(STATIC_PREFIX) {
        return serve_static(&state.static_dir, file).await;
    }

    let page = render_document(&state.table, &state.config, location);
    let status = if page.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    tracing::debug!(location, status = status.as_u16(), "page rendered");

    respond(status, "text/html; charset=utf-8", page.html)
}
