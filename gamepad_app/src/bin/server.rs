#![allow(missing_docs)]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use gamepad_app::{
        route_table,
        server::{AppState, handle_request},
    };
    use gamepad_router::RouterConfig;
    use hyper::{server::conn::http1, service::service_fn};
    use hyper_util::rt::TokioIo;
    use std::{convert::Infallible, path::PathBuf, sync::Arc};
    use tokio::net::TcpListener;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("GAMEPAD_ADDR").unwrap_or_else(|_| "0.0.0.0:9999".to_owned());
    let static_dir = std::env::var("GAMEPAD_STATIC_DIR").unwrap_or_else(|_| "static".to_owned());

    let state = Arc::new(AppState {
        table: route_table()?,
        config: RouterConfig::from_env(),
        static_dir: PathBuf::from(static_dir),
    });

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, base = %state.config.base(), "server running");

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let state = Arc::clone(&state);

        tokio::task::spawn(async move {
            let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                let state = Arc::clone(&state);
                async move { Ok::<_, Infallible>(handle_request(req.uri().path(), &state).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(%peer, error = ?err, "error serving connection");
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
