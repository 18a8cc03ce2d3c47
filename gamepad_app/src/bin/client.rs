#![allow(missing_docs)]

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = gamepad_app::client::start() {
            tracing::error!(error = %err, "failed to start client");
        }
    }
}
