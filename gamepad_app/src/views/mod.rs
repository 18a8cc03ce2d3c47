//! The application's views.

mod cube;
mod gamepad;
mod home;

pub use cube::CubeView;
pub use gamepad::GamepadView;
pub use home::HomeView;

/// A renderable page.
///
/// Views are shared between the server, which renders them into the document
/// shell, and the client, which swaps them into the outlet on navigation.
pub trait View: Send + Sync {
    /// Document title while this view is shown.
    fn title(&self) -> &'static str;

    /// Markup placed inside the outlet.
    fn render(&self) -> String;
}
