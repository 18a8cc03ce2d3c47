use super::View;

/// The old landing page, still reachable under `/home`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HomeView;

impl View for HomeView {
    fn title(&self) -> &'static str {
        "Home"
    }

    fn render(&self) -> String {
        r#"<section class="home"><h1>Home</h1><p>Connect a controller and open the gamepad view to see its state.</p></section>"#
            .to_owned()
    }
}
