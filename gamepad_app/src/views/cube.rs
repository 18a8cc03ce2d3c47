use super::View;

const FACES: [&str; 6] = ["front", "back", "left", "right", "top", "bottom"];

/// A cube the gamepad sticks rotate.
#[derive(Debug, Default, Clone, Copy)]
pub struct CubeView;

impl View for CubeView {
    fn title(&self) -> &'static str {
        "Cube"
    }

    fn render(&self) -> String {
        let faces: String = FACES
            .iter()
            .map(|face| format!(r#"<div class="cube-face cube-face-{face}"></div>"#))
            .collect();

        format!(
            r#"<section class="cube-scene"><div class="cube" style="transform: rotateX(0deg) rotateY(0deg)">{faces}</div></section>"#
        )
    }
}
