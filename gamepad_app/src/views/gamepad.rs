use super::View;

const BUTTONS: [&str; 4] = ["A", "B", "X", "Y"];

/// Landing view: live gamepad state.
#[derive(Debug, Default, Clone, Copy)]
pub struct GamepadView;

impl View for GamepadView {
    fn title(&self) -> &'static str {
        "Gamepad"
    }

    fn render(&self) -> String {
        let buttons: String = BUTTONS
            .iter()
            .map(|label| {
                format!(r#"<span class="gamepad-button" data-button="{label}">{label}</span>"#)
            })
            .collect();

        format!(
            r#"<section class="gamepad"><h1>Gamepad</h1><p class="gamepad-status">Press any button on a connected controller.</p><div class="gamepad-buttons">{buttons}</div><div class="gamepad-axes"><span data-axis="0">0.00</span><span data-axis="1">0.00</span></div></section>"#
        )
    }
}
