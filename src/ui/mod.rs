mod button;
mod strings;

pub use button::Button;
pub use strings::{Strings, strings};

use crate::application::Session;
use crate::input::Action;
use macroquad::prelude::{screen_height, screen_width};

pub const SIDEBAR_WIDTH: f32 = 280.0;
pub const PAD: f32 = 12.0;
pub const GAP: f32 = 4.0;
pub const LINE_HEIGHT: f32 = 22.0;
pub const BUTTON_HEIGHT: f32 = 26.0;
pub const PRESET_BUTTON_HEIGHT: f32 = 24.0;

/// Vertical positions of the sidebar sections
pub const GENERATION_Y: f32 = 34.0;
pub const CONTROL_BUTTONS_Y: f32 = 48.0;
pub const PRESETS_LABEL_Y: f32 = 100.0;
pub const PRESET_BUTTONS_Y: f32 = 110.0;

/// Width of the grid area left of the sidebar
pub fn content_width() -> f32 {
    (screen_width() - SIDEBAR_WIDTH).max(80.0)
}

pub fn content_height() -> f32 {
    screen_height().max(60.0)
}

/// Left edge of the sidebar contents
pub fn sidebar_x() -> f32 {
    content_width() + PAD
}

fn inner_width() -> f32 {
    SIDEBAR_WIDTH - 2.0 * PAD
}

/// Y coordinate just below the last preset button
pub fn help_y() -> f32 {
    PRESET_BUTTONS_Y + 7.0 * (PRESET_BUTTON_HEIGHT + GAP) + PAD
}

/// Sidebar buttons for the current session state and language
pub fn create_buttons(session: &Session) -> Vec<Button> {
    let text = strings(session.language());
    let sx = sidebar_x();
    let width = inner_width();

    let run_label = if session.is_running() { text.pause } else { text.start };
    let controls = [
        (run_label, Action::ToggleRunning),
        (text.step, Action::Step),
        (text.clear, Action::Clear),
        (text.random, Action::Randomize),
    ];
    let control_width = (width - 3.0 * GAP) / controls.len() as f32;

    let control_buttons = controls.into_iter().enumerate().map(|(i, (label, action))| {
        Button::new(
            sx + i as f32 * (control_width + GAP),
            CONTROL_BUTTONS_Y,
            control_width,
            BUTTON_HEIGHT,
            label,
            action,
        )
    });

    let preset_buttons = session.list_presets().into_iter().enumerate().map(|(i, (id, name))| {
        Button::new(
            sx,
            PRESET_BUTTONS_Y + i as f32 * (PRESET_BUTTON_HEIGHT + GAP),
            width,
            PRESET_BUTTON_HEIGHT,
            format!("{}  {}", id, name),
            Action::PlacePreset(id),
        )
    });

    control_buttons.chain(preset_buttons).collect()
}
