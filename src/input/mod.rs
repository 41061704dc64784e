mod brush;

pub use brush::Brush;

use crate::application::{Session, Viewport};
use macroquad::prelude::*;

/// A user command, from a key or a sidebar button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
    PlacePreset(u8),
    ToggleLanguage,
}

/// Apply one action to the session
pub fn apply(session: &mut Session, action: Action) {
    match action {
        Action::ToggleRunning => {
            session.toggle_running();
        }
        Action::Step => {
            session.step_once();
        }
        Action::Clear => session.clear(),
        Action::Randomize => session.randomize(),
        Action::PlacePreset(id) => {
            if let Err(err) = session.place_preset(id) {
                tracing::warn!(%err, "preset command failed");
            }
        }
        Action::ToggleLanguage => {
            session.toggle_language();
        }
    }
}

const KEY_ACTIONS: [(KeyCode, Action); 12] = [
    (KeyCode::R, Action::ToggleRunning),
    (KeyCode::Space, Action::Step),
    (KeyCode::C, Action::Clear),
    (KeyCode::N, Action::Randomize),
    (KeyCode::L, Action::ToggleLanguage),
    (KeyCode::Key1, Action::PlacePreset(1)),
    (KeyCode::Key2, Action::PlacePreset(2)),
    (KeyCode::Key3, Action::PlacePreset(3)),
    (KeyCode::Key4, Action::PlacePreset(4)),
    (KeyCode::Key5, Action::PlacePreset(5)),
    (KeyCode::Key6, Action::PlacePreset(6)),
    (KeyCode::Key7, Action::PlacePreset(7)),
];

/// Actions for keys pressed this frame
pub fn pressed_actions() -> Vec<Action> {
    KEY_ACTIONS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
        .collect()
}

/// Actions for sidebar buttons clicked this frame
pub fn clicked_actions(buttons: &[crate::ui::Button], mouse_pos: (f32, f32)) -> Vec<Action> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(|btn| btn.action())
        .collect()
}

/// Feed the left mouse button to the brush
pub fn handle_mouse_paint(session: &mut Session, brush: &mut Brush, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if is_mouse_button_released(MouseButton::Left) {
        brush.release();
        return;
    }

    let Some(cell) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    let result = if is_mouse_button_pressed(MouseButton::Left) {
        brush.press(session, cell, is_mouse_button_down(MouseButton::Right))
    } else if is_mouse_button_down(MouseButton::Left) {
        brush.drag(session, cell)
    } else {
        Ok(())
    };

    if let Err(err) = result {
        tracing::warn!(%err, "paint rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RunState;

    #[test]
    fn test_apply_run_and_step() {
        let mut session = Session::new(10, 10).unwrap();
        apply(&mut session, Action::Step);
        assert_eq!(session.generation(), 1);

        apply(&mut session, Action::ToggleRunning);
        assert_eq!(session.run_state(), RunState::Running);
        apply(&mut session, Action::Step);
        assert_eq!(session.generation(), 1);

        apply(&mut session, Action::Clear);
        assert_eq!(session.run_state(), RunState::Idle);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_apply_preset_and_bad_id() {
        let mut session = Session::new(20, 20).unwrap();
        apply(&mut session, Action::PlacePreset(2));
        assert_eq!(session.grid().population(), 3);

        apply(&mut session, Action::PlacePreset(42));
        assert_eq!(session.grid().population(), 3);
    }

    #[test]
    fn test_key_table_covers_all_presets() {
        let ids: Vec<u8> = KEY_ACTIONS
            .iter()
            .filter_map(|(_, action)| match action {
                Action::PlacePreset(id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }
}
