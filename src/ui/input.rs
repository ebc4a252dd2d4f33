//! Keyboard handling - maps key events to app actions

use crate::ui::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User-initiated actions the event loop executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextStep,
    PrevStep,
    NextSkill,
    PrevSkill,
    /// Jump straight to a step by id (number keys; 0 means step 10).
    GotoStep(u32),
    /// Cycle focus between the step list, skill list, and tool input.
    CycleFocus,
    /// Commit tool editing.
    Input(char),
    Backspace,
    Submit,
    LeaveInput,
}

/// Translate a key event given the focused pane. Returns `None` for
/// keys with no binding.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Ctrl-C always quits, even while typing.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if focus == Focus::CommitInput {
        return match key.code {
            KeyCode::Esc => Some(Action::LeaveInput),
            KeyCode::Tab => Some(Action::CycleFocus),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::CycleFocus),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevStep),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextStep),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevSkill),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::NextSkill),
        KeyCode::Char('0') => Some(Action::GotoStep(10)),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Some(Action::GotoStep(c.to_digit(10).unwrap_or(1)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Right), Focus::Steps), Some(Action::NextStep));
        assert_eq!(map_key(key(KeyCode::Up), Focus::Skills), Some(Action::PrevSkill));
        assert_eq!(map_key(key(KeyCode::Char('q')), Focus::Steps), Some(Action::Quit));
        assert_eq!(
            map_key(key(KeyCode::Char('9')), Focus::Steps),
            Some(Action::GotoStep(9))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('0')), Focus::Steps),
            Some(Action::GotoStep(10))
        );
    }

    #[test]
    fn test_typing_goes_to_the_input_when_focused() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), Focus::CommitInput),
            Some(Action::Input('q'))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::CommitInput),
            Some(Action::Submit)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), Focus::CommitInput),
            Some(Action::LeaveInput)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Focus::CommitInput), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, Focus::Steps), Some(Action::Quit));
    }
}
