use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveUp,
    MoveDown,
    Activate,
    Roll,
    Hold,
    /// Digits 1-9: jump to an entry and confirm it in one stroke.
    QuickPick(usize),
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Up => InputAction::MoveUp,
        KeyCode::Down => InputAction::MoveDown,
        KeyCode::Enter => InputAction::Activate,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char('r') => InputAction::Roll,
        KeyCode::Char('h') => InputAction::Hold,
        KeyCode::Char(digit @ '1'..='9') => InputAction::QuickPick(digit as usize - '1' as usize),
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)),
            InputAction::Roll
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)),
            InputAction::Hold
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Activate
        );
    }

    #[test]
    fn maps_quick_picks() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)),
            InputAction::QuickPick(0)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE)),
            InputAction::QuickPick(8)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE)),
            InputAction::None
        );
    }
}
