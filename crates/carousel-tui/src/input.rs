use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PreviousPage,     // drag one page to the left
    NextPage,         // drag one page to the right
    Tap,
    ToggleAutoScroll, // Space: pause/resume the timer
    Faster,
    Slower,
    RestartAutoScroll, // resume from the first page
    Shuffle,
    HideIndicator,
    Hide,
    None,
}

/// Seconds added or removed by Faster/Slower
pub const DURATION_STEP_SECS: f64 = 0.5;

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') => Action::PreviousPage,
        KeyCode::Right | KeyCode::Char('l') => Action::NextPage,
        KeyCode::Enter => Action::Tap,
        KeyCode::Char(' ') => Action::ToggleAutoScroll,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Faster,
        KeyCode::Char('-') => Action::Slower,
        KeyCode::Char('r') => Action::RestartAutoScroll,
        KeyCode::Char('s') => Action::Shuffle,
        KeyCode::Char('i') => Action::HideIndicator,
        KeyCode::Char('H') => Action::Hide,
        _ => Action::None,
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
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::PreviousPage);
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Action::NextPage);
        assert_eq!(handle_key_event(key(KeyCode::Enter)), Action::Tap);
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Action::ToggleAutoScroll);
        assert_eq!(handle_key_event(key(KeyCode::Char('+'))), Action::Faster);
        assert_eq!(handle_key_event(key(KeyCode::Char('-'))), Action::Slower);
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Action::RestartAutoScroll);
    }

    #[test]
    fn test_quit_and_unknown() {
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('z'))), Action::None);
    }
}
