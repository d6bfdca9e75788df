use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// Map a crossterm terminal event to an app action.
pub fn map_event(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }
            map_key(key)
        }
        Event::Resize(..) => Action::Resize,
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Char('f') | KeyCode::Tab => Action::CycleFilter,
        KeyCode::Char('a') | KeyCode::Esc => Action::ResetFilter,
        KeyCode::Char('s') => Action::ToggleSort,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_quits() {
        let evt = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_event(&evt), Action::Quit);
    }

    #[test]
    fn filter_and_sort_keys() {
        assert_eq!(
            map_event(&press(KeyCode::Char('f'), KeyModifiers::NONE)),
            Action::CycleFilter
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('s'), KeyModifiers::NONE)),
            Action::ToggleSort
        );
        assert_eq!(
            map_event(&press(KeyCode::Esc, KeyModifiers::NONE)),
            Action::ResetFilter
        );
    }

    #[test]
    fn unmapped_key_is_none() {
        assert_eq!(
            map_event(&press(KeyCode::Char('z'), KeyModifiers::NONE)),
            Action::None
        );
    }
}
