use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Submit,
    Reset,

    // Form editing
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
    NextField,
    PrevField,

    // Plan view
    SwitchTab,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Wait up to `timeout` for the next event the UI cares about.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => map_event(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Translate a raw crossterm event. Pure, so the key map is testable.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement reports releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::SwitchTab),
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(TuiEvent::Reset),
        (_, KeyCode::F(2)) => Some(TuiEvent::SwitchTab),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
        (KeyModifiers::SHIFT, KeyCode::Tab) => Some(TuiEvent::PrevField),
        (_, KeyCode::Tab) => Some(TuiEvent::NextField),
        (_, KeyCode::Up) => Some(TuiEvent::PrevField),
        (_, KeyCode::Down) => Some(TuiEvent::NextField),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::Home),
        (_, KeyCode::End) => Some(TuiEvent::End),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        // Other control chords are not text
        (KeyModifiers::CONTROL, KeyCode::Char(_)) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_text_and_editing_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('a'))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(
            map_event(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(TuiEvent::Backspace)
        );
        assert_eq!(
            map_event(Event::Paste("Vegan".into())),
            Some(TuiEvent::Paste("Vegan".into()))
        );
    }

    #[test]
    fn test_focus_keys() {
        assert_eq!(
            map_event(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::NextField)
        );
        assert_eq!(
            map_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::PrevField)
        );
        assert_eq!(
            map_event(key(KeyCode::Up, KeyModifiers::NONE)),
            Some(TuiEvent::PrevField)
        );
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(TuiEvent::SwitchTab)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Reset)
        );
        assert_eq!(map_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(
            map_event(key(KeyCode::F(2), KeyModifiers::NONE)),
            Some(TuiEvent::SwitchTab)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let wheel = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(map_event(wheel(MouseEventKind::ScrollUp)), Some(TuiEvent::ScrollUp));
        assert_eq!(
            map_event(wheel(MouseEventKind::ScrollDown)),
            Some(TuiEvent::ScrollDown)
        );
        assert_eq!(map_event(wheel(MouseEventKind::Moved)), None);
    }
}
