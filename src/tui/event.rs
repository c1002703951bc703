use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C - quits regardless of mode
    ForceQuit,
    /// Enter - submit the search (or refocus it from browse mode)
    Submit,
    /// Esc - leave the search field
    Escape,

    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,

    /// Left arrow - previous page
    PrevPage,
    /// Right arrow - next page
    NextPage,

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

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        translate_event(event::read().unwrap())
    } else {
        None
    }
}

/// Maps a raw crossterm event to a `TuiEvent`. Mouse events arrive only
/// because `TerminalModeGuard` enables mouse capture at startup.
fn translate_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                // Regular key handling
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Left) => Some(TuiEvent::PrevPage),
                (_, KeyCode::Right) => Some(TuiEvent::NextPage),
                (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_mouse_wheel_maps_to_scroll() {
        assert_eq!(
            translate_event(mouse(MouseEventKind::ScrollUp)),
            Some(TuiEvent::ScrollUp)
        );
        assert_eq!(
            translate_event(mouse(MouseEventKind::ScrollDown)),
            Some(TuiEvent::ScrollDown)
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert_eq!(
            translate_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            None
        );
        assert_eq!(translate_event(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate_event(event), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_arrows_map_to_page_navigation() {
        let left = Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        let right = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(translate_event(left), Some(TuiEvent::PrevPage));
        assert_eq!(translate_event(right), Some(TuiEvent::NextPage));
    }
}
