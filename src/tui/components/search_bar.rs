//! # SearchBar Component
//!
//! Text field plus a Search "button" for submitting a comment query.
//!
//! ## Responsibilities
//!
//! - Capture the raw query text (typing, paste, backspace)
//! - Validate: at least 3 non-whitespace-trimmed characters
//! - Emit `SearchEvent::Submit` with the *untrimmed* text on Enter,
//!   but only while valid — an invalid submit is silently ignored
//! - Render the button as disabled exactly when invalid
//!
//! The buffer is internal state; whether the bar has focus is a prop set
//! by the event loop each frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Minimum number of characters (after trimming) for a submittable query.
pub const MIN_QUERY_LEN: usize = 3;

const PLACEHOLDER: &str = "Search comments...";
const HINT: &str = "Enter at least 3 characters to begin your search.";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// User submitted a valid query (untrimmed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Search input component.
///
/// # State
///
/// - `buffer`: current query text
///
/// # Props
///
/// - `focused`: whether keyboard input is routed here (set each frame)
pub struct SearchBar {
    pub buffer: String,
    pub focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
        }
    }

    /// A query is valid once it has at least 3 characters after trimming.
    pub fn is_valid(&self) -> bool {
        self.buffer.trim().chars().count() >= MIN_QUERY_LEN
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [input_area, button_area] =
            Layout::horizontal([Min(20), Length(12)]).areas(area);

        let input_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let input_line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.buffer.as_str())
        };
        let input = Paragraph::new(input_line).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(input_style)
                .title("Search"),
        );
        frame.render_widget(input, input_area);

        // The submit control mirrors validity: bold when enabled, dim
        // when the query is too short.
        let button_style = if self.is_valid() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let button = Paragraph::new(Line::from(Span::styled("Search", button_style)))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(button_style),
            )
            .alignment(Alignment::Center);
        frame.render_widget(button, button_area);

        if self.focused {
            let cursor_x = input_area.x + 1 + self.buffer.width() as u16;
            let max_x = input_area.x + input_area.width.saturating_sub(2);
            frame.set_cursor_position((cursor_x.min(max_x), input_area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                self.buffer.pop().map(|_| SearchEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                // Invalid submissions are swallowed, not errored.
                if self.is_valid() {
                    Some(SearchEvent::Submit(self.buffer.clone()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Hint line shown beneath the bar.
pub fn hint_line() -> Line<'static> {
    Line::from(Span::styled(
        HINT,
        Style::default().add_modifier(Modifier::DIM),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(bar: &mut SearchBar, s: &str) {
        for c in s.chars() {
            bar.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_short_query_is_invalid() {
        let mut bar = SearchBar::new();
        assert!(!bar.is_valid());
        type_str(&mut bar, "ab");
        assert!(!bar.is_valid());
    }

    #[test]
    fn test_three_characters_are_valid() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "abc");
        assert!(bar.is_valid());
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "   ");
        assert!(!bar.is_valid());
    }

    #[test]
    fn test_validation_trims_but_submit_does_not() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "  abc  ");
        assert!(bar.is_valid());

        let event = bar.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(SearchEvent::Submit("  abc  ".to_string())));
    }

    #[test]
    fn test_invalid_submit_emits_nothing() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "ab");
        assert_eq!(bar.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_typing_updates_buffer() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "searching");
        assert_eq!(bar.buffer, "searching");
    }

    #[test]
    fn test_backspace_removes_whole_characters() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "caffé");
        bar.handle_event(&TuiEvent::Backspace);
        assert_eq!(bar.buffer, "caff");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_appends() {
        let mut bar = SearchBar::new();
        bar.handle_event(&TuiEvent::Paste("pasted query".to_string()));
        assert_eq!(bar.buffer, "pasted query");
        assert!(bar.is_valid());
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(60, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = SearchBar::new();

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Search comments..."));
    }
}
