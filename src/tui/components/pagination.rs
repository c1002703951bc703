//! # Pagination Component
//!
//! Previous/Next controls around a page-number indicator.
//!
//! Enablement rules:
//! - Previous: explicit `has_previous_page` when supplied, otherwise
//!   derived as `current_page > 1`
//! - Next: `has_next_page` (defaults to true)
//!
//! Disabled controls render dimmed and never yield a page change.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

/// Pagination control.
///
/// # Props
///
/// - `current_page`: 1-indexed page shown in the indicator
/// - `has_next_page`: whether Next is enabled (default true)
/// - `has_previous_page`: explicit override for Previous; `None` derives
///   it from `current_page > 1`
pub struct Pagination {
    pub current_page: u32,
    pub has_next_page: bool,
    pub has_previous_page: Option<bool>,
}

impl Pagination {
    pub fn new(current_page: u32) -> Self {
        Self {
            current_page,
            has_next_page: true,
            has_previous_page: None,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.has_previous_page
            .unwrap_or(self.current_page > 1)
    }

    pub fn can_go_next(&self) -> bool {
        self.has_next_page
    }

    /// Target page for the Previous action, or `None` while disabled.
    pub fn previous(&self) -> Option<u32> {
        self.can_go_previous().then(|| self.current_page - 1)
    }

    /// Target page for the Next action, or `None` while disabled.
    pub fn next(&self) -> Option<u32> {
        self.can_go_next().then(|| self.current_page + 1)
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}

impl Component for Pagination {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("◀ Previous page", control_style(self.can_go_previous())),
            Span::raw("   Page "),
            Span::styled(
                self.current_page.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Next page ▶", control_style(self.can_go_next())),
        ]);

        let paragraph = Paragraph::new(line)
            .block(Block::bordered().title("Pagination"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
