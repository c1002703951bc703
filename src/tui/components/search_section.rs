//! Static hero header wrapped around the SearchBar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::search_bar::{hint_line, SearchBar};

/// Height the section needs: 2 header lines, 3 for the search bar, 1 hint.
pub const SEARCH_SECTION_HEIGHT: u16 = 6;

pub struct SearchSection<'a> {
    pub search_bar: &'a mut SearchBar,
}

impl Component for SearchSection<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;
        let [title_area, subtitle_area, bar_area, hint_area] =
            Layout::vertical([Length(1), Length(1), Length(3), Length(1)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Comment Search",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            "Search through thousands of comments instantly.",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(subtitle, subtitle_area);

        self.search_bar.render(frame, bar_area);

        frame.render_widget(Paragraph::new(hint_line()), hint_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_header_and_hint() {
        let backend = TestBackend::new(80, SEARCH_SECTION_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = SearchBar::new();

        terminal
            .draw(|f| {
                let mut section = SearchSection {
                    search_bar: &mut bar,
                };
                section.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Comment Search"));
        assert!(text.contains("Enter at least 3 characters"));
        assert!(text.contains("Search comments..."));
    }
}
