//! Full-frame layout: status line, search section, results, pager.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::state::{App, PAGE_LIMIT};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::search_section::SEARCH_SECTION_HEIGHT;
use crate::tui::components::{CommentsSection, Pagination, SearchSection};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let comments = app.comments();
    // The pager only appears when the current result list is non-empty.
    let pagination_height = if comments.is_empty() { 0 } else { 3 };

    let layout = Layout::vertical([
        Length(1),
        Length(SEARCH_SECTION_HEIGHT),
        Min(0),
        Length(pagination_height),
    ]);
    let [status_area, search_area, results_area, pagination_area] = layout.areas(frame.area());

    let status = Span::styled(
        format!("comments-search | {}", app.status_message),
        Style::default().add_modifier(Modifier::DIM),
    );
    frame.render_widget(status, status_area);

    let mut search_section = SearchSection {
        search_bar: &mut tui.search_bar,
    };
    search_section.render(frame, search_area);

    let mut comments_section = CommentsSection {
        state: &mut tui.comments,
        comments,
        is_loading: app.is_fetching(),
        is_error: app.is_error(),
        has_search: app.has_search(),
        spinner_frame,
    };
    comments_section.render(frame, results_area);

    if !comments.is_empty() {
        current_pagination(app).render(frame, pagination_area);
    }
}

/// Builds the pager from controller state: Next is enabled while the page
/// is full (the length == limit heuristic), Previous past page 1.
pub fn current_pagination(app: &App) -> Pagination {
    Pagination {
        current_page: app.page,
        has_next_page: app.comments().len() == PAGE_LIMIT as usize,
        has_previous_page: Some(app.page > 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{update, Action};
    use crate::test_support::{full_page_of_comments, sample_comments};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, app, &mut tui, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app_with_results(comments: Vec<crate::api::Comment>) -> App {
        let mut app = App::new();
        update(&mut app, Action::SubmitSearch("test query".to_string()));
        let key = app.current_key().unwrap();
        update(
            &mut app,
            Action::CommentsFetched {
                key,
                result: Ok(comments),
            },
        );
        app
    }

    #[test]
    fn test_initial_frame_has_no_pagination() {
        let text = draw_to_text(&App::new());
        assert!(text.contains("Comment Search"));
        assert!(text.contains("Start searching"));
        assert!(!text.contains("Pagination"));
    }

    #[test]
    fn test_results_show_cards_and_pagination() {
        let text = draw_to_text(&app_with_results(sample_comments()));
        assert!(text.contains("Showing 3 result(s)"));
        assert!(text.contains("Pagination"));
    }

    #[test]
    fn test_empty_results_hide_pagination() {
        let text = draw_to_text(&app_with_results(vec![]));
        assert!(text.contains("No comments found"));
        assert!(!text.contains("Pagination"));
    }

    #[test]
    fn test_next_enabled_only_for_full_page() {
        let full = app_with_results(full_page_of_comments());
        assert!(current_pagination(&full).can_go_next());

        let partial = app_with_results(sample_comments());
        assert!(!current_pagination(&partial).can_go_next());
    }

    #[test]
    fn test_previous_follows_page_number() {
        let app = app_with_results(sample_comments());
        assert_eq!(app.page, 1);
        assert!(!current_pagination(&app).can_go_previous());

        let mut app = app_with_results(full_page_of_comments());
        update(&mut app, Action::GoToPage(2));
        let key = app.current_key().unwrap();
        update(
            &mut app,
            Action::CommentsFetched {
                key,
                result: Ok(full_page_of_comments()),
            },
        );
        assert!(current_pagination(&app).can_go_previous());
    }
}
