//! # CommentsSection Component
//!
//! Decides which of five mutually exclusive views to show and renders it:
//! loading spinner, the populated card list, an error message, the
//! "start searching" prompt, or the "no comments found" message.
//!
//! The populated view is a scrollable column of `CommentCard`s with a
//! result-count header. Scroll state persists across frames in
//! `CommentsSectionState`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Comment;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::comment_card::CommentCard;
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which view the section shows. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView {
    Loading,
    Populated,
    Error,
    StartSearching,
    NoResults,
}

/// Selects the view, in precedence order: loading beats everything, a
/// non-empty list beats error, and the two empty states split on whether
/// a search was ever submitted.
pub fn select_view(
    comment_count: usize,
    is_loading: bool,
    is_error: bool,
    has_search: bool,
) -> SectionView {
    if is_loading {
        return SectionView::Loading;
    }
    if comment_count > 0 {
        return SectionView::Populated;
    }
    if is_error {
        return SectionView::Error;
    }
    if !has_search {
        return SectionView::StartSearching;
    }
    SectionView::NoResults
}

/// Scroll state for the card list. Persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct CommentsSectionState {
    pub scroll_state: ScrollViewState,
}

impl CommentsSectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top, e.g. when the page or query changes.
    pub fn reset_scroll(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }
}

impl EventHandler for CommentsSectionState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

/// Results area component. Created fresh each frame with references to
/// the persistent state and the current props.
pub struct CommentsSection<'a> {
    pub state: &'a mut CommentsSectionState,
    pub comments: &'a [Comment],
    pub is_loading: bool,
    pub is_error: bool,
    pub has_search: bool,
    pub spinner_frame: usize,
}

impl CommentsSection<'_> {
    fn draw_loading(&self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        let lines = vec![
            Line::from(Span::styled(
                format!("{spinner} Searching comments..."),
                Style::default().fg(Color::Cyan),
            )),
        ];
        draw_centered(frame, area, lines);
    }

    fn draw_error(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Error loading comments",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Please try again later",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        draw_centered(frame, area, lines);
    }

    fn draw_start_searching(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Start searching",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Enter a search term above to find relevant comments",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        draw_centered(frame, area, lines);
    }

    fn draw_no_results(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "No comments found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search query",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        draw_centered(frame, area, lines);
    }

    fn draw_populated(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header_area, list_area] = Layout::vertical([Length(1), Min(0)]).areas(area);

        let header = Paragraph::new(Line::from(Span::styled(
            format!("Showing {} result(s)", self.comments.len()),
            Style::default().add_modifier(Modifier::DIM),
        )));
        frame.render_widget(header, header_area);

        // Build cards and measure them against the scroll view width
        // (one column is reserved for the scrollbar).
        let content_width = list_area.width.saturating_sub(1);
        let card_area = Rect::new(0, 0, content_width, list_area.height);
        let cards: Vec<CommentCard> = self
            .comments
            .iter()
            .map(|comment| CommentCard::new(comment, card_area))
            .collect();

        let total_height: u16 = cards.iter().map(|c| c.height).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for card in cards {
            let card_rect = Rect::new(0, y_offset, content_width, card.height);
            scroll_view.render_widget(card.paragraph, card_rect);
            y_offset += card.height;
        }

        frame.render_stateful_widget(scroll_view, list_area, &mut self.state.scroll_state);
    }
}

impl Component for CommentsSection<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match select_view(
            self.comments.len(),
            self.is_loading,
            self.is_error,
            self.has_search,
        ) {
            SectionView::Loading => self.draw_loading(frame, area),
            SectionView::Populated => self.draw_populated(frame, area),
            SectionView::Error => self.draw_error(frame, area),
            SectionView::StartSearching => self.draw_start_searching(frame, area),
            SectionView::NoResults => self.draw_no_results(frame, area),
        }
    }
}

/// Renders a short block of lines vertically and horizontally centered.
fn draw_centered(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let height = lines.len() as u16;
    let top_pad = area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + top_pad,
        width: area.width,
        height: height.min(area.height),
    };
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}
