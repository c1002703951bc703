//! # CommentCard Component
//!
//! Renders one comment as a bordered card: author name, email, body
//! (truncated to 64 characters), and the post/comment id badges.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::api::Comment;

/// Longest body displayed before truncation kicks in.
pub const MAX_BODY_LEN: usize = 64;

/// Cuts the body at 64 characters and appends `...` (displayed length 67);
/// shorter bodies pass through unmodified.
pub fn truncate_body(body: &str) -> String {
    if body.chars().count() > MAX_BODY_LEN {
        let cut: String = body.chars().take(MAX_BODY_LEN).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}

/// A comment card measured against a target width, teed up for rendering
/// inside a scroll view.
pub struct CommentCard<'a> {
    pub paragraph: Paragraph<'a>,
    pub height: u16,
}

impl<'a> CommentCard<'a> {
    pub fn new(comment: &'a Comment, window_area: Rect) -> Self {
        let lines = vec![
            Line::from(Span::styled(
                comment.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                comment.email.as_str(),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(truncate_body(&comment.body)),
            Line::from(Span::styled(
                format!("Post #{} · Comment #{}", comment.post_id, comment.id),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().add_modifier(Modifier::DIM)),
            )
            .wrap(Wrap { trim: false });

        let inner_width = window_area.width.saturating_sub(2);
        let height = paragraph.line_count(inner_width) as u16;

        CommentCard { paragraph, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_comments;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_short_body_unmodified() {
        assert_eq!(truncate_body("Short comment"), "Short comment");
    }

    #[test]
    fn test_exactly_64_characters_unmodified() {
        let body = "a".repeat(64);
        assert_eq!(truncate_body(&body), body);
    }

    #[test]
    fn test_long_body_truncated_to_67() {
        let body = "a".repeat(100);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), 67);
        assert!(truncated.ends_with("..."));
        assert_eq!(&truncated[..64], &body[..64]);
    }

    #[test]
    fn test_65_characters_is_truncated() {
        let body = "b".repeat(65);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), 67);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 70 two-byte characters; a byte-indexed cut would panic or split.
        let body = "é".repeat(70);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), 67);
        assert!(truncated.starts_with(&"é".repeat(64)));
    }

    #[test]
    fn test_card_height_fits_content_plus_borders() {
        let comment = &sample_comments()[1]; // short body, no wrapping
        let area = Rect::new(0, 0, 80, 40);
        let card = CommentCard::new(comment, area);

        // 4 content lines + 2 border lines
        assert_eq!(card.height, 6);
    }

    #[test]
    fn test_card_renders_all_fields() {
        let comments = sample_comments();
        let comment = &comments[1];
        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let card = CommentCard::new(comment, f.area());
                f.render_widget(card.paragraph, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Test Comment 2"));
        assert!(text.contains("test2@example.com"));
        assert!(text.contains("Short comment"));
        assert!(text.contains("Post #1"));
        assert!(text.contains("Comment #2"));
    }

    #[test]
    fn test_card_shows_truncated_body() {
        let comments = sample_comments();
        let comment = &comments[0]; // body > 64 chars
        let backend = TestBackend::new(100, 8);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let card = CommentCard::new(comment, f.area());
                f.render_widget(card.paragraph, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("..."));
        assert!(!text.contains("truncation functionality"));
    }
}
