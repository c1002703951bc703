//! # TUI Components
//!
//! All UI components for the terminal interface. Two patterns:
//!
//! - Stateless, props-based rendering: `CommentCard`, `Pagination`,
//!   `SearchSection`.
//! - Stateful, event-driven: `SearchBar` (query buffer),
//!   `CommentsSection` (scroll position).
//!
//! Each component file contains its state types, event types, rendering
//! logic, and tests. Components receive external data as props rather
//! than reading global state, which keeps dependencies explicit and the
//! components testable.

pub mod comment_card;
pub mod comments_section;
pub mod pagination;
pub mod search_bar;
pub mod search_section;

pub use comment_card::CommentCard;
pub use comments_section::{CommentsSection, CommentsSectionState};
pub use pagination::Pagination;
pub use search_bar::{SearchBar, SearchEvent};
pub use search_section::SearchSection;
