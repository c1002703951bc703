//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! All mutable state (`App`, cache, component state) is owned by this
//! single loop and mutated only in response to discrete events. Fetches
//! run on tokio tasks and report back over an mpsc channel; a response
//! for a key the user has since navigated away from is absorbed into the
//! cache and simply ignored by the view — abandoned, not aborted.
//!
//! The poll timeout is short while a request is in flight so the loading
//! spinner animates, and long otherwise.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{CommentsApi, HttpCommentsClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::query::QueryKey;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CommentsSectionState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing edits the search field. Esc switches to Browse.
    Search,
    /// Keys navigate the results. Typing auto-switches back to Search.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_bar: SearchBar,
    pub comments: CommentsSectionState,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            comments: CommentsSectionState::new(),
            input_mode: InputMode::Search, // User expects to type immediately
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture, // Mouse wheel scrolls the results list
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn CommentsApi> = Arc::new(HttpCommentsClient::new(config.base_url.clone()));
    run_with_api(api)
}

fn run_with_api(api: Arc<dyn CommentsApi>) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for fetch results from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();

    loop {
        // Sync SearchBar props with the current mode
        tui.search_bar.focused = tui.input_mode == InputMode::Search;

        let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;

        // Short timeout while fetching so the spinner animates
        let timeout = if app.is_fetching() {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };

        let mut should_quit = false;
        let first_event = poll_event_timeout(timeout);

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just triggers the redraw at the top of the loop
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Page navigation works in both modes, but only while the
            // pager is visible (non-empty results), and only in the
            // directions it has enabled.
            if matches!(event, TuiEvent::PrevPage | TuiEvent::NextPage) {
                if app.comments().is_empty() {
                    continue;
                }
                let pagination = ui::current_pagination(&app);
                let target = match event {
                    TuiEvent::PrevPage => pagination.previous(),
                    _ => pagination.next(),
                };
                if let Some(page) = target {
                    tui.comments.reset_scroll();
                    let effect = update(&mut app, Action::GoToPage(page));
                    handle_effect(effect, &api, &tx, &mut should_quit);
                }
                continue;
            }

            // Scroll events always go to the results list
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.comments.handle_event(&event);
                continue;
            }

            match tui.input_mode {
                InputMode::Search => match event {
                    TuiEvent::Escape => {
                        tui.input_mode = InputMode::Browse;
                    }
                    other => {
                        if let Some(SearchEvent::Submit(query)) =
                            tui.search_bar.handle_event(&other)
                        {
                            tui.comments.reset_scroll();
                            let effect = update(&mut app, Action::SubmitSearch(query));
                            handle_effect(effect, &api, &tx, &mut should_quit);
                        }
                    }
                },
                InputMode::Browse => match event {
                    TuiEvent::InputChar('q') => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    // '/' refocuses the search field; other typing is
                    // forwarded into it.
                    TuiEvent::InputChar('/') => {
                        tui.input_mode = InputMode::Search;
                    }
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                        tui.input_mode = InputMode::Search;
                        tui.search_bar.handle_event(&event);
                    }
                    TuiEvent::Submit => {
                        tui.input_mode = InputMode::Search;
                    }
                    _ => {}
                },
            }
        }

        // Handle fetch results from background tasks
        while let Ok(action) = rx.try_recv() {
            let effect = update(&mut app, action);
            handle_effect(effect, &api, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_effect(
    effect: Effect,
    api: &Arc<dyn CommentsApi>,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::Fetch(key) => spawn_fetch(api.clone(), key, tx.clone()),
        Effect::Quit => *should_quit = true,
        Effect::None => {}
    }
}

/// Spawns a single fetch for `key`. The task is never cancelled: if the
/// user navigates away, the eventual result lands in the cache under a
/// key the view no longer cares about.
fn spawn_fetch(api: Arc<dyn CommentsApi>, key: QueryKey, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning fetch: query={:?} page={} limit={}",
        key.query, key.page, key.limit
    );
    tokio::spawn(async move {
        let result = api
            .get_comments(&key.to_params())
            .await
            .map_err(|e| e.to_string());
        if let Err(ref message) = result {
            warn!("Fetch failed for {:?}: {}", key, message);
        }
        if tx.send(Action::CommentsFetched { key, result }).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
