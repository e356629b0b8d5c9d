//! Incremental search.
//!
//! Every keystroke in the search prompt re-runs the search. Arrow keys step
//! to the next (Right/Down) or previous (Left/Up) matching row, wrapping
//! around the ends of the buffer. Any other key edits the query and restarts
//! the search from the top.

use anyhow::Result;

use crate::input::keys::{Key, ENTER};
use crate::terminal::Tty;
use crate::App;

pub const SEARCH_PROMPT: &str = "Search: {} (Use ESC/Arrows/Enter)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Row of the most recent match; `None` restarts from the top
    pub last_match: Option<usize>,
    pub direction: SearchDirection,
}

impl App {
    /// Run the search prompt. Escape puts the cursor and viewport back where
    /// they were; Enter leaves the cursor on the last match.
    pub fn find<T: Tty + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        let saved_cursor = self.cursor;
        let saved_viewport = self.viewport;
        self.search = SearchState::default();

        let query = self.prompt(term, SEARCH_PROMPT, Self::on_search_key)?;

        match query {
            None => {
                self.cursor = saved_cursor;
                self.viewport = saved_viewport;
            }
            Some(query) if self.search.last_match.is_none() => {
                self.cursor = saved_cursor;
                self.viewport = saved_viewport;
                tracing::debug!(%query, "search found nothing");
                self.set_status_message(format!("No match for \"{query}\""));
            }
            Some(query) => {
                tracing::debug!(%query, row = ?self.search.last_match, "search confirmed");
            }
        }

        self.search = SearchState::default();
        Ok(())
    }

    /// Prompt callback: update direction/anchor from `key`, then look for
    /// `query` starting after the anchor.
    pub fn on_search_key(&mut self, query: &str, key: Key) {
        match key {
            Key::Char(ENTER) => return,
            Key::Escape => {
                self.search = SearchState::default();
                return;
            }
            Key::ArrowRight | Key::ArrowDown => self.search.direction = SearchDirection::Forward,
            Key::ArrowLeft | Key::ArrowUp => self.search.direction = SearchDirection::Backward,
            _ => self.search = SearchState::default(),
        }

        if query.is_empty() {
            return;
        }
        if self.search.last_match.is_none() {
            self.search.direction = SearchDirection::Forward;
        }

        let row_count = self.buffer.row_count();
        let tab_stop = self.tab_stop();
        let mut current = self.search.last_match;

        for _ in 0..row_count {
            let next = match (current, self.search.direction) {
                (None, _) => 0,
                (Some(y), SearchDirection::Forward) => (y + 1) % row_count,
                (Some(0), SearchDirection::Backward) => row_count - 1,
                (Some(y), SearchDirection::Backward) => y - 1,
            };
            current = Some(next);

            let Some(row) = self.buffer.row(next) else {
                continue;
            };
            if let Some(rx) = find_bytes(row.render(), query.as_bytes()) {
                self.search.last_match = Some(next);
                self.cursor.cy = next;
                self.cursor.cx = row.rx_to_cx(rx, tab_stop);
                // Past the end, so the next scroll puts the match on the top line
                self.viewport.row_offset = row_count;
                return;
            }
        }
    }
}

/// Offset of the first occurrence of `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
