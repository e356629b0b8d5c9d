use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::buffer::Buffer;
use crate::config::Config;
use crate::handlers::search::SearchState;
use crate::input::keys::read_key;
use crate::terminal::output::{CLEAR_SCREEN, CURSOR_HOME};
use crate::terminal::Tty;
use crate::widgets::StatusMessage;

pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Cursor position in buffer coordinates.
///
/// `cx` indexes the bytes of row `cy`; `cy` may equal the row count (the
/// line past the end). `rx` is derived from `cx` on every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
}

/// The visible window onto the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    /// Text rows; the status and message bars are not included.
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl Viewport {
    /// Viewport for a terminal of `window_rows` x `window_cols`, keeping the
    /// bottom two lines for the status bar and the message bar.
    pub fn new(window_rows: usize, window_cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows: window_rows.saturating_sub(2),
            screen_cols: window_cols,
        }
    }
}

/// All editor state. Every operation takes it by reference.
#[derive(Debug)]
pub struct App {
    /// Cleared when the user quits
    pub running: bool,

    pub buffer: Buffer,

    pub cursor: Cursor,

    pub viewport: Viewport,

    /// Message shown in the bottom line
    pub status_message: StatusMessage,

    /// Ctrl-Q presses still needed to quit with unsaved changes
    pub quit_presses_left: u32,

    /// Incremental search anchor, reset every time a search starts
    pub search: SearchState,

    pub config: Config,
}

impl App {
    /// Empty buffer, cursor at the origin, sized for a `window_rows` x
    /// `window_cols` terminal.
    pub fn new(config: Config, window_rows: usize, window_cols: usize) -> Self {
        Self {
            running: true,
            buffer: Buffer::new(config.editor.tab_stop),
            cursor: Cursor::default(),
            viewport: Viewport::new(window_rows, window_cols),
            status_message: StatusMessage::new(Duration::from_secs(
                config.editor.message_timeout_secs,
            )),
            quit_presses_left: config.editor.quit_times,
            search: SearchState::default(),
            config,
        }
    }

    pub async fn with_file(
        config: Config,
        window_rows: usize,
        window_cols: usize,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let mut app = Self::new(config, window_rows, window_cols);
        app.open(path).await?;
        Ok(app)
    }

    pub fn tab_stop(&self) -> usize {
        self.buffer.tab_stop()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message.set(message);
    }

    /// Redraw, read one key, dispatch it; repeat until the user quits.
    ///
    /// A read that times out still goes round the loop, so an expired
    /// status message disappears without a keypress.
    pub async fn run<T: Tty + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        self.set_status_message(HELP_MESSAGE);

        while self.running {
            self.refresh_screen(term)?;
            if let Some(key) = read_key(term)? {
                self.process_keypress(term, key).await?;
            }
        }

        term.write_all(CLEAR_SCREEN)?;
        term.write_all(CURSOR_HOME)?;
        term.flush()?;
        Ok(())
    }
}
