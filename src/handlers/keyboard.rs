use anyhow::Result;

use crate::input::keys::{ctrl_key, Key, BACKSPACE, ENTER, TAB};
use crate::input::CursorMovement;
use crate::terminal::Tty;
use crate::App;

impl App {
    /// Dispatch one decoded key.
    pub async fn process_keypress<T: Tty + ?Sized>(&mut self, term: &mut T, key: Key) -> Result<()> {
        match key {
            Key::Char(byte) if byte == ctrl_key(b'q') => {
                self.handle_quit();
                return Ok(());
            }
            Key::Char(ENTER) => self.insert_newline(),
            Key::Char(byte) if byte == ctrl_key(b's') => self.save(term).await?,
            Key::Char(byte) if byte == ctrl_key(b'f') => self.find(term)?,
            Key::Home => self.move_cursor(CursorMovement::LineStart),
            Key::End => self.move_cursor(CursorMovement::LineEnd),
            Key::Char(BACKSPACE) => self.delete_char(),
            Key::Char(byte) if byte == ctrl_key(b'h') => self.delete_char(),
            Key::Delete => {
                self.move_cursor(CursorMovement::Right);
                self.delete_char();
            }
            Key::PageUp => self.move_cursor(CursorMovement::PageUp),
            Key::PageDown => self.move_cursor(CursorMovement::PageDown),
            Key::ArrowUp => self.move_cursor(CursorMovement::Up),
            Key::ArrowDown => self.move_cursor(CursorMovement::Down),
            Key::ArrowLeft => self.move_cursor(CursorMovement::Left),
            Key::ArrowRight => self.move_cursor(CursorMovement::Right),
            Key::Escape => {}
            Key::Char(byte) if byte == ctrl_key(b'l') => {}
            Key::Char(TAB) => self.insert_char(TAB),
            Key::Char(byte) if !byte.is_ascii_control() => self.insert_char(byte),
            Key::Char(_) => {}
        }

        self.quit_presses_left = self.config.editor.quit_times;
        Ok(())
    }

    /// Quit now when clean; with unsaved changes, count down the presses
    /// still needed and warn.
    fn handle_quit(&mut self) {
        if self.buffer.is_dirty() {
            self.quit_presses_left = self.quit_presses_left.saturating_sub(1);
            if self.quit_presses_left > 0 {
                self.set_status_message(format!(
                    "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                    self.quit_presses_left
                ));
                return;
            }
        }

        tracing::info!(dirty = self.buffer.dirty(), "quit");
        self.running = false;
    }
}
