use anyhow::Result;

use crate::input::keys::{ctrl_key, read_key, Key, BACKSPACE, ENTER};
use crate::terminal::Tty;
use crate::App;

impl App {
    /// Read a line of input in the message bar.
    ///
    /// `template` is shown with its `{}` replaced by the text typed so far.
    /// Printable ASCII is appended, Backspace/Delete/Ctrl-H remove the last
    /// character. Escape cancels and returns `None`; Enter returns the text
    /// unless it is empty. `on_key` runs after every key, including the
    /// final Escape or Enter.
    pub fn prompt<T, F>(&mut self, term: &mut T, template: &str, mut on_key: F) -> Result<Option<String>>
    where
        T: Tty + ?Sized,
        F: FnMut(&mut Self, &str, Key),
    {
        let mut input = String::new();

        loop {
            self.set_status_message(template.replacen("{}", &input, 1));
            self.refresh_screen(term)?;

            let Some(key) = read_key(term)? else {
                continue;
            };

            match key {
                Key::Delete | Key::Char(BACKSPACE) => {
                    input.pop();
                }
                Key::Char(byte) if byte == ctrl_key(b'h') => {
                    input.pop();
                }
                Key::Escape => {
                    self.set_status_message("");
                    on_key(self, &input, key);
                    return Ok(None);
                }
                Key::Char(ENTER) => {
                    if !input.is_empty() {
                        self.set_status_message("");
                        on_key(self, &input, key);
                        return Ok(Some(input));
                    }
                }
                Key::Char(byte) if byte.is_ascii() && !byte.is_ascii_control() => {
                    input.push(char::from(byte));
                }
                _ => {}
            }

            on_key(self, &input, key);
        }
    }
}
