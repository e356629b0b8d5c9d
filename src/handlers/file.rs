use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::app::{Cursor, Viewport};
use crate::buffer::Buffer;
use crate::terminal::Tty;
use crate::App;

pub const SAVE_AS_PROMPT: &str = "Save as: {} (ESC to cancel)";

impl App {
    /// Replace the buffer with the contents of `path` and reset the cursor.
    pub async fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.buffer = Buffer::open(path, self.config.editor.tab_stop).await?;
        self.cursor = Cursor::default();
        self.viewport = Viewport {
            row_offset: 0,
            col_offset: 0,
            ..self.viewport
        };
        Ok(())
    }

    /// Write the buffer to its file, asking for a name first if it has none.
    ///
    /// Failures are reported in the message bar and leave the buffer dirty.
    pub async fn save<T: Tty + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        let path = match self.buffer.filename() {
            Some(path) => path.to_path_buf(),
            None => match self.prompt(term, SAVE_AS_PROMPT, |_, _, _| {})? {
                Some(name) => {
                    let path = PathBuf::from(name);
                    self.buffer.set_filename(path.clone());
                    path
                }
                None => {
                    self.set_status_message("Save aborted");
                    return Ok(());
                }
            },
        };

        match self.buffer.save_to(&path).await {
            Ok(bytes) => {
                tracing::info!(file = %path.display(), bytes, "file saved");
                self.set_status_message(format!("{bytes} bytes written to disk"));
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "save failed");
                self.set_status_message(format!("Can't save! I/O error: {e}"));
            }
        }

        Ok(())
    }
}
