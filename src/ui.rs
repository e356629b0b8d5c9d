use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use crate::terminal::output::OutputBuffer;
use crate::widgets::StatusBar;
use crate::App;

impl App {
    /// Scroll, compose a full frame and write it to `out` in one go.
    pub fn refresh_screen<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        self.scroll();
        let frame = self.render_frame(Instant::now());
        frame.flush_to(out)?;
        Ok(())
    }

    /// Compose one frame as it would look at `now`. Call [`App::scroll`]
    /// first so the cursor is inside the viewport.
    pub fn render_frame(&self, now: Instant) -> OutputBuffer {
        let mut out = OutputBuffer::new();

        out.hide_cursor();
        out.cursor_home();

        self.draw_rows(&mut out);
        self.draw_status_bar(&mut out);
        self.draw_message_bar(&mut out, now);

        let view = &self.viewport;
        out.cursor_goto(
            self.cursor.cy.saturating_sub(view.row_offset),
            self.cursor.rx.saturating_sub(view.col_offset),
        );
        out.show_cursor();

        out
    }

    fn draw_rows(&self, out: &mut OutputBuffer) {
        let view = &self.viewport;

        for y in 0..view.screen_rows {
            let file_row = y + view.row_offset;
            match self.buffer.row(file_row) {
                Some(row) => {
                    let render = row.render();
                    let start = view.col_offset.min(render.len());
                    let end = (start + view.screen_cols).min(render.len());
                    out.write_raw(&render[start..end]);
                }
                None if self.buffer.is_empty() && y == view.screen_rows / 3 => {
                    self.draw_welcome(out);
                }
                None => out.write_raw(b"~"),
            }

            out.clear_line();
            out.write_raw(b"\r\n");
        }
    }

    fn draw_welcome(&self, out: &mut OutputBuffer) {
        let cols = self.viewport.screen_cols;
        let welcome = format!("Tilde editor -- version {}", env!("CARGO_PKG_VERSION"));
        let len = welcome.len().min(cols);

        let mut padding = (cols - len) / 2;
        if padding > 0 {
            out.write_raw(b"~");
            padding -= 1;
        }
        out.write_raw(&b" ".repeat(padding));
        out.write_raw(&welcome.as_bytes()[..len]);
    }

    fn draw_status_bar(&self, out: &mut OutputBuffer) {
        let rows = self.buffer.row_count();
        let name = self.buffer.display_name();
        let modified = if self.buffer.is_dirty() { " (modified)" } else { "" };

        let bar = StatusBar::new(
            format!("{name:.20} - {rows} lines{modified}"),
            format!("{}/{}", self.cursor.cy + 1, rows),
        );
        bar.render(out, self.viewport.screen_cols);
    }

    fn draw_message_bar(&self, out: &mut OutputBuffer, now: Instant) {
        out.clear_line();
        if let Some(text) = self.status_message.visible_text(now) {
            let bytes = text.as_bytes();
            out.write_raw(&bytes[..bytes.len().min(self.viewport.screen_cols)]);
        }
    }
}
