/// Cursor movement and scroll handling
use crate::App;

pub enum CursorMovement {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

impl App {
    /// Recompute `rx` and move the viewport just far enough to contain the
    /// cursor. Runs once per frame, before drawing.
    pub fn scroll(&mut self) {
        let tab_stop = self.tab_stop();
        self.cursor.rx = self
            .buffer
            .row(self.cursor.cy)
            .map(|row| row.cx_to_rx(self.cursor.cx, tab_stop))
            .unwrap_or(0);

        let view = &mut self.viewport;
        let (cy, rx) = (self.cursor.cy, self.cursor.rx);

        if cy < view.row_offset {
            view.row_offset = cy;
        }
        if cy >= view.row_offset + view.screen_rows {
            view.row_offset = (cy + 1).saturating_sub(view.screen_rows);
        }
        if rx < view.col_offset {
            view.col_offset = rx;
        }
        if rx >= view.col_offset + view.screen_cols {
            view.col_offset = (rx + 1).saturating_sub(view.screen_cols);
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMovement) {
        match movement {
            CursorMovement::Up => {
                self.cursor.cy = self.cursor.cy.saturating_sub(1);
            }
            CursorMovement::Down => {
                // One past the last row is allowed so text can be added at the end
                if self.cursor.cy < self.buffer.row_count() {
                    self.cursor.cy += 1;
                }
            }
            CursorMovement::Left => {
                if self.cursor.cx > 0 {
                    self.cursor.cx -= 1;
                } else if self.cursor.cy > 0 {
                    self.cursor.cy -= 1;
                    self.cursor.cx = self.current_row_len();
                }
            }
            CursorMovement::Right => {
                if let Some(row) = self.buffer.row(self.cursor.cy) {
                    if self.cursor.cx < row.len() {
                        self.cursor.cx += 1;
                    } else {
                        self.cursor.cy += 1;
                        self.cursor.cx = 0;
                    }
                }
            }
            CursorMovement::LineStart => {
                self.cursor.cx = 0;
            }
            CursorMovement::LineEnd => {
                if self.cursor.cy < self.buffer.row_count() {
                    self.cursor.cx = self.current_row_len();
                }
            }
            CursorMovement::PageUp => {
                self.cursor.cy = self.viewport.row_offset;
                for _ in 0..self.viewport.screen_rows {
                    self.move_cursor(CursorMovement::Up);
                }
            }
            CursorMovement::PageDown => {
                let bottom = (self.viewport.row_offset + self.viewport.screen_rows).saturating_sub(1);
                self.cursor.cy = bottom.min(self.buffer.row_count());
                for _ in 0..self.viewport.screen_rows {
                    self.move_cursor(CursorMovement::Down);
                }
            }
        }

        // Snap to the end of a shorter row
        self.cursor.cx = self.cursor.cx.min(self.current_row_len());
    }

    /// Length of the cursor's row, 0 past the end of the buffer.
    pub fn current_row_len(&self) -> usize {
        self.buffer.row(self.cursor.cy).map_or(0, |row| row.len())
    }
}
