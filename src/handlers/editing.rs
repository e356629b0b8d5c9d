/// Cursor-relative edits
use crate::App;

impl App {
    /// Insert `ch` at the cursor and step past it. On the line past the end
    /// of the buffer a fresh row is appended first.
    pub fn insert_char(&mut self, ch: u8) {
        if self.cursor.cy == self.buffer.row_count() {
            self.buffer.insert_row(self.buffer.row_count(), Vec::new());
        }
        self.buffer
            .row_insert_char(self.cursor.cy, self.cursor.cx, ch);
        self.cursor.cx += 1;
    }

    /// Break the line at the cursor. At column 0 an empty row goes in above;
    /// otherwise everything from the cursor onward moves to a new row below.
    /// The cursor ends at the start of the following row either way.
    pub fn insert_newline(&mut self) {
        if self.cursor.cx == 0 {
            self.buffer.insert_row(self.cursor.cy, Vec::new());
        } else {
            self.buffer.split_row(self.cursor.cy, self.cursor.cx);
        }
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    /// Delete the character left of the cursor, joining with the previous
    /// row when the cursor is at column 0.
    pub fn delete_char(&mut self) {
        let (cx, cy) = (self.cursor.cx, self.cursor.cy);
        if cy >= self.buffer.row_count() || (cx == 0 && cy == 0) {
            return;
        }

        if cx > 0 {
            self.buffer.row_delete_char(cy, cx - 1);
            self.cursor.cx -= 1;
        } else {
            self.cursor.cx = self.buffer.row(cy - 1).map_or(0, |row| row.len());
            self.buffer.join_with_previous(cy);
            self.cursor.cy -= 1;
        }
    }
}
