//! # Text Buffer
//!
//! The ordered list of rows for the one file being edited.
//!
//! ## What it does
//!
//! - Stores the file as rows of raw bytes, each with a tab-expanded render cache
//! - Counts unsaved mutations (`dirty`)
//! - Remembers the file name once it is known
//! - Loads a file from disk and writes it back out
//!
//! Rows are addressed by index only. Any insert or delete above a row shifts
//! its index, so callers re-index after every mutating call.

pub mod row;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub use row::Row;

/// Render width of a tab when no configuration says otherwise.
pub const DEFAULT_TAB_STOP: usize = 8;

#[derive(Debug, Clone)]
pub struct Buffer {
    rows: Vec<Row>,
    dirty: usize,
    filename: Option<PathBuf>,
    tab_stop: usize,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Buffer {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            filename: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a clean buffer from in-memory lines.
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut buffer = Self::new(tab_stop);
        for line in lines {
            let at = buffer.rows.len();
            buffer.insert_row(at, line);
        }
        buffer.dirty = 0;
        buffer
    }

    /// Load `path` line by line, stripping trailing `\n` and `\r` from each line.
    pub async fn open(path: impl AsRef<Path>, tab_stop: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open {}", path.display()))?;
        let mut reader = BufReader::new(file);

        let mut buffer = Self::new(tab_stop);
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            if read == 0 {
                break;
            }
            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }
            let at = buffer.rows.len();
            buffer.insert_row(at, line.as_slice());
        }

        buffer.filename = Some(path.to_path_buf());
        buffer.dirty = 0;
        tracing::info!(file = %path.display(), rows = buffer.rows.len(), "file opened");
        Ok(buffer)
    }

    /// Every row followed by exactly one `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut bytes = Vec::with_capacity(total);
        for row in &self.rows {
            bytes.extend_from_slice(row.chars());
            bytes.push(b'\n');
        }
        bytes
    }

    /// Write the buffer to `path`: open (creating if needed), truncate to the
    /// new length, write, close. Returns the number of bytes written and
    /// marks the buffer clean. On error the buffer stays dirty.
    pub async fn save_to(&mut self, path: &Path) -> std::io::Result<usize> {
        let bytes = self.to_bytes();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .mode(0o644)
            .open(path)
            .await?;
        file.set_len(bytes.len() as u64).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        drop(file);

        self.dirty = 0;
        Ok(bytes.len())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// File name for display, `[No Name]` until one is set.
    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| String::from("[No Name]"))
    }

    /// Insert a new row at `at`, clamped to `[0, row_count]`.
    pub fn insert_row(&mut self, at: usize, text: impl Into<Vec<u8>>) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(text, self.tab_stop));
        self.dirty += 1;
    }

    /// Remove the row at `at`. Out of range is a no-op.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Insert `ch` into row `row` at `at` (clamped to the row length).
    pub fn row_insert_char(&mut self, row: usize, at: usize, ch: u8) {
        let tab_stop = self.tab_stop;
        if let Some(target) = self.rows.get_mut(row) {
            target.insert_byte(at, ch, tab_stop);
            self.dirty += 1;
        }
    }

    /// Delete the byte at `at` in row `row`. Out of range is a no-op.
    pub fn row_delete_char(&mut self, row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        if let Some(target) = self.rows.get_mut(row) {
            if target.delete_byte(at, tab_stop) {
                self.dirty += 1;
            }
        }
    }

    pub fn row_append(&mut self, row: usize, text: &[u8]) {
        let tab_stop = self.tab_stop;
        if let Some(target) = self.rows.get_mut(row) {
            target.append(text, tab_stop);
            self.dirty += 1;
        }
    }

    /// Split row `row` at `at`: the tail becomes a new row directly below.
    pub fn split_row(&mut self, row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        let tail = target.split_off(at, tab_stop);
        self.insert_row(row + 1, tail);
    }

    /// Remove row `row` and append its contents to the row above.
    pub fn join_with_previous(&mut self, row: usize) {
        if row == 0 || row >= self.rows.len() {
            return;
        }
        let current = self.rows.remove(row);
        self.dirty += 1;
        self.row_append(row - 1, current.chars());
    }
}
