//! Raw-mode terminal control.
//!
//! [`Terminal`] owns raw mode for as long as it lives: constructing it saves
//! the current attributes and switches to raw mode, dropping it puts the
//! saved attributes back. It is also the editor's byte source and output
//! sink.

pub mod output;

use std::io::{self, Read, Write};
use std::process;

use anyhow::{anyhow, Context, Result};
use rustix::termios::{
    self, ControlModes, InputModes, LocalModes, OptionalActions, OutputModes, SpecialCodeIndex,
    Termios,
};

use crate::input::keys::ByteSource;
use output::{CLEAR_SCREEN, CURSOR_HOME, CURSOR_TO_BOTTOM_RIGHT, QUERY_CURSOR_POSITION};

/// Anything the editor can both read keys from and draw to.
pub trait Tty: ByteSource + Write {}

impl<T: ByteSource + Write + ?Sized> Tty for T {}

/// The controlling terminal in raw mode.
pub struct Terminal {
    original: Termios,
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Terminal {
    /// Switch stdin to raw mode.
    ///
    /// Turns off echo, canonical input, signal keys, Ctrl-V, flow control,
    /// CR to NL translation and output post-processing. Reads return after
    /// `read_timeout_deciseconds` tenths of a second even when no byte
    /// arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes cannot be read or set.
    pub fn enable_raw_mode(read_timeout_deciseconds: u8) -> Result<Self> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin).context("tcgetattr")?;

        let mut raw = original.clone();
        raw.input_modes.remove(
            InputModes::BRKINT
                | InputModes::ICRNL
                | InputModes::INPCK
                | InputModes::ISTRIP
                | InputModes::IXON,
        );
        raw.output_modes.remove(OutputModes::OPOST);
        raw.control_modes.insert(ControlModes::CS8);
        raw.local_modes.remove(
            LocalModes::ECHO | LocalModes::ICANON | LocalModes::IEXTEN | LocalModes::ISIG,
        );
        raw.special_codes[SpecialCodeIndex::VMIN] = 0;
        raw.special_codes[SpecialCodeIndex::VTIME] = read_timeout_deciseconds.max(1);

        termios::tcsetattr(&stdin, OptionalActions::Flush, &raw).context("tcsetattr")?;
        tracing::debug!(read_timeout_deciseconds, "raw mode enabled");

        Ok(Self {
            original,
            stdin,
            stdout: io::stdout(),
        })
    }

    /// Terminal size as (rows, cols).
    ///
    /// Asks the kernel first. If that fails or reports zero columns, moves
    /// the cursor to the far bottom-right corner and asks the terminal where
    /// it ended up.
    ///
    /// # Errors
    ///
    /// Returns an error if neither method yields a size.
    pub fn window_size(&mut self) -> Result<(usize, usize)> {
        match termios::tcgetwinsize(&self.stdout) {
            Ok(size) if size.ws_col != 0 => Ok((usize::from(size.ws_row), usize::from(size.ws_col))),
            _ => {
                self.stdout.write_all(CURSOR_TO_BOTTOM_RIGHT)?;
                self.stdout.flush()?;
                query_cursor_position(self).context("get_window_size")
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = termios::tcsetattr(&self.stdin, OptionalActions::Flush, &self.original) {
            tracing::error!(error = %e, "failed to restore terminal attributes");
        }
    }
}

impl ByteSource for Terminal {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.stdin.read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.stdout.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

/// Ask the terminal for the cursor position with `ESC [ 6 n` and parse the
/// `ESC [ rows ; cols R` reply.
///
/// # Errors
///
/// Returns an error if the query cannot be written or the reply is malformed.
pub fn query_cursor_position<T: Tty + ?Sized>(tty: &mut T) -> Result<(usize, usize)> {
    tty.write_all(QUERY_CURSOR_POSITION)?;
    tty.flush()?;

    let mut reply = Vec::with_capacity(32);
    while reply.len() < 31 {
        match tty.read_byte()? {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }

    parse_cursor_position_report(&reply)
        .ok_or_else(|| anyhow!("malformed cursor position report {:?}", String::from_utf8_lossy(&reply)))
}

/// Parse `ESC [ rows ; cols` (the terminating `R` already stripped).
pub fn parse_cursor_position_report(reply: &[u8]) -> Option<(usize, usize)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}

/// Fatal exit: clear the screen, home the cursor, print the error and exit
/// with status 1. Raw mode must already have been released, which happens
/// when the [`Terminal`] is dropped.
pub fn die(err: &anyhow::Error) -> ! {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(CLEAR_SCREEN);
    let _ = stdout.write_all(CURSOR_HOME);
    let _ = stdout.flush();

    tracing::error!(error = %format!("{err:#}"), "fatal");
    eprintln!("{err:#}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        input: VecDeque<u8>,
        output: Vec<u8>,
    }

    impl ByteSource for Scripted {
        fn read_byte(&mut self) -> io::Result<Option<u8>> {
            Ok(self.input.pop_front())
        }
    }

    impl Write for Scripted {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_cursor_position_report() {
        assert_eq!(parse_cursor_position_report(b"\x1b[24;80"), Some((24, 80)));
        assert_eq!(parse_cursor_position_report(b"24;80"), None);
        assert_eq!(parse_cursor_position_report(b"\x1b[24"), None);
        assert_eq!(parse_cursor_position_report(b"\x1b[x;80"), None);
    }

    #[test]
    fn test_query_cursor_position_reads_until_r() {
        let mut tty = Scripted {
            input: b"\x1b[50;132Rleftover".iter().copied().collect(),
            output: Vec::new(),
        };

        assert_eq!(query_cursor_position(&mut tty).unwrap(), (50, 132));
        assert_eq!(tty.output, b"\x1b[6n");
        assert_eq!(tty.input.len(), "leftover".len());
    }

    #[test]
    fn test_query_cursor_position_without_reply_fails() {
        let mut tty = Scripted {
            input: VecDeque::new(),
            output: Vec::new(),
        };

        assert!(query_cursor_position(&mut tty).is_err());
    }
}
