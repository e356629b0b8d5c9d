//! Decoding of raw terminal bytes into key events.

use std::collections::VecDeque;
use std::io;

pub const ESC: u8 = 0x1b;
pub const BACKSPACE: u8 = 127;
pub const ENTER: u8 = b'\r';
pub const TAB: u8 = b'\t';

/// The byte a terminal sends for Ctrl + `key`.
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

/// A decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Any single byte that is not the start of an escape sequence,
    /// control bytes and Backspace (127) included.
    Char(u8),
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
}

impl Key {
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        )
    }
}

/// Something bytes can be read from one at a time.
pub trait ByteSource {
    /// Read one byte, or `Ok(None)` if nothing arrived within the read timeout.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Queued bytes; an empty queue behaves like an expired read timeout.
impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    EscSeen,
    EscBracket,
    EscBracketDigit(u8),
}

/// Read a single key from `source`.
///
/// Returns `Ok(None)` when no byte arrives within one read timeout. Once an
/// escape byte is seen, at most three more reads are made; any follow-up
/// byte that is missing or unrecognised resolves the whole sequence to
/// [`Key::Escape`].
pub fn read_key<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Option<Key>> {
    match source.read_byte()? {
        Some(ESC) => {}
        Some(byte) => return Ok(Some(Key::Char(byte))),
        None => return Ok(None),
    }

    let mut state = DecodeState::EscSeen;
    loop {
        let Some(byte) = source.read_byte()? else {
            return Ok(Some(Key::Escape));
        };

        state = match (state, byte) {
            (DecodeState::EscSeen, b'[') => DecodeState::EscBracket,
            (DecodeState::EscSeen, b'O') => {
                let key = match source.read_byte()? {
                    Some(b'H') => Key::Home,
                    Some(b'F') => Key::End,
                    _ => Key::Escape,
                };
                return Ok(Some(key));
            }
            (DecodeState::EscSeen, _) => return Ok(Some(Key::Escape)),
            (DecodeState::EscBracket, digit @ b'0'..=b'9') => DecodeState::EscBracketDigit(digit),
            (DecodeState::EscBracket, letter) => {
                let key = match letter {
                    b'A' => Key::ArrowUp,
                    b'B' => Key::ArrowDown,
                    b'C' => Key::ArrowRight,
                    b'D' => Key::ArrowLeft,
                    b'H' => Key::Home,
                    b'F' => Key::End,
                    _ => Key::Escape,
                };
                return Ok(Some(key));
            }
            (DecodeState::EscBracketDigit(digit), b'~') => {
                let key = match digit {
                    b'1' | b'7' => Key::Home,
                    b'3' => Key::Delete,
                    b'4' | b'8' => Key::End,
                    b'5' => Key::PageUp,
                    b'6' => Key::PageDown,
                    _ => Key::Escape,
                };
                return Ok(Some(key));
            }
            (DecodeState::EscBracketDigit(_), _) => return Ok(Some(Key::Escape)),
        };
    }
}
