//! Integration tests for key decoding
//!
//! Feeds raw byte sequences through `read_key` the way a terminal would
//! deliver them

use std::collections::VecDeque;

use tilde::input::keys::{ctrl_key, BACKSPACE, ENTER};
use tilde::input::{read_key, Key};

fn bytes(input: &[u8]) -> VecDeque<u8> {
    input.iter().copied().collect()
}

fn decode_all(input: &[u8]) -> Vec<Key> {
    let mut source = bytes(input);
    let mut keys = Vec::new();
    while let Some(key) = read_key(&mut source).unwrap() {
        keys.push(key);
    }
    keys
}

#[tokio::test]
async fn test_plain_bytes() {
    assert_eq!(
        decode_all(b"hi\r\x7f"),
        vec![
            Key::Char(b'h'),
            Key::Char(b'i'),
            Key::Char(ENTER),
            Key::Char(BACKSPACE),
        ]
    );
}

#[tokio::test]
async fn test_control_keys() {
    assert_eq!(ctrl_key(b'q'), 17);
    assert_eq!(ctrl_key(b's'), 19);
    assert_eq!(ctrl_key(b'f'), 6);
    assert_eq!(ctrl_key(b'h'), 8);
    assert_eq!(decode_all(&[17]), vec![Key::Char(ctrl_key(b'q'))]);
}

#[tokio::test]
async fn test_arrow_keys() {
    assert_eq!(
        decode_all(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
        vec![Key::ArrowUp, Key::ArrowDown, Key::ArrowRight, Key::ArrowLeft]
    );
    assert!(Key::ArrowUp.is_arrow());
    assert!(!Key::Home.is_arrow());
}

#[tokio::test]
async fn test_home_end_variants() {
    assert_eq!(
        decode_all(b"\x1b[H\x1b[F\x1bOH\x1bOF\x1b[1~\x1b[7~\x1b[4~\x1b[8~"),
        vec![
            Key::Home,
            Key::End,
            Key::Home,
            Key::End,
            Key::Home,
            Key::Home,
            Key::End,
            Key::End,
        ]
    );
}

#[tokio::test]
async fn test_tilde_sequences() {
    assert_eq!(
        decode_all(b"\x1b[3~\x1b[5~\x1b[6~"),
        vec![Key::Delete, Key::PageUp, Key::PageDown]
    );
}

#[tokio::test]
async fn test_lone_escape() {
    assert_eq!(decode_all(b"\x1b"), vec![Key::Escape]);
}

#[tokio::test]
async fn test_truncated_sequences_are_escape() {
    assert_eq!(decode_all(b"\x1b["), vec![Key::Escape]);
    assert_eq!(decode_all(b"\x1b[5"), vec![Key::Escape]);
    assert_eq!(decode_all(b"\x1bO"), vec![Key::Escape]);
}

#[tokio::test]
async fn test_unknown_sequences_are_escape() {
    // The unrecognised sequence is consumed whole
    assert_eq!(decode_all(b"\x1b[Zx"), vec![Key::Escape, Key::Char(b'x')]);
    assert_eq!(decode_all(b"\x1b[2~"), vec![Key::Escape]);
    assert_eq!(decode_all(b"\x1b[5xy"), vec![Key::Escape, Key::Char(b'y')]);
}

#[tokio::test]
async fn test_timeout_yields_no_key() {
    let mut source = VecDeque::new();
    assert_eq!(read_key(&mut source).unwrap(), None);
}
