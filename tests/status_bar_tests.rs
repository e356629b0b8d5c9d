//! Integration tests for the status bar and message bar

use std::time::{Duration, Instant};

use tilde::config::Config;
use tilde::widgets::{StatusBar, StatusMessage};
use tilde::App;

#[tokio::test]
async fn test_status_bar_exact_width() {
    let bar = StatusBar::new("[No Name] - 0 lines", "1/0");

    for width in [0, 5, 19, 20, 22, 23, 40, 80] {
        assert_eq!(bar.compose(width).len(), width);
    }
}

#[tokio::test]
async fn test_status_bar_right_part_only_when_it_fits() {
    let bar = StatusBar::new("abc", "1/9");

    assert_eq!(bar.compose(7), b"abc 1/9");
    assert_eq!(bar.compose(6), b"abc1/9");
    // Room for the left part but not the right
    assert_eq!(bar.compose(5), b"abc  ");
}

#[tokio::test]
async fn test_message_expires() {
    let mut message = StatusMessage::new(Duration::from_secs(5));
    assert!(!message.is_visible_at(Instant::now()));

    message.set("saved");
    let set_at = message.set_at.unwrap();

    assert_eq!(message.visible_text(set_at), Some("saved"));
    assert_eq!(
        message.visible_text(set_at + Duration::from_secs(4)),
        Some("saved")
    );
    assert_eq!(message.visible_text(set_at + Duration::from_secs(5)), None);
}

#[tokio::test]
async fn test_empty_message_is_hidden() {
    let mut message = StatusMessage::default();
    message.set("");
    assert!(!message.is_visible_at(Instant::now()));

    message.set("x");
    message.clear();
    assert!(!message.is_visible_at(Instant::now()));
}

#[tokio::test]
async fn test_status_line_reflects_buffer() {
    let mut app = App::new(Config::default(), 10, 60);
    app.insert_char(b'a');
    app.scroll();

    let frame = app.render_frame(Instant::now());
    let text = String::from_utf8_lossy(frame.as_bytes()).into_owned();

    assert!(text.contains("\x1b[7m[No Name] - 1 lines (modified)"));
    assert!(text.contains(" 1/1\x1b[m\r\n"));
}

#[tokio::test]
async fn test_long_filename_is_cut_to_twenty() {
    let mut app = App::new(Config::default(), 10, 80);
    app.buffer
        .set_filename("a-really-long-file-name-for-testing.txt");
    app.scroll();

    let frame = app.render_frame(Instant::now());
    let text = String::from_utf8_lossy(frame.as_bytes()).into_owned();

    assert!(text.contains("\x1b[7ma-really-long-file-n - 0 lines"));
}
