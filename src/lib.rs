//! A raw-mode terminal text editor.

pub mod app;
pub mod buffer;
pub mod config;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod widgets;

// Re-export main types for convenience
pub use app::{App, Cursor, Viewport};
pub use buffer::Buffer;
