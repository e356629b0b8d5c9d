pub mod status_bar;
pub mod status_message;

pub use status_bar::StatusBar;
pub use status_message::StatusMessage;
