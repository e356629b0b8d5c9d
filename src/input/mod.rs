pub mod keys;
pub mod scroll;

pub use keys::{read_key, ByteSource, Key};
pub use scroll::CursorMovement;
