pub mod editing;
pub mod file;
pub mod keyboard;
pub mod prompt;
pub mod search;

pub use search::{SearchDirection, SearchState};
