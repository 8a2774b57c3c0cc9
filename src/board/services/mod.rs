//! Application services for loading the task board.

mod loader;

pub use loader::{load_board, scan_directories};
