//! 命令

pub mod append_rows_command;
pub mod submit_entries_command;

pub use append_rows_command::*;
pub use submit_entries_command::*;
