//! 命令 / 查询处理器

pub mod append_rows_handler;
pub mod catalog_loader;
pub mod sales_rollup_handler;
pub mod submit_entries_handler;

pub use append_rows_handler::*;
pub use catalog_loader::*;
pub use sales_rollup_handler::*;
pub use submit_entries_handler::*;
