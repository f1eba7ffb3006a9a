//! 应用层
//!
//! 命令、查询及其处理器；目录快照由 `state::CatalogState` 持有

pub mod commands;
pub mod handlers;
pub mod queries;
pub mod state;
