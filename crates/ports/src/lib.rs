//! ports - 抽象 trait 层
//!
//! 定义表格存储的抽象接口

mod sheet_gateway;

pub use sheet_gateway::*;
