//! 领域层
//!
//! 门店、目录、销售日志与提交行；不依赖任何 IO

pub mod catalog;
pub mod clock;
pub mod sales;
pub mod services;
pub mod submission;
pub mod value_objects;
