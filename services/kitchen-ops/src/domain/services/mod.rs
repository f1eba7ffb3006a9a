//! 领域服务

mod category_grouping;
mod sales_rollup;

pub use category_grouping::*;
pub use sales_rollup::*;
