//! 查询

pub mod get_sales_rollup_query;
pub mod load_catalog_query;

pub use get_sales_rollup_query::*;
pub use load_catalog_query::*;
