//! 值对象

mod numbers;
mod outlet;
mod sheet_date;

pub use numbers::*;
pub use outlet::*;
pub use sheet_date::*;
