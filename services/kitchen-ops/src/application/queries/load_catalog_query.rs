//! 加载目录查询

use mise_cqrs_core::Query;

use crate::domain::catalog::Catalog;

/// 完整读取一次目录
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadCatalogQuery;

impl Query for LoadCatalogQuery {
    type Result = Catalog;
}
