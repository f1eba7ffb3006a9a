//! 目录加载器
//!
//! 一次并发读取五个区域，再整形为类型化记录。

use std::sync::Arc;

use async_trait::async_trait;
use mise_config::RangesConfig;
use mise_cqrs_core::QueryHandler;
use mise_errors::{AppError, AppResult};
use mise_ports::{Row, SheetGateway, SheetRange};
use tracing::info;

use crate::application::queries::LoadCatalogQuery;
use crate::domain::catalog::Catalog;
use crate::infrastructure::rows::{
    dishes_from_rows, items_from_rows, order_list_from_rows, plan_from_rows,
};

/// 目录所在区域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRanges {
    pub items: SheetRange,
    pub dishes: SheetRange,
    pub production_plan: SheetRange,
    pub category_order: SheetRange,
    pub dish_category_order: SheetRange,
}

impl CatalogRanges {
    pub fn from_config(config: &RangesConfig) -> AppResult<Self> {
        Ok(Self {
            items: SheetRange::parse(&config.items)?,
            dishes: SheetRange::parse(&config.dishes)?,
            production_plan: SheetRange::parse(&config.production_plan)?,
            category_order: SheetRange::parse(&config.category_order)?,
            dish_category_order: SheetRange::parse(&config.dish_category_order)?,
        })
    }

    fn to_vec(&self) -> Vec<SheetRange> {
        vec![
            self.items.clone(),
            self.dishes.clone(),
            self.production_plan.clone(),
            self.category_order.clone(),
            self.dish_category_order.clone(),
        ]
    }
}

/// 目录加载器
pub struct CatalogLoader {
    gateway: Arc<dyn SheetGateway>,
    ranges: CatalogRanges,
    outlets: Vec<String>,
}

impl CatalogLoader {
    pub fn new(
        gateway: Arc<dyn SheetGateway>,
        ranges: CatalogRanges,
        outlets: Vec<String>,
    ) -> Self {
        Self {
            gateway,
            ranges,
            outlets,
        }
    }

    pub async fn load(&self) -> AppResult<Catalog> {
        let results = self.gateway.read_ranges(&self.ranges.to_vec()).await?;
        let [items, dishes, plan, category_order, dish_category_order]: [Vec<Row>; 5] =
            results.try_into().map_err(|_| {
                AppError::internal("Catalog read returned an unexpected number of ranges")
            })?;

        let catalog = Catalog {
            items: items_from_rows(&items),
            dishes: dishes_from_rows(&dishes),
            production_plan: plan_from_rows(&plan, &self.outlets)?,
            category_order: order_list_from_rows(&category_order),
            dish_category_order: order_list_from_rows(&dish_category_order),
        };

        info!(
            items = catalog.items.len(),
            dishes = catalog.dishes.len(),
            plan_entries = catalog.production_plan.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl QueryHandler<LoadCatalogQuery> for CatalogLoader {
    async fn handle(&self, _query: LoadCatalogQuery) -> AppResult<Catalog> {
        self.load().await
    }
}
