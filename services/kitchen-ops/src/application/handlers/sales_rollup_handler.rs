//! 销售汇总处理器

use std::sync::Arc;

use async_trait::async_trait;
use mise_cqrs_core::QueryHandler;
use mise_errors::AppResult;
use mise_ports::{SheetGateway, SheetRange};
use tracing::{debug, info};

use crate::application::queries::GetSalesRollupQuery;
use crate::domain::sales::{SalesRecord, SalesRollup};
use crate::domain::services::compute_rollup;

/// 读取销售日志并计算汇总
pub struct SalesRollupHandler {
    gateway: Arc<dyn SheetGateway>,
    sales_range: SheetRange,
    day_first: bool,
}

impl SalesRollupHandler {
    pub fn new(gateway: Arc<dyn SheetGateway>, sales_range: SheetRange, day_first: bool) -> Self {
        Self {
            gateway,
            sales_range,
            day_first,
        }
    }
}

#[async_trait]
impl QueryHandler<GetSalesRollupQuery> for SalesRollupHandler {
    async fn handle(&self, query: GetSalesRollupQuery) -> AppResult<SalesRollup> {
        let rows = self.gateway.read_range(&self.sales_range).await?;
        let log: Vec<SalesRecord> = rows
            .iter()
            .map(|row| SalesRecord::from_row(row, self.day_first))
            .collect();

        let undated = log.iter().filter(|r| r.day.is_none()).count();
        if undated > 0 {
            debug!(undated, "Sales rows with unreadable dates skipped");
        }

        let rollup = compute_rollup(&log, &query.outlet, query.selected_date);
        info!(
            outlet = %query.outlet,
            selected_date = %query.selected_date,
            rows = log.len(),
            "Sales rollup computed"
        );
        Ok(rollup)
    }
}
