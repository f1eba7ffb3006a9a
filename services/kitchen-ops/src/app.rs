//! 应用装配
//!
//! `AppState` 显式持有目录快照和各处理器，由路由共享。

use std::sync::Arc;

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use mise_bootstrap::{HealthChecker, health_routes};
use mise_config::AppConfig;
use mise_errors::AppResult;
use mise_ports::{SheetGateway, SheetRange};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::http::api_routes;
use crate::application::handlers::{
    AppendRowsHandler, CatalogLoader, CatalogRanges, SalesRollupHandler, SubmitEntriesHandler,
};
use crate::application::state::CatalogState;
use crate::domain::clock::Clock;
use crate::domain::submission::SubmissionSheets;
use crate::presentation::{Views, page_routes};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogState>,
    pub rollup: Arc<SalesRollupHandler>,
    pub submissions: Arc<SubmitEntriesHandler>,
    pub appender: Arc<AppendRowsHandler>,
    pub views: Arc<Views>,
    pub clock: Arc<dyn Clock>,
    pub outlets: Arc<Vec<String>>,
    pub currency_symbol: Arc<str>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        gateway: Arc<dyn SheetGateway>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let outlets = config.business.outlets.clone();
        let loader = CatalogLoader::new(
            gateway.clone(),
            CatalogRanges::from_config(&config.ranges)?,
            outlets.clone(),
        );
        let rollup = SalesRollupHandler::new(
            gateway.clone(),
            SheetRange::parse(&config.ranges.sales_log)?,
            config.business.day_first_dates,
        );
        let sheets = SubmissionSheets {
            order: config.ranges.order_log_sheet.clone(),
            inventory: config.ranges.inventory_log_sheet.clone(),
        };

        Ok(Self {
            catalog: Arc::new(CatalogState::new(loader)),
            rollup: Arc::new(rollup),
            submissions: Arc::new(SubmitEntriesHandler::new(
                gateway.clone(),
                sheets,
                clock.clone(),
            )),
            appender: Arc::new(AppendRowsHandler::new(gateway)),
            views: Arc::new(Views::new()?),
            clock,
            outlets: Arc::new(outlets),
            currency_symbol: Arc::from(config.business.currency_symbol.as_str()),
        })
    }
}

/// 业务路由 + 健康检查路由
pub fn build_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let checker = HealthChecker::new().with_probe(state.catalog.clone());

    Router::new()
        .merge(api_routes())
        .merge(page_routes())
        .with_state(state)
        .merge(health_routes(checker, metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
