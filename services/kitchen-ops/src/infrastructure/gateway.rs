//! 按配置选择表格后端

use std::sync::Arc;

use chrono::NaiveDate;
use mise_adapter_sheets::{GoogleSheetsClient, GoogleSheetsConfig};
use mise_config::{AppConfig, SheetsBackend};
use mise_errors::AppResult;
use mise_ports::SheetGateway;
use tracing::{info, warn};

use crate::infrastructure::demo::demo_workbook;

pub fn build_gateway(config: &AppConfig, today: NaiveDate) -> AppResult<Arc<dyn SheetGateway>> {
    match config.sheets.backend {
        SheetsBackend::Google => {
            info!("Using Google Sheets backend");
            let client = GoogleSheetsClient::new(GoogleSheetsConfig::from(&config.sheets))?;
            Ok(Arc::new(client))
        }
        SheetsBackend::Memory => {
            warn!("Using in-memory demo workbook, submissions are not persisted");
            let workbook = demo_workbook(&config.ranges, &config.business.outlets, today)?;
            Ok(Arc::new(workbook))
        }
    }
}
