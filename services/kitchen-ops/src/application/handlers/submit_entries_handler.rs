//! 提交订货 / 盘点处理器

use std::sync::Arc;

use async_trait::async_trait;
use mise_cqrs_core::CommandHandler;
use mise_errors::{AppError, AppResult};
use mise_ports::SheetGateway;
use mise_telemetry::record_submission;
use tracing::{debug, info};

use crate::application::commands::{SubmitEntriesCommand, SubmitEntriesResult};
use crate::domain::clock::Clock;
use crate::domain::submission::{SubmissionRow, SubmissionSheets};
use crate::domain::value_objects::{Outlet, parse_positive_quantity};

/// 过滤出正数数量，以同一时间戳一次性追加
pub struct SubmitEntriesHandler {
    gateway: Arc<dyn SheetGateway>,
    sheets: SubmissionSheets,
    clock: Arc<dyn Clock>,
}

impl SubmitEntriesHandler {
    pub fn new(
        gateway: Arc<dyn SheetGateway>,
        sheets: SubmissionSheets,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            gateway,
            sheets,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<SubmitEntriesCommand> for SubmitEntriesHandler {
    async fn handle(&self, command: SubmitEntriesCommand) -> AppResult<SubmitEntriesResult> {
        let outlet = Outlet::new(command.outlet)?;
        let submitted = command.entries.len();

        let timestamp = self.clock.now();
        let rows: Vec<SubmissionRow> = command
            .entries
            .into_iter()
            .filter_map(|(item_name, raw)| {
                parse_positive_quantity(&raw).map(|quantity| SubmissionRow {
                    timestamp,
                    outlet: outlet.clone(),
                    item_name,
                    quantity,
                })
            })
            .collect();

        if rows.is_empty() {
            return Err(AppError::validation("Please enter at least one quantity"));
        }
        debug!(submitted, kept = rows.len(), "Filtered submission entries");

        let count = rows.len();
        let sheet = self.sheets.for_kind(command.kind);
        self.gateway
            .append_rows(sheet, rows.into_iter().map(SubmissionRow::into_cells).collect())
            .await?;

        record_submission(&command.kind.to_string(), outlet.as_str(), count);
        info!(
            kind = %command.kind,
            outlet = %outlet,
            sheet = %sheet,
            rows = count,
            "Submission recorded"
        );

        Ok(SubmitEntriesResult {
            success: true,
            rows: count,
        })
    }
}
