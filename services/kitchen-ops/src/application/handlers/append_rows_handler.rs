//! 原样追加处理器

use std::sync::Arc;

use async_trait::async_trait;
use mise_cqrs_core::CommandHandler;
use mise_errors::AppResult;
use mise_ports::SheetGateway;
use tracing::info;

use crate::application::commands::AppendRowsCommand;

pub struct AppendRowsHandler {
    gateway: Arc<dyn SheetGateway>,
}

impl AppendRowsHandler {
    pub fn new(gateway: Arc<dyn SheetGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CommandHandler<AppendRowsCommand> for AppendRowsHandler {
    async fn handle(&self, command: AppendRowsCommand) -> AppResult<()> {
        let rows = command.rows.len();
        self.gateway
            .append_rows(&command.sheet_name, command.rows)
            .await?;
        info!(sheet = %command.sheet_name, rows, "Rows appended");
        Ok(())
    }
}
