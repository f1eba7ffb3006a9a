//! 原样追加行命令

use mise_cqrs_core::Command;
use mise_errors::{AppError, AppResult};
use serde_json::Value;

/// 将位置行原样追加到工作表
#[derive(Debug, Clone, PartialEq)]
pub struct AppendRowsCommand {
    pub sheet_name: String,
    pub rows: Vec<Vec<Value>>,
}

impl Command for AppendRowsCommand {
    type Result = ();
}

impl AppendRowsCommand {
    /// `sheetName` 与 `data` 都必填，`data` 不能为空
    pub fn from_request(
        sheet_name: Option<String>,
        data: Option<Vec<Vec<Value>>>,
    ) -> AppResult<Self> {
        let sheet_name = sheet_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::missing_parameter("sheetName is required"))?;

        let rows = data
            .filter(|rows| !rows.is_empty())
            .ok_or_else(|| AppError::missing_parameter("data must contain at least one row"))?;

        Ok(Self { sheet_name, rows })
    }
}
