//! Sheet Gateway trait 定义

use std::fmt;

use async_trait::async_trait;
use futures::future::try_join_all;
use mise_errors::{AppError, AppResult};
use serde_json::Value;

/// 一行单元格（格式化后的文本，末尾空单元格可能缺失）
pub type Row = Vec<String>;

/// 按列号取单元格，缺失视为空串
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|s| s.trim()).unwrap_or("")
}

/// 工作表区域，如 `Sales_Log!A2:D`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetRange {
    pub sheet: String,
    pub cells: String,
}

impl SheetRange {
    pub fn new(sheet: impl Into<String>, cells: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            cells: cells.into(),
        }
    }

    /// 解析 A1 记法 `Sheet!A2:C`，工作表名可带单引号
    pub fn parse(notation: &str) -> AppResult<Self> {
        let (sheet, cells) = notation.rsplit_once('!').ok_or_else(|| {
            AppError::validation(format!("Range '{}' has no sheet name", notation))
        })?;

        let sheet = sheet.trim().trim_matches('\'');
        let cells = cells.trim();
        if sheet.is_empty() || cells.is_empty() {
            return Err(AppError::validation(format!("Range '{}' is incomplete", notation)));
        }

        Ok(Self::new(sheet, cells))
    }

    /// 追加写入使用的整列区域
    pub fn append_target(sheet: &str) -> Self {
        Self::new(sheet, "A:D")
    }

    /// A1 记法
    pub fn to_a1(&self) -> String {
        if self.sheet.contains(' ') {
            format!("'{}'!{}", self.sheet, self.cells)
        } else {
            format!("{}!{}", self.sheet, self.cells)
        }
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// 表格网关：只读取和追加，不含业务逻辑
#[async_trait]
pub trait SheetGateway: Send + Sync {
    /// 读取区域内所有行；区域为空时返回空集合
    async fn read_range(&self, range: &SheetRange) -> AppResult<Vec<Row>>;

    /// 将行原样追加到 `{sheet_name}!A:D`
    async fn append_rows(&self, sheet_name: &str, rows: Vec<Vec<Value>>) -> AppResult<()>;

    /// 并发读取多个区域，结果顺序与请求一致；任一失败即整体失败
    async fn read_ranges(&self, ranges: &[SheetRange]) -> AppResult<Vec<Vec<Row>>> {
        try_join_all(ranges.iter().map(|range| self.read_range(range))).await
    }
}
