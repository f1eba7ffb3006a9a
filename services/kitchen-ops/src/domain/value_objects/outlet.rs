//! Outlet 值对象

use derive_more::Display;
use mise_errors::{AppError, AppResult};
use serde::Serialize;

/// 门店名称，所有按门店划分的数据都以它为分区键
///
/// 匹配区分大小写且不做规范化：`"yelahanka"` 与 `"Yelahanka"` 是两个门店。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct Outlet(String);

impl Outlet {
    /// 空白名称视为缺少参数
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::missing_parameter("outlet is required"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 与日志中的门店单元格精确比较
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw
    }
}
