//! 订货 / 盘点提交

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use mise_errors::AppError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::value_objects::Outlet;

/// 提交行时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// 提交类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Order,
    Inventory,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Inventory => "inventory",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Order => "Place Your Order",
            Self::Inventory => "Update Closing Inventory",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Order => "SUBMIT ORDER",
            Self::Inventory => "SAVE & SEND TO HQ",
        }
    }

    /// 订货按整数，盘点允许一位小数
    pub fn input_step(&self) -> &'static str {
        match self {
            Self::Order => "1",
            Self::Inventory => "0.1",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "order" => Ok(Self::Order),
            "inventory" => Ok(Self::Inventory),
            other => Err(AppError::not_found(format!("Unknown submission kind '{}'", other))),
        }
    }
}

/// 各提交类型写入的工作表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSheets {
    pub order: String,
    pub inventory: String,
}

impl SubmissionSheets {
    pub fn for_kind(&self, kind: SubmissionKind) -> &str {
        match kind {
            SubmissionKind::Order => &self.order,
            SubmissionKind::Inventory => &self.inventory,
        }
    }
}

/// 写入日志的一行 `(timestamp, outlet, item, quantity)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRow {
    pub timestamp: DateTime<FixedOffset>,
    pub outlet: Outlet,
    pub item_name: String,
    pub quantity: Decimal,
}

impl SubmissionRow {
    pub fn into_cells(self) -> Vec<Value> {
        vec![
            Value::String(self.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            Value::String(self.outlet.to_string()),
            Value::String(self.item_name),
            quantity_value(self.quantity),
        ]
    }
}

/// 整数写成 JSON 整数，其余写成浮点数
pub fn quantity_value(quantity: Decimal) -> Value {
    if quantity.fract().is_zero() {
        if let Some(n) = quantity.to_i64() {
            return Value::from(n);
        }
    }
    quantity
        .to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(quantity.to_string()))
}
