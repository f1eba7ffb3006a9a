//! 销售日志与汇总结果

use chrono::NaiveDate;
use mise_ports::{Row, cell};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::domain::value_objects::{parse_leading_decimal, parse_leading_int, parse_sheet_date};

/// 销售日志一行 `(date, outlet, orderId, amount)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    /// 无法解析的日期为 None，不落入任何窗口
    pub day: Option<NaiveDate>,
    pub outlet: String,
    /// 该行记录的订单数量（不是唯一 ID）
    pub order_id: i64,
    pub amount: Decimal,
}

impl SalesRecord {
    pub fn from_row(row: &Row, day_first: bool) -> Self {
        Self {
            day: parse_sheet_date(cell(row, 0), day_first),
            // 门店按原文精确匹配，不去空白
            outlet: row.get(1).cloned().unwrap_or_default(),
            order_id: parse_leading_int(cell(row, 2)),
            amount: parse_leading_decimal(cell(row, 3)),
        }
    }
}

/// 闭区间日窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollupWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RollupWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// 窗口内累计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowTotals {
    pub order_count: i64,
    pub amount: Decimal,
}

impl WindowTotals {
    pub fn add(&mut self, record: &SalesRecord) {
        self.order_count = self.order_count.saturating_add(record.order_id);
        self.amount = self.amount.saturating_add(record.amount);
    }
}

fn day_label<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&day.format("%d/%m/%Y"))
}

fn month_label<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&day.format("%B"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YesterdaySales {
    pub order_count: i64,
    pub amount: Decimal,
    #[serde(serialize_with = "day_label")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSales {
    pub order_count: i64,
    pub amount: Decimal,
    #[serde(serialize_with = "day_label")]
    pub start: NaiveDate,
    #[serde(serialize_with = "day_label")]
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSales {
    pub order_count: i64,
    pub amount: Decimal,
    /// 月初，序列化为英文月份名
    #[serde(rename = "month", serialize_with = "month_label")]
    pub month_start: NaiveDate,
}

/// 昨日 / 本周至今 / 本月至今
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRollup {
    pub yesterday: YesterdaySales,
    pub this_week: WeekSales,
    pub this_month: MonthSales,
}
