//! 销售汇总查询

use chrono::NaiveDate;
use mise_cqrs_core::Query;
use mise_errors::{AppError, AppResult};

use crate::domain::sales::SalesRollup;
use crate::domain::value_objects::{Outlet, parse_iso_date};

/// 门店在所选日期的销售汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSalesRollupQuery {
    pub outlet: Outlet,
    pub selected_date: NaiveDate,
}

impl Query for GetSalesRollupQuery {
    type Result = SalesRollup;
}

impl GetSalesRollupQuery {
    pub fn new(outlet: Outlet, selected_date: NaiveDate) -> Self {
        Self {
            outlet,
            selected_date,
        }
    }

    /// 从查询参数构造；两个参数都必填
    pub fn from_params(outlet: Option<&str>, selected_date: Option<&str>) -> AppResult<Self> {
        let (Some(outlet), Some(selected_date)) = (
            outlet.filter(|s| !s.trim().is_empty()),
            selected_date.filter(|s| !s.trim().is_empty()),
        ) else {
            return Err(AppError::missing_parameter(
                "Outlet and Selected Date are required.",
            ));
        };

        let date = parse_iso_date(selected_date).ok_or_else(|| {
            AppError::validation(format!(
                "selectedDate '{}' is not a YYYY-MM-DD date",
                selected_date
            ))
        })?;

        Ok(Self::new(Outlet::new(outlet)?, date))
    }
}
