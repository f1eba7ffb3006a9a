//! 工作表行 → 领域记录

use std::collections::{BTreeMap, HashSet};

use mise_errors::{AppError, AppResult};
use mise_ports::{Row, cell};
use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::catalog::{Dish, Item, ProductionPlanEntry, UNCATEGORISED};
use crate::domain::value_objects::parse_leading_decimal;

/// 生产计划表头首列
pub const PLAN_KEY_HEADER: &str = "DishName";

fn category_or_default(raw: &str) -> String {
    if raw.is_empty() {
        UNCATEGORISED.to_string()
    } else {
        raw.to_string()
    }
}

/// 名称为空的行跳过；重名时保留第一次出现
fn first_named<T>(rows: &[Row], sheet: &str, build: impl Fn(&Row, &str) -> T) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let name = cell(row, 0);
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_string()) {
            warn!(sheet = %sheet, name = %name, "Duplicate name ignored");
            continue;
        }
        records.push(build(row, name));
    }
    records
}

/// `(name, category, unit, superCategory?)`
pub fn items_from_rows(rows: &[Row]) -> Vec<Item> {
    first_named(rows, "items", |row, name| {
        let super_category = cell(row, 3);
        Item {
            name: name.to_string(),
            category: category_or_default(cell(row, 1)),
            unit: cell(row, 2).to_string(),
            super_category: (!super_category.is_empty()).then(|| super_category.to_string()),
        }
    })
}

/// `(name, category?)`
pub fn dishes_from_rows(rows: &[Row]) -> Vec<Dish> {
    first_named(rows, "dishes", |row, name| Dish {
        name: name.to_string(),
        category: category_or_default(cell(row, 1)),
    })
}

/// 单列顺序表，空白丢弃
pub fn order_list_from_rows(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.iter())
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect()
}

/// 首行为表头：`DishName` 后跟门店列
///
/// 表头缺少任何已配置门店时报 `SchemaMismatch`；多余列忽略。
pub fn plan_from_rows(rows: &[Row], outlets: &[String]) -> AppResult<Vec<ProductionPlanEntry>> {
    let Some((header, body)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let first = cell(header, 0);
    if first != PLAN_KEY_HEADER {
        return Err(AppError::schema_mismatch(format!(
            "Production plan header must start with '{}', found '{}'",
            PLAN_KEY_HEADER, first
        )));
    }

    let columns: Vec<&str> = header.iter().map(|h| h.trim()).collect();
    let missing: Vec<&str> = outlets
        .iter()
        .map(String::as_str)
        .filter(|outlet| !columns[1..].contains(outlet))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::schema_mismatch(format!(
            "Production plan header is missing outlet column(s): {}",
            missing.join(", ")
        )));
    }

    let mut outlet_columns = Vec::with_capacity(outlets.len());
    for (index, column) in columns.iter().enumerate().skip(1) {
        if column.is_empty() {
            continue;
        }
        if outlets.iter().any(|o| o == column) {
            outlet_columns.push((index, column.to_string()));
        } else {
            warn!(column = %column, "Ignoring unexpected production plan column");
        }
    }

    let entries = body
        .iter()
        .filter(|row| !cell(row, 0).is_empty())
        .map(|row| ProductionPlanEntry {
            dish_name: cell(row, 0).to_string(),
            per_outlet_target: outlet_columns
                .iter()
                .map(|(index, outlet)| (outlet.clone(), target_value(cell(row, *index))))
                .collect::<BTreeMap<_, _>>(),
        })
        .collect();

    Ok(entries)
}

fn target_value(raw: &str) -> Decimal {
    parse_leading_decimal(raw).normalize()
}
