//! 本地演示工作簿
//!
//! `memory` 后端使用；数据与默认区域布局一致（首行为表头）。

use chrono::{Days, NaiveDate};
use mise_adapter_sheets::InMemorySheetGateway;
use mise_config::RangesConfig;
use mise_errors::AppResult;
use mise_ports::SheetRange;

const ITEMS: [[&str; 4]; 4] = [
    ["Onion", "Vegetables", "kg", "Produce"],
    ["Tomato", "Vegetables", "kg", "Produce"],
    ["Chicken, Boneless", "Meat", "kg", "Produce"],
    ["500ml Container", "Packaging", "pcs", "Dry Store"],
];

const DISHES: [[&str; 2]; 2] = [["Chicken Stew", "Curries"], ["Veg Stew", "Curries"]];

/// `(dish, [(outlet, target)])`
const PLAN: [(&str, [(&str, &str); 2]); 2] = [
    ("Chicken Stew", [("Yelahanka", "50"), ("Thanisandra", "40")]),
    ("Veg Stew", [("Yelahanka", "75"), ("Thanisandra", "80")]),
];

fn sheet_of(range: &str) -> AppResult<String> {
    Ok(SheetRange::parse(range)?.sheet)
}

fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// 演示工作簿；销售日志为 `today` 之前两周的每日记录
pub fn demo_workbook(
    ranges: &RangesConfig,
    outlets: &[String],
    today: NaiveDate,
) -> AppResult<InMemorySheetGateway> {
    let mut items = vec![header(&["ItemName", "Category", "Unit", "SuperCategory"])];
    items.extend(ITEMS.iter().map(|row| row.iter().map(|c| c.to_string()).collect()));

    let mut dishes = vec![header(&["DishName", "Category"])];
    dishes.extend(DISHES.iter().map(|row| row.iter().map(|c| c.to_string()).collect()));

    let mut plan_header = vec!["DishName".to_string()];
    plan_header.extend(outlets.iter().cloned());
    let mut plan = vec![plan_header];
    for (dish, targets) in PLAN {
        let mut row = vec![dish.to_string()];
        row.extend(outlets.iter().map(|outlet| {
            targets
                .iter()
                .find(|(name, _)| *name == outlet.as_str())
                .map(|(_, target)| target.to_string())
                .unwrap_or_default()
        }));
        plan.push(row);
    }

    let mut sales = vec![header(&["Date", "Outlet", "OrderID", "Amount"])];
    for back in 1..=14u64 {
        let Some(day) = today.checked_sub_days(Days::new(back)) else {
            continue;
        };
        for (index, outlet) in outlets.iter().enumerate() {
            let orders = 20 + (back as usize * 3 + index * 7) % 15;
            sales.push(vec![
                day.format("%Y-%m-%d").to_string(),
                outlet.clone(),
                orders.to_string(),
                format!("{}.00", orders * 240),
            ]);
        }
    }

    let header = |name: &str| vec![vec![name.to_string()]];

    Ok(InMemorySheetGateway::new()
        .with_sheet(&sheet_of(&ranges.items)?, items)
        .with_sheet(&sheet_of(&ranges.dishes)?, dishes)
        .with_sheet(&sheet_of(&ranges.production_plan)?, plan)
        .with_sheet(
            &sheet_of(&ranges.category_order)?,
            [header("Category"), vec![vec!["Vegetables".into()], vec!["Meat".into()]]].concat(),
        )
        .with_sheet(&sheet_of(&ranges.dish_category_order)?, header("Category"))
        .with_sheet(&sheet_of(&ranges.sales_log)?, sales)
        .with_sheet(&ranges.order_log_sheet, Vec::<Vec<String>>::new())
        .with_sheet(&ranges.inventory_log_sheet, Vec::<Vec<String>>::new()))
}
