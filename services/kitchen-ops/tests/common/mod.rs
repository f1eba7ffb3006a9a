//! 集成测试公共工具

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::{FixedOffset, TimeZone};
use figment::{Figment, providers::{Format, Toml}};
use kitchen_ops::domain::clock::{Clock, FixedClock};
use kitchen_ops::{AppState, build_router};
use mise_adapter_sheets::InMemorySheetGateway;
use mise_config::AppConfig;
use mise_errors::AppResult;
use mise_ports::{Row, SheetGateway, SheetRange};
use mockall::mock;
use serde_json::Value;

mock! {
    pub Gateway {}

    #[async_trait]
    impl SheetGateway for Gateway {
        async fn read_range(&self, range: &SheetRange) -> AppResult<Vec<Row>>;
        async fn append_rows(&self, sheet_name: &str, rows: Vec<Vec<Value>>) -> AppResult<()>;
    }
}

pub const OUTLETS: [&str; 2] = ["Yelahanka", "Thanisandra"];

pub fn test_config() -> AppConfig {
    let toml = r#"
        app_env = "test"

        [sheets]
        backend = "memory"

        [business]
        outlets = ["Yelahanka", "Thanisandra"]
        utc_offset_minutes = 330
    "#;
    AppConfig::from_figment(Figment::from(Toml::string(toml))).unwrap()
}

pub fn outlets() -> Vec<String> {
    OUTLETS.iter().map(|s| s.to_string()).collect()
}

/// 2025-01-07（周二）09:30 IST
pub fn fixed_clock() -> Arc<dyn Clock> {
    let ist = FixedOffset::east_opt(330 * 60).unwrap();
    Arc::new(FixedClock(ist.with_ymd_and_hms(2025, 1, 7, 9, 30, 0).unwrap()))
}

pub fn plan_sheet(header: &[&str], rows: &[&[&str]]) -> Vec<Vec<String>> {
    let mut sheet = vec![header.iter().map(|s| s.to_string()).collect::<Vec<_>>()];
    sheet.extend(rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()));
    sheet
}

pub fn workbook() -> InMemorySheetGateway {
    InMemorySheetGateway::new()
        .with_sheet(
            "Master_Items",
            vec![
                vec!["ItemName", "Category", "Unit", "SuperCategory"],
                vec!["Onion", "Vegetables", "kg", "Produce"],
                vec!["Tomato", "Vegetables", "kg", "Produce"],
                vec!["Chicken Boneless", "Meat", "kg", "Produce"],
                vec!["500ml Container", "Packaging", "pcs", "Dry Store"],
            ],
        )
        .with_sheet(
            "Master_Dishes",
            vec![
                vec!["DishName", "Category"],
                vec!["Chicken Stew", "Curries"],
                vec!["Veg Stew", "Curries"],
            ],
        )
        .with_sheet(
            "Production_Plans",
            plan_sheet(
                &["DishName", "Yelahanka", "Thanisandra"],
                &[&["Chicken Stew", "50", "40"], &["Veg Stew", "75", "80"]],
            ),
        )
        .with_sheet("Category_Order", vec![vec!["Category"], vec!["Meat"], vec!["Vegetables"]])
        .with_sheet("Dish_Category_Order", vec![vec!["Category"]])
        .with_sheet(
            "Sales_Log",
            vec![
                vec!["Date", "Outlet", "OrderID", "Amount"],
                vec!["2025-01-06", "Yelahanka", "2", "100"],
                vec!["2025-01-07", "Yelahanka", "3", "150"],
                vec!["2025-01-06", "yelahanka", "9", "900"],
                vec!["1/6/2025", "Thanisandra", "4", "400"],
                vec!["2025-01-08", "Yelahanka", "7", "700"],
            ],
        )
        .with_sheet("Order_Log", Vec::<Vec<String>>::new())
        .with_sheet("Inventory_Log", Vec::<Vec<String>>::new())
}

pub fn state_with(gateway: Arc<dyn SheetGateway>) -> AppState {
    AppState::new(&test_config(), gateway, fixed_clock()).unwrap()
}

/// 路由与底层工作簿（用于检查写入）
pub fn app() -> (Router, Arc<InMemorySheetGateway>) {
    let gateway = Arc::new(workbook());
    let router = build_router(state_with(gateway.clone()), None);
    (router, gateway)
}

pub fn app_with(gateway: Arc<dyn SheetGateway>) -> Router {
    build_router(state_with(gateway), None)
}
